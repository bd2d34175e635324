//! extract_extradata 码流滤镜.
//!
//! 对标 FFmpeg 的 `extract_extradata` bitstream filter: 在不解码的前提下,
//! 从压缩数据包内提取编解码器初始化数据 (H.264/HEVC 的参数集,
//! VC-1/MPEG 的序列头), 以 `NewExtradata` 侧数据的形式附加到包上;
//! 开启 remove 模式时同时把这些字节从载荷中剥离.
//!
//! 支持的编解码器: H.264, HEVC, VC-1, MPEG-1/2/4, CAVS.
//! 不支持的编解码器应由外部分派层提前拒绝, 走到本滤镜即视为注册不一致.

use bytes::Bytes;
use lan_codec::parsers::{h264, h265};
use lan_codec::{CodecId, Packet, PacketSideDataType};
use lan_core::{LanError, LanResult};
use log::debug;

use crate::BitstreamFilter;

/// VC-1 序列头起始码 (00 00 01 0F)
const VC1_CODE_SEQHDR: u32 = 0x0000_010F;
/// VC-1 入口点起始码 (00 00 01 0E)
const VC1_CODE_ENTRYPOINT: u32 = 0x0000_010E;

/// 判断 32 位滚动窗口是否命中起始码 (高 24 位为 0x000001)
const fn is_marker(state: u32) -> bool {
    (state & 0xFFFF_FF00) == 0x0000_0100
}

/// 提取策略
///
/// 闭集分派: 每种策略对应一种码流分隔约定,
/// 新增编解码器家族必须同时新增解析算法.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extractor {
    /// H.264/HEVC: NAL 单元分割
    H2645,
    /// VC-1: 起始码滚动扫描, 序列头/入口点之后的第一个其他起始码定界
    Vc1,
    /// MPEG-1/2/4 与 CAVS: 起始码滚动扫描, 第一个图像级起始码定界
    Mpeg124,
}

impl Extractor {
    /// 按编解码器标识选择策略, 不支持的编解码器返回 `None`
    fn for_codec(codec_id: CodecId) -> Option<Self> {
        match codec_id {
            CodecId::H264 | CodecId::H265 => Some(Self::H2645),
            CodecId::Vc1 => Some(Self::Vc1),
            CodecId::Cavs | CodecId::Mpeg1Video | CodecId::Mpeg2Video | CodecId::Mpeg4 => {
                Some(Self::Mpeg124)
            }
            _ => None,
        }
    }
}

/// 一次提取的输出
///
/// 两个缓冲在装配进数据包之前由本结构独占持有,
/// 任一路径提前返回时随之整体释放, 包上看不到半成品变更.
struct Extracted {
    /// 提取出的 extradata 字节 (精确长度, 非空)
    extradata: Vec<u8>,
    /// 剥离 extradata 后的新载荷 (仅 remove 模式下存在)
    filtered: Option<Bytes>,
}

/// extract_extradata 码流滤镜
///
/// 提取策略在构造时按编解码器标识绑定一次, 之后每个包走同一条路径.
pub struct ExtractExtradataFilter {
    /// 输入流的编解码器标识
    codec_id: CodecId,
    /// 绑定的提取策略
    extractor: Extractor,
    /// 是否从载荷中剥离提取出的字节 (默认 false)
    remove: bool,
}

impl ExtractExtradataFilter {
    /// 创建滤镜, 按编解码器标识绑定提取策略
    ///
    /// `remove` 为 true 时, 提取出的字节同时从包载荷中剥离.
    ///
    /// 不支持的编解码器返回 `Internal` 错误: 外部分派层本应拒绝它,
    /// 走到这里说明注册表出了问题, 而不是数据问题.
    pub fn new(codec_id: CodecId, remove: bool) -> LanResult<Self> {
        let extractor = Extractor::for_codec(codec_id).ok_or_else(|| {
            LanError::Internal(format!(
                "extract_extradata 没有注册 {} 的提取策略",
                codec_id
            ))
        })?;
        Ok(Self {
            codec_id,
            extractor,
            remove,
        })
    }

    /// 本滤镜支持的编解码器集合
    pub const fn supported_codecs() -> &'static [CodecId] {
        &[
            CodecId::Cavs,
            CodecId::H264,
            CodecId::H265,
            CodecId::Mpeg1Video,
            CodecId::Mpeg2Video,
            CodecId::Mpeg4,
            CodecId::Vc1,
        ]
    }

    /// H.264/HEVC: 按 NAL 单元类型收集参数集
    ///
    /// 每个命中的 NAL 以 3 字节起始码 `00 00 01` 为前缀写入 extradata;
    /// remove 模式下其余 NAL 以同样格式重组为新载荷,
    /// 新载荷长度即写入游标位置 (而非分配上界).
    fn extract_h2645(&self, pkt: &Packet) -> LanResult<Option<Extracted>> {
        // (是否参数集, 原始 NAL 字节) 列表, 保持原始顺序
        let nals: Vec<(bool, Vec<u8>)> = match self.codec_id {
            CodecId::H264 => h264::split_annex_b(&pkt.data)?
                .into_iter()
                .map(|n| (n.nal_type.is_parameter_set(), n.data))
                .collect(),
            CodecId::H265 => h265::split_annex_b(&pkt.data)?
                .into_iter()
                .map(|n| (n.nal_type.is_parameter_set(), n.data))
                .collect(),
            _ => {
                return Err(LanError::Internal(format!(
                    "H2645 策略不应绑定到 {}",
                    self.codec_id
                )));
            }
        };

        let extradata_size: usize = nals
            .iter()
            .filter(|(is_ps, _)| *is_ps)
            .map(|(_, data)| data.len() + 3)
            .sum();
        if extradata_size == 0 {
            return Ok(None);
        }

        let mut extradata = alloc_buffer(extradata_size)?;
        // 上界分配: 非参数集 NAL 是原载荷的子集
        let mut filtered = if self.remove {
            Some(alloc_buffer(pkt.size())?)
        } else {
            None
        };

        for (is_ps, nal) in &nals {
            if *is_ps {
                extradata.extend_from_slice(&[0x00, 0x00, 0x01]);
                extradata.extend_from_slice(nal);
            } else if let Some(buf) = filtered.as_mut() {
                buf.extend_from_slice(&[0x00, 0x00, 0x01]);
                buf.extend_from_slice(nal);
            }
        }

        Ok(Some(Extracted {
            extradata,
            filtered: filtered.map(Bytes::from),
        }))
    }

    /// VC-1: 滚动扫描起始码
    ///
    /// 序列头或入口点起始码标记"存在 extradata";
    /// 其后第一个其他起始码处截断, extradata 为载荷前缀.
    fn extract_vc1(&self, pkt: &Packet) -> LanResult<Option<Extracted>> {
        let data = &pkt.data;
        let mut state = u32::MAX;
        let mut has_extradata = false;
        let mut extradata_size = 0usize;

        for (i, &b) in data.iter().enumerate() {
            state = (state << 8) | u32::from(b);
            if is_marker(state) {
                if state == VC1_CODE_SEQHDR || state == VC1_CODE_ENTRYPOINT {
                    has_extradata = true;
                } else if has_extradata {
                    // 当前起始码的 4 字节不属于 extradata
                    extradata_size = i - 3;
                    break;
                }
            }
        }

        if extradata_size == 0 {
            return Ok(None);
        }
        self.split_prefix(pkt, extradata_size).map(Some)
    }

    /// MPEG-1/2/4 与 CAVS: 滚动扫描起始码
    ///
    /// MPEG-1/2 在 [0x100, 0x200) 区间内命中任意图像级起始码,
    /// 但排除 0x1B3 (sequence_header_code) 与 0x1B5 (extension_start_code),
    /// 它们本身属于 extradata; MPEG-4/CAVS 只认 0x1B3 与 0x1B6.
    /// 无论哪种变体, 都在第一次命中处停止扫描.
    fn extract_mpeg124(&self, pkt: &Packet) -> LanResult<Option<Extracted>> {
        let is_mpeg12 = matches!(self.codec_id, CodecId::Mpeg1Video | CodecId::Mpeg2Video);
        let data = &pkt.data;
        let mut state = u32::MAX;
        let mut extradata_size = 0usize;

        for (i, &b) in data.iter().enumerate() {
            state = (state << 8) | u32::from(b);
            let hit = if is_mpeg12 {
                state != 0x1B3 && state != 0x1B5 && state < 0x200 && state >= 0x100
            } else {
                state == 0x1B3 || state == 0x1B6
            };
            if hit {
                // i <= 3 时起始码位于载荷开头, 没有可提取的前缀
                if i > 3 {
                    extradata_size = i - 3;
                }
                break;
            }
        }

        if extradata_size == 0 {
            return Ok(None);
        }
        self.split_prefix(pkt, extradata_size).map(Some)
    }

    /// 把载荷前 `size` 字节复制为 extradata;
    /// remove 模式下新载荷为原 `Bytes` 收窄后的窗口, 剩余部分零拷贝.
    fn split_prefix(&self, pkt: &Packet, size: usize) -> LanResult<Extracted> {
        let mut extradata = alloc_buffer(size)?;
        extradata.extend_from_slice(&pkt.data[..size]);

        let filtered = if self.remove {
            Some(pkt.data.slice(size..))
        } else {
            None
        };

        Ok(Extracted {
            extradata,
            filtered,
        })
    }
}

impl BitstreamFilter for ExtractExtradataFilter {
    fn name(&self) -> &str {
        "extract_extradata"
    }

    fn filter(&mut self, pkt: &mut Packet) -> LanResult<()> {
        let extracted = match self.extractor {
            Extractor::H2645 => self.extract_h2645(pkt)?,
            Extractor::Vc1 => self.extract_vc1(pkt)?,
            Extractor::Mpeg124 => self.extract_mpeg124(pkt)?,
        };

        // 未找到 extradata: 包原样透传, remove 模式下也不改动载荷
        let Some(Extracted {
            extradata,
            filtered,
        }) = extracted
        else {
            return Ok(());
        };

        debug!(
            "extract_extradata: codec={}, extradata_size={}, remove={}",
            self.codec_id,
            extradata.len(),
            self.remove
        );

        // 以下两步都不再失败: 先换载荷再附加侧数据,
        // 旧载荷缓冲在替换时释放, extradata 所有权转移进包.
        if let Some(filtered) = filtered {
            pkt.data = filtered;
        }
        pkt.add_side_data(PacketSideDataType::NewExtradata, extradata);

        Ok(())
    }
}

/// 分配精确容量的缓冲, 失败映射为 `OutOfMemory`
fn alloc_buffer(size: usize) -> LanResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| LanError::OutOfMemory(format!("extradata 缓冲分配失败, size={size}")))?;
    Ok(buf)
}
