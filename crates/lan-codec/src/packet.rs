//! 压缩数据包 (Packet) 与包侧数据 (side data).
//!
//! 对标 FFmpeg 的 `AVPacket`, 表示从容器格式中读取的一帧压缩数据.
//! 侧数据对标 `AVPacketSideData`, 用于携带与载荷字节并行的辅助信息
//! (例如码流滤镜提取出的新 extradata).

use bitflags::bitflags;
use bytes::Bytes;
use lan_core::Rational;

bitflags! {
    /// 数据包标志位
    ///
    /// 对标 FFmpeg 的 `AV_PKT_FLAG_*`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PacketFlags: u32 {
        /// 关键帧
        const KEY = 1 << 0;
        /// 数据已损坏
        const CORRUPT = 1 << 1;
    }
}

/// 包侧数据类型
///
/// 对标 FFmpeg 的 `AVPacketSideDataType`, 闭集枚举, 按需扩展.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PacketSideDataType {
    /// 新的 extradata (对标 `AV_PKT_DATA_NEW_EXTRADATA`)
    ///
    /// 由码流滤镜从包内提取出的参数集/序列头字节,
    /// 解码器应在处理本包之前应用.
    NewExtradata,
}

/// 一条包侧数据
#[derive(Debug, Clone)]
pub struct PacketSideData {
    /// 侧数据类型
    pub kind: PacketSideDataType,
    /// 侧数据字节
    pub data: Bytes,
}

/// 压缩数据包
///
/// 从容器格式中读取的一帧压缩数据, 可附带若干条侧数据.
/// 载荷使用 `Bytes`, 替换/收窄载荷窗口时无需拷贝剩余字节.
#[derive(Debug, Clone)]
pub struct Packet {
    /// 压缩数据
    pub data: Bytes,
    /// 显示时间戳 (PTS)
    pub pts: i64,
    /// 解码时间戳 (DTS)
    pub dts: i64,
    /// 数据包时长 (以 time_base 为单位)
    pub duration: i64,
    /// 时间基
    pub time_base: Rational,
    /// 所属流的索引
    pub stream_index: usize,
    /// 标志位
    pub flags: PacketFlags,
    /// 在容器中的字节偏移量 (-1 表示未知)
    pub pos: i64,
    /// 侧数据列表 (保持附加顺序)
    pub side_data: Vec<PacketSideData>,
}

impl Packet {
    /// 创建空数据包
    pub fn empty() -> Self {
        Self {
            data: Bytes::new(),
            pts: lan_core::timestamp::NOPTS_VALUE,
            dts: lan_core::timestamp::NOPTS_VALUE,
            duration: 0,
            time_base: Rational::UNDEFINED,
            stream_index: 0,
            flags: PacketFlags::empty(),
            pos: -1,
            side_data: Vec::new(),
        }
    }

    /// 从数据创建数据包
    pub fn from_data(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            ..Self::empty()
        }
    }

    /// 数据大小 (字节)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 是否为空包 (flush packet)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 是否为关键帧
    pub fn is_keyframe(&self) -> bool {
        self.flags.contains(PacketFlags::KEY)
    }

    /// 附加一条侧数据, 缓冲所有权转移进数据包
    pub fn add_side_data(&mut self, kind: PacketSideDataType, data: impl Into<Bytes>) {
        self.side_data.push(PacketSideData {
            kind,
            data: data.into(),
        });
    }

    /// 查找第一条指定类型的侧数据
    pub fn side_data(&self, kind: PacketSideDataType) -> Option<&Bytes> {
        self.side_data
            .iter()
            .find(|sd| sd.kind == kind)
            .map(|sd| &sd.data)
    }
}
