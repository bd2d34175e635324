//! # lan-bsf
//!
//! Lan 码流过滤框架滤镜库, 提供数据包级别的码流滤镜 (bitstream filter) 框架.
//!
//! 本 crate 对标 FFmpeg 的 bitstream filter 层: 滤镜在不解码的前提下
//! 对压缩数据包做检查与改写 (提取侧数据、剥离字节等).
//!
//! ## 支持的滤镜
//!
//! - **extract_extradata**: 从包内提取参数集/序列头作为新 extradata
//!
//! ## 使用示例
//!
//! ```rust
//! use lan_bsf::BsfChain;
//! use lan_bsf::filters::extract_extradata::ExtractExtradataFilter;
//! use lan_codec::{CodecId, Packet};
//!
//! let mut chain = BsfChain::new();
//! let bsf = ExtractExtradataFilter::new(CodecId::H264, false).unwrap();
//! chain.add_filter(Box::new(bsf));
//!
//! let mut pkt = Packet::from_data(vec![0x00, 0x00, 0x01, 0x67, 0x42]);
//! chain.process_packet(&mut pkt).unwrap();
//! ```

pub mod filters;

use lan_codec::Packet;
use lan_core::LanResult;

/// 码流滤镜 trait
///
/// 所有码流滤镜都实现此 trait. 与帧滤镜不同, 码流滤镜按同步
/// 调用-返回模型工作: 每次调用完整处理一个数据包, 原地改写,
/// 调用之间不保留对包的引用, 也没有内部缓冲.
pub trait BitstreamFilter: Send {
    /// 获取滤镜名称
    fn name(&self) -> &str;

    /// 处理一个数据包 (原地改写)
    fn filter(&mut self, packet: &mut Packet) -> LanResult<()>;
}

/// 码流滤镜链
///
/// 由多个码流滤镜组成的处理管线, 数据包依次流经每个滤镜.
pub struct BsfChain {
    /// 滤镜链中的滤镜列表
    filters: Vec<Box<dyn BitstreamFilter>>,
}

impl BsfChain {
    /// 创建空的滤镜链
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// 添加滤镜到链尾
    pub fn add_filter(&mut self, filter: Box<dyn BitstreamFilter>) {
        self.filters.push(filter);
    }

    /// 获取滤镜数量
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// 将数据包依次送经每个滤镜, 原地改写.
    ///
    /// 如果滤镜链为空, 数据包原样透传.
    /// 任一滤镜失败时立即返回错误, 后续滤镜不再执行.
    pub fn process_packet(&mut self, packet: &mut Packet) -> LanResult<()> {
        for filter in &mut self.filters {
            filter.filter(packet)?;
        }
        Ok(())
    }

    /// 获取滤镜名称列表 (调试用)
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Default for BsfChain {
    fn default() -> Self {
        Self::new()
    }
}

// 便捷重导出
pub use filters::extract_extradata::ExtractExtradataFilter;
