//! # Lan (澜)
//!
//! 纯 Rust 实现的码流过滤框架, 对标 FFmpeg 的 bitstream filter 层.
//!
//! Lan 在不解码的前提下对压缩数据包做检查与改写:
//! - **extract_extradata**: 提取参数集/序列头为新 extradata 侧数据,
//!   可选择同时从载荷中剥离
//!
//! # 快速开始
//!
//! ```rust
//! use lan::bsf::{BsfChain, ExtractExtradataFilter};
//! use lan::codec::{CodecId, Packet, PacketSideDataType};
//!
//! let mut chain = BsfChain::new();
//! chain.add_filter(Box::new(
//!     ExtractExtradataFilter::new(CodecId::H264, false).unwrap(),
//! ));
//!
//! let mut pkt = Packet::from_data(vec![0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E]);
//! chain.process_packet(&mut pkt).unwrap();
//! assert!(pkt.side_data(PacketSideDataType::NewExtradata).is_some());
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `lan-core` | 核心类型与工具 |
//! | `lan-codec` | 数据包抽象与码流解析 |
//! | `lan-bsf` | 码流滤镜框架 |

/// 核心类型与工具 (对标 libavutil)
pub use lan_core as core;

/// 数据包抽象与码流解析 (对标 libavcodec)
pub use lan_codec as codec;

/// 码流滤镜框架 (对标 FFmpeg 的 bsf 层)
pub use lan_bsf as bsf;

/// 获取 Lan 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
