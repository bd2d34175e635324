//! # lan-codec
//!
//! Lan 码流过滤框架的数据包抽象与码流解析库.
//!
//! 本 crate 对标 FFmpeg 的 libavcodec (不含解码部分), 定义了
//! Packet / 包侧数据 (side data) 抽象以及 H.264/H.265 NAL 单元分割器.
//!
//! ## 使用示例
//!
//! ```rust
//! use lan_codec::{CodecId, Packet};
//!
//! let pkt = Packet::from_data(vec![0x00, 0x00, 0x01, 0x67, 0x42]);
//! assert_eq!(pkt.size(), 5);
//! assert_eq!(CodecId::H264.name(), "h264");
//! ```

pub mod codec_id;
pub mod packet;
pub mod parsers;

// 重导出常用类型
pub use codec_id::CodecId;
pub use packet::{Packet, PacketFlags, PacketSideData, PacketSideDataType};
