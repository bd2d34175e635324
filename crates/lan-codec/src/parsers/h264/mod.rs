//! H.264/AVC 码流解析器.
//!
//! 提供对 H.264 Annex B 格式码流的解析能力:
//! - NAL 单元分割与类型识别
//! - RBSP 提取 (去除 emulation prevention 字节)

pub mod nal;

pub use nal::{NalUnit, NalUnitType, split_annex_b};
