//! 码流解析器.
//!
//! 提供对 H.264 与 H.265 Annex B 码流的 NAL 单元分割能力,
//! 供码流滤镜 (如 extract_extradata) 使用.

pub mod h264;
pub mod h265;
