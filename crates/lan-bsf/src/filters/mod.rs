//! 码流滤镜实现.

pub mod extract_extradata;
