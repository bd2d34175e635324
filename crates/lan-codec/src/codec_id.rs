//! 编解码器标识符.
//!
//! 对标 FFmpeg 的 `AVCodecID`, 为每种编解码算法分配唯一标识.

use std::fmt;
use lan_core::MediaType;

/// 编解码器标识符
///
/// 唯一标识一种编解码算法, 与容器格式无关.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CodecId {
    /// 未知编解码器
    None,

    // ========================
    // 视频编解码器
    // ========================
    /// H.264 / AVC / MPEG-4 Part 10
    H264,
    /// H.265 / HEVC / MPEG-H Part 2
    H265,
    /// VC-1 / SMPTE 421M
    Vc1,
    /// AVS (中国音视频编码标准)
    Cavs,
    /// MPEG-1 Video
    Mpeg1Video,
    /// MPEG-2 Video
    Mpeg2Video,
    /// MPEG-4 Part 2 (ASP)
    Mpeg4,
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// AV1 (Alliance for Open Media)
    Av1,

    // ========================
    // 音频编解码器
    // ========================
    /// AAC (Advanced Audio Coding)
    Aac,
    /// MP3 (MPEG Audio Layer III)
    Mp3,
    /// Opus
    Opus,
    /// FLAC (Free Lossless Audio Codec)
    Flac,
}

impl CodecId {
    /// 获取编解码器对应的媒体类型
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::None => MediaType::Data,

            // 视频
            Self::H264
            | Self::H265
            | Self::Vc1
            | Self::Cavs
            | Self::Mpeg1Video
            | Self::Mpeg2Video
            | Self::Mpeg4
            | Self::Vp8
            | Self::Vp9
            | Self::Av1 => MediaType::Video,

            // 音频
            Self::Aac | Self::Mp3 | Self::Opus | Self::Flac => MediaType::Audio,
        }
    }

    /// 获取编解码器的人类可读名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::H264 => "h264",
            Self::H265 => "hevc",
            Self::Vc1 => "vc1",
            Self::Cavs => "cavs",
            Self::Mpeg1Video => "mpeg1video",
            Self::Mpeg2Video => "mpeg2video",
            Self::Mpeg4 => "mpeg4",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::Av1 => "av1",
            Self::Aac => "aac",
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Flac => "flac",
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_id_name() {
        assert_eq!(CodecId::H264.name(), "h264");
        assert_eq!(CodecId::H265.name(), "hevc");
        assert_eq!(CodecId::Vc1.name(), "vc1");
        assert_eq!(CodecId::Mpeg2Video.name(), "mpeg2video");
    }

    #[test]
    fn test_codec_id_media_type() {
        assert_eq!(CodecId::H264.media_type(), MediaType::Video);
        assert_eq!(CodecId::Cavs.media_type(), MediaType::Video);
        assert_eq!(CodecId::Aac.media_type(), MediaType::Audio);
        assert_eq!(CodecId::None.media_type(), MediaType::Data);
    }
}
