//! 统一错误类型定义.
//!
//! 所有 Lan crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Lan 框架统一错误类型
#[derive(Debug, Error)]
pub enum LanError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 数据不足, 需要更多输入
    #[error("数据不足, 需要更多输入")]
    NeedMoreData,

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 内存分配失败
    #[error("内存分配失败: {0}")]
    OutOfMemory(String),

    /// 未找到指定的滤镜
    #[error("未找到滤镜: {0}")]
    FilterNotFound(String),

    /// 无效数据 (损坏的码流等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Lan 框架统一 Result 类型
pub type LanResult<T> = Result<T, LanError>;
