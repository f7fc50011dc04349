//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ErrorBody`] - 错误响应体 (from shared::error)
//! - 日志初始化

pub mod logger;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
