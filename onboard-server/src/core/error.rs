use thiserror::Error;

/// 服务器生命周期错误 (启动、监听、运行)
///
/// 请求级错误使用 [`shared::AppError`]。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法监听 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("服务器运行错误: {0}")]
    Serve(#[from] std::io::Error),

    #[error("初始化失败: {0}")]
    Init(String),
}

/// 服务器操作的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
