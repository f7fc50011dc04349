//! Onboarding Server - 客户入驻 CRUD 服务
//!
//! # 架构概述
//!
//! 客户、商户 (含门店)、合同与付款信息的内存存储，通过 HTTP 暴露：
//!
//! ```text
//! shared::models          实体定义
//!   -> store::MemoryStore   每种实体一个有序存储
//!     -> store::repository  字段校验 + 外键检查
//!       -> api::*           axum 处理器
//! ```
//!
//! # 模块结构
//!
//! ```text
//! onboard-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── store/         # 存储、仓库、校验、演示数据
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由汇总与中间件
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod routes;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use store::{EntityStore, MemoryStore, StoreError, StoreResult};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env is optional
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        anyhow::bail!("failed to load .env: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
  ___        _                      _
 / _ \ _ __ | |__   ___   __ _ _ __| |
| | | | '_ \| '_ \ / _ \ / _` | '__| |
| |_| | | | | |_) | (_) | (_| | |  |_|
 \___/|_| |_|_.__/ \___/ \__,_|_|  (_)
    "#
    );
}
