//! Tandoor Server - 餐厅在线订餐与预订后端
//!
//! # 架构概述
//!
//! 本模块是订餐后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT + Argon2 认证体系，角色门控
//! - **HTTP API** (`api`): RESTful API 接口
//! - **同步总线** (`sync`): TCP 变更通知通道 (change feed)
//!
//! # 模块结构
//!
//! ```text
//! tandoor-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── auth/          # JWT 认证、角色中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repositories)
//! ├── sync/          # 变更通知总线
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod sync;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use sync::SyncBus;
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ______                __
 /_  __/___ _____  ____/ /___  ____  _____
  / / / __ `/ __ \/ __  / __ \/ __ \/ ___/
 / / / /_/ / / / / /_/ / /_/ / /_/ / /
/_/  \__,_/_/ /_/\__,_/\____/\____/_/
    "#
    );
}
