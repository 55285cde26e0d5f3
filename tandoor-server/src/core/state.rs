use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::core::error::{Result, ServerError};
use crate::db::DbService;
use crate::sync::SyncBus;
use shared::sync::{BusMessage, SyncPayload};

/// 资源版本管理器
///
/// 使用 DashMap 实现无锁并发的版本号管理。
/// 每种资源类型维护独立的版本号，支持原子递增。
///
/// 用于 broadcast_sync 时自动生成递增的版本号，
/// 客户端可以通过版本号判断变更通知的新旧。
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | sync_bus | SyncBus | 变更通知总线 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | resource_versions | Arc<ResourceVersions> | 资源版本管理 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 变更通知总线
    pub sync_bus: SyncBus,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 资源版本管理器 (用于 broadcast_sync 自动递增版本号)
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database)
    /// 3. JWT 服务、同步总线
    pub async fn initialize(config: &Config) -> Result<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| ServerError::Database(format!("work dir: {e}")))?;

        let db_service = DbService::open(&config.database_dir())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            sync_bus: SyncBus::new(config.sync_tcp_port),
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            resource_versions: Arc::new(ResourceVersions::new()),
        })
    }

    /// 构造内存态服务器状态 (测试用)
    pub async fn initialize_in_memory(config: &Config) -> Result<Self> {
        let db_service = DbService::open_in_memory()
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            sync_bus: SyncBus::new(config.sync_tcp_port),
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            resource_versions: Arc::new(ResourceVersions::new()),
        })
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 广播同步消息
    ///
    /// 向所有连接的客户端广播资源变更通知。
    /// 版本号由 ResourceVersions 自动递增管理。
    ///
    /// # 参数
    /// - `resource`: 资源类型 (如 "order", "menu_item", "booking")
    /// - `action`: 变更类型 ("created", "updated", "deleted", "status_changed")
    /// - `id`: 资源 ID
    pub fn broadcast_sync(&self, resource: &str, action: &str, id: &str) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            action: action.to_string(),
            id: id.to_string(),
            version,
        };
        self.sync_bus.publish(BusMessage::sync(payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_increment_per_resource() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.get("order"), 0);
        assert_eq!(versions.increment("order"), 1);
        assert_eq!(versions.increment("order"), 2);
        assert_eq!(versions.increment("booking"), 1);
        assert_eq!(versions.get("order"), 2);
    }
}
