use crate::auth::JwtConfig;
use std::path::PathBuf;

/// 服务器配置 - 订餐后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/tandoor | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | SYNC_TCP_PORT | 8081 | TCP 同步总线端口 |
/// | JWT_SECRET | (dev default) | JWT 签名密钥 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/tandoor HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// TCP 同步总线端口 (变更通知通道)
    pub sync_tcp_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tandoor".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            sync_tcp_port: std::env::var("SYNC_TCP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            jwt: JwtConfig::from_env(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, sync_tcp_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.sync_tcp_port = sync_tcp_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(PathBuf::from(&self.work_dir).join("logs"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_ports_and_work_dir() {
        let config = Config::with_overrides("/tmp/tandoor-test", 18080, 18081);
        assert_eq!(config.work_dir, "/tmp/tandoor-test");
        assert_eq!(config.http_port, 18080);
        assert_eq!(config.sync_tcp_port, 18081);
        assert_eq!(
            config.database_dir(),
            PathBuf::from("/tmp/tandoor-test/database")
        );
        // the request timeout feeds the HTTP middleware stack
        assert!(config.request_timeout_ms > 0);
    }
}
