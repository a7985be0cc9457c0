//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use cuba_adapter_postgres::{PoolStatus, PostgresConfig, create_pool, pool_status};
use cuba_config::AppConfig;
use cuba_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化，再交给服务构建路由
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = RetryConfig::default();

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(&retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// PostgreSQL 连接池（克隆只增加引用计数）
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    pub fn pool_status(&self) -> PoolStatus {
        pool_status(&self.postgres_pool)
    }
}
