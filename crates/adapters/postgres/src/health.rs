//! PostgreSQL 健康检查模块
//!
//! 提供连接池级别的健康检查

use std::time::{Duration, Instant};

use sqlx::PgPool;
use tracing::{debug, error};

use crate::check_connection;

/// 连接池状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

impl PoolStatus {
    pub fn new(size: u32, idle: u32) -> Self {
        Self {
            size,
            idle,
            active: size.saturating_sub(idle),
        }
    }
}

/// 获取连接池状态
pub fn pool_status(pool: &PgPool) -> PoolStatus {
    PoolStatus::new(pool.size(), pool.num_idle() as u32)
}

/// 健康检查结果
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    pub latency_ms: Option<u64>,
    /// 错误信息
    pub error: Option<String>,
    /// 连接池状态
    pub pool_status: PoolStatus,
}

/// 带超时的健康检查
pub async fn probe(pool: &PgPool, timeout: Duration) -> HealthCheckResult {
    let start = Instant::now();

    let outcome = tokio::time::timeout(timeout, check_connection(pool)).await;
    let pool_status = pool_status(pool);

    match outcome {
        Ok(Ok(())) => {
            let latency = start.elapsed().as_millis() as u64;
            debug!(latency_ms = latency, "PostgreSQL health check passed");
            HealthCheckResult {
                healthy: true,
                latency_ms: Some(latency),
                error: None,
                pool_status,
            }
        }
        Ok(Err(e)) => {
            error!(error = %e, "PostgreSQL health check failed");
            HealthCheckResult {
                healthy: false,
                latency_ms: None,
                error: Some(e.to_string()),
                pool_status,
            }
        }
        Err(_) => {
            error!("PostgreSQL health check timed out");
            HealthCheckResult {
                healthy: false,
                latency_ms: None,
                error: Some("Health check timed out".to_string()),
                pool_status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_status_active() {
        let status = PoolStatus::new(10, 7);
        assert_eq!(status.active, 3);
    }

    #[test]
    fn test_pool_status_saturates() {
        let status = PoolStatus::new(2, 5);
        assert_eq!(status.active, 0);
    }
}
