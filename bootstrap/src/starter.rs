//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use cuba_config::AppConfig;
use cuba_errors::AppResult;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::{HealthChecker, ops_routes};
use crate::http_metrics::{MetricsRecorder, track_http_metrics};
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 创建基础设施资源（数据库连接池，带重试）
/// 5. 调用服务提供的闭包构建业务路由
/// 6. 挂载 /health、/ready、/metrics
/// 7. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use cuba_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |infra| async move {
///         Ok(my_service::router(infra.postgres_pool()))
///     })
///     .await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = Arc::new(MetricsRecorder::install()?);

    let infra = Infrastructure::from_config(config.clone()).await?;
    let checker = Arc::new(HealthChecker::new(infra.postgres_pool()));
    let pool_status = infra.pool_status();
    info!(
        pool_size = pool_status.size,
        pool_idle = pool_status.idle,
        "Infrastructure ready"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let app = router_builder(infra)
        .await?
        .route_layer(middleware::from_fn(track_http_metrics))
        .merge(ops_routes(checker, metrics))
        .layer(TraceLayer::new_for_http());

    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
