//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use cuba_adapter_postgres::probe;
use serde::Serialize;
use sqlx::PgPool;

use crate::http_metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
pub struct HealthChecker {
    pool: PgPool,
    timeout: Duration,
}

impl HealthChecker {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 存活检查（liveness），不检查依赖
    pub async fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 就绪检查（readiness），检查数据库是否可用
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();

        let result = probe(&self.pool, self.timeout).await;
        if result.healthy {
            status.add_check(ComponentHealth::healthy("postgres"));
        } else {
            status.add_check(ComponentHealth::unhealthy(
                "postgres",
                result.error.unwrap_or_default(),
            ));
        }

        status
    }
}

/// 运维端点状态
#[derive(Clone)]
struct OpsState {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

/// 构建运维端点路由
pub fn ops_routes(checker: Arc<HealthChecker>, metrics: Arc<MetricsRecorder>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(OpsState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<OpsState>) -> impl IntoResponse {
    let status = state.checker.liveness().await;
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<OpsState>) -> impl IntoResponse {
    let status = state.checker.readiness().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use cuba_adapter_postgres::{PostgresConfig, create_lazy_pool};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn test_router() -> Router {
        // 端口 1 上没有数据库，连接会立即失败
        let pool = create_lazy_pool(
            &PostgresConfig::new("postgres://postgres@127.0.0.1:1/products")
                .with_min_connections(0)
                .with_acquire_timeout(Duration::from_millis(200)),
        )
        .unwrap();
        let checker = Arc::new(HealthChecker::new(pool).with_timeout(Duration::from_millis(500)));
        let recorder = PrometheusBuilder::new().build_recorder();
        let metrics = Arc::new(MetricsRecorder::from_handle(recorder.handle()));
        ops_routes(checker, metrics)
    }

    #[test]
    fn test_status_turns_unhealthy() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("postgres"));
        assert!(status.is_healthy());

        status.add_check(ComponentHealth::unhealthy("cache", "down"));
        assert!(!status.is_healthy());
        assert_eq!(status.checks.len(), 2);
    }

    #[tokio::test]
    async fn test_liveness_does_not_touch_database() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_is_unavailable_without_database() {
        let response = test_router()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["checks"][0]["name"], "postgres");
        assert_eq!(body["checks"][0]["status"], "unhealthy");
        assert!(body["checks"][0]["message"].is_string());
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
