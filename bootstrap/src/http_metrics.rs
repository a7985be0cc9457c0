//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出和 HTTP 请求统计中间件

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use cuba_errors::{AppError, AppResult};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder
    pub fn install() -> AppResult<Self> {
        let handle = cuba_telemetry::init_metrics()
            .map_err(|e| AppError::internal(format!("Failed to install Prometheus recorder: {}", e)))?;
        Ok(Self { handle })
    }

    /// 使用已有 handle（不安装全局 recorder）
    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, route: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// HTTP 请求统计中间件
///
/// 需要通过 `route_layer` 挂载，才能拿到 `MatchedPath`
pub async fn track_http_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    record_http_request(
        &method,
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_middleware_passes_response_through() {
        let app = Router::new()
            .route("/items/{id}", get(|| async { (StatusCode::CREATED, "ok") }))
            .route_layer(middleware::from_fn(track_http_metrics));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/items/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_render_with_local_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let metrics = MetricsRecorder::from_handle(recorder.handle());

        metrics::with_local_recorder(&recorder, || {
            record_http_request("GET", "/products", 200, 1.5);
        });

        let output = metrics.render();
        assert!(output.contains("http_requests_total"));
        assert!(output.contains("route=\"/products\""));
    }
}
