//! Ping Handler
//!
//! 健康检查，同时探测数据库连接

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 数据库不可用时返回 503，data 中仍带有状态详情
pub async fn ping(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<PingResponse>>) {
    match state.book_repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(PingResponse {
                status: "ok",
                database: "ok",
                version: env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            let status = StatusCode::SERVICE_UNAVAILABLE;
            (
                status,
                Json(ApiResponse {
                    errno: i32::from(status.as_u16()),
                    error: "Database unavailable".to_string(),
                    data: Some(PingResponse {
                        status: "degraded",
                        database: "unavailable",
                        version: env!("CARGO_PKG_VERSION"),
                    }),
                }),
            )
        }
    }
}
