//! User HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};

use crate::domain::Username;
use crate::infrastructure::http::dto::{ApiResponse, UserResponse};
use crate::infrastructure::http::error::ApiError;

/// 回显用户名（仅做格式校验）
pub async fn get_user(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let Path(username) = path?;
    let username = Username::new(username)?;

    Ok(Json(ApiResponse::success(UserResponse {
        username: username.as_str().to_string(),
    })))
}
