// handlers/public/user.rs - POST /user/login

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /user/login - exchange name and password for a signed JWT
///
/// Unknown names and wrong passwords both answer 401 `Invalid Credentials`.
pub async fn user_login(State(state): State<AppState>, ApiJson(body): ApiJson<LoginRequest>) -> ApiResult<LoginResponse> {
    let token = state.auth_service().login(&body.name, &body.password).await?;
    Ok(ApiResponse::success(LoginResponse { token }))
}
