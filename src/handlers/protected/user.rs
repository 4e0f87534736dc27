// handlers/protected/user.rs - GET /user/tokenvalidation

use axum::extract::State;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiQuery, ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// GET /user/tokenvalidation?token= - whether the given token is valid
///
/// The caller is already authenticated; this checks a second token, e.g.
/// one a client is holding on behalf of another session.
pub async fn token_validation(State(state): State<AppState>, ApiQuery(query): ApiQuery<TokenQuery>) -> ApiResult<bool> {
    let token = query
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing token parameter"))?;

    state.auth_service().validate_token(token.trim())?;
    Ok(ApiResponse::success(true))
}
