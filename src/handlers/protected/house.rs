// handlers/protected/house.rs - GET /houses

use axum::extract::State;

use crate::database::models::House;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn house_list(State(state): State<AppState>) -> ApiResult<Vec<House>> {
    let houses = state.house_service().list().await?;
    Ok(ApiResponse::success(houses))
}
