// handlers/protected/mage.rs - GET /mages, POST /mage/list

use axum::extract::State;

use crate::database::models::MageListEntry;
use crate::filter::MageFilter;
use crate::middleware::{ApiJson, ApiQuery, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /mages - listing filtered by query parameters
pub async fn mage_list_get(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<MageFilter>,
) -> ApiResult<Vec<MageListEntry>> {
    let mages = state.mage_service().list(&filter).await?;
    Ok(ApiResponse::success(mages))
}

/// POST /mage/list - same listing with the filter in a JSON body
pub async fn mage_list_post(
    State(state): State<AppState>,
    ApiJson(filter): ApiJson<MageFilter>,
) -> ApiResult<Vec<MageListEntry>> {
    let mages = state.mage_service().list(&filter).await?;
    Ok(ApiResponse::success(mages))
}
