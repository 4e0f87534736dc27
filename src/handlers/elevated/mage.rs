// handlers/elevated/mage.rs - POST /mages, GET /mages/:id, PUT /mages/:id

use axum::{extract::State, Extension};

use crate::database::models::{Mage, MageInput};
use crate::middleware::{ApiJson, ApiPath, ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// POST /mages - register a new mage; the registration time is set here
pub async fn mage_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(input): ApiJson<MageInput>,
) -> ApiResult<Mage> {
    tracing::debug!("{} registering mage '{}'", user.name, input.name);
    let mage = state.mage_service().create(input).await?;
    Ok(ApiResponse::created(mage))
}

pub async fn mage_get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Mage> {
    let mage = state.mage_service().get(id).await?;
    Ok(ApiResponse::success(mage))
}

/// PUT /mages/:id - replace name, birth date, house and AALN
pub async fn mage_update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<MageInput>,
) -> ApiResult<Mage> {
    tracing::debug!("{} updating mage {}", user.name, id);
    let mage = state.mage_service().update(id, input).await?;
    Ok(ApiResponse::success(mage))
}
