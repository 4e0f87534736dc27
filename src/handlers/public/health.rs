// handlers/public/health.rs - GET /, GET /health, GET /api/HealthCheck

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "Gringotts API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Mage and house registry with JWT authentication",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health, /api/HealthCheck (public)",
                "login": "POST /user/login (public - token acquisition)",
                "token": "GET /user/tokenvalidation?token= (Overseer, Minion)",
                "houses": "GET /houses (Overseer, Minion)",
                "mage_list": "GET /mages, POST /mage/list (Overseer, Minion)",
                "mage_write": "POST /mages, GET /mages/:id, PUT /mages/:id (Overseer)",
            }
        }
    }))
}

/// GET /health - database reachability
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.repo.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}

/// GET /api/HealthCheck - liveness only
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
