use axum::{
    http::{HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{elevated, protected, public};
use crate::middleware::{jwt_auth_middleware, require_overseer};
use crate::state::AppState;

/// Complete application router over the given state
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .merge(elevated_routes(state.clone()));

    if state.config.security.enable_cors {
        app = app.layer(cors_layer(&state.config.security));
    }
    if state.config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/HealthCheck", get(public::health_check))
        .route("/user/login", post(public::user_login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/user/tokenvalidation", get(protected::token_validation))
        .route("/houses", get(protected::house_list))
        .route("/house", get(protected::house_list))
        .route("/mages", get(protected::mage_list_get))
        .route("/mage/list", post(protected::mage_list_post))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn elevated_routes(state: AppState) -> Router<AppState> {
    // Layers run bottom-up: authenticate, then check the role
    Router::new()
        .route("/mages", post(elevated::mage_create))
        .route("/newMage", post(elevated::mage_create))
        .route("/mages/:id", get(elevated::mage_get).put(elevated::mage_update))
        .route_layer(from_fn(require_overseer))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::testing::{test_config, MemoryRepository};

    fn config_with_origins(origins: &[&str]) -> AppConfig {
        let mut config = test_config();
        config.security.enable_cors = true;
        config.security.cors_origins = origins.iter().map(|o| o.to_string()).collect();
        config
    }

    async fn allowed_origin(config: AppConfig, origin: &str) -> Option<String> {
        let app = router(AppState::new(config, Arc::new(MemoryRepository::new())));
        let request = Request::builder()
            .uri("/api/HealthCheck")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn wildcard_or_empty_origins_allow_any() {
        let wildcard = config_with_origins(&["https://a.test", "*"]);
        assert_eq!(allowed_origin(wildcard, "https://z.test").await.as_deref(), Some("*"));

        let empty = config_with_origins(&[]);
        assert_eq!(allowed_origin(empty, "https://z.test").await.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn explicit_origins_are_echoed_and_others_refused() {
        let config = config_with_origins(&["https://a.test", "https://bad\norigin"]);
        assert_eq!(
            allowed_origin(config.clone(), "https://a.test").await.as_deref(),
            Some("https://a.test")
        );
        assert_eq!(allowed_origin(config, "https://b.test").await, None);
    }

    #[tokio::test]
    async fn disabled_cors_adds_no_headers() {
        let mut config = config_with_origins(&["*"]);
        config.security.enable_cors = false;
        assert_eq!(allowed_origin(config, "https://a.test").await, None);
    }
}
