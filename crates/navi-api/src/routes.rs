//! Router setup with all API routes and middleware.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{middleware, Extension, Router};
use navi_core::config::ServerConfig;
use navi_core::error::NaviError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers;
use crate::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
///
/// `/health` is never rate limited. Everything under `/api` shares one
/// limiter sized by `server.rate_limit_per_sec`.
pub fn create_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let server = &config.server;

    let limiter = RateLimiter::new(server.rate_limit_per_sec);

    let api_routes = Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/topics", get(handlers::topics))
        .layer(middleware::from_fn(rate_limit_middleware))
        .layer(Extension(limiter));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}

/// Start the HTTP server on the configured address.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), NaviError> {
    let addr = config.bind_addr();
    let router = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NaviError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| NaviError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
