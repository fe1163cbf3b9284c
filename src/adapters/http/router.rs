//! Top-level HTTP router assembly.
//!
//! Wires the module routers together with the ambient middleware stack:
//! request IDs, tracing, timeouts, and CORS. Each module keeps its own
//! state; only the admin token service is shared across modules.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::auth::{auth_router, AuthAppState};
use super::catalog::{catalog_router, CatalogAppState};
use super::checkout::{checkout_router, CheckoutAppState};
use super::middleware::AdminState;
use super::webhooks::{webhook_router, WebhookAppState};

/// Per-module states bundled for router assembly.
#[derive(Clone)]
pub struct AppStates {
    pub catalog: CatalogAppState,
    pub checkout: CheckoutAppState,
    pub auth: AuthAppState,
    pub webhooks: WebhookAppState,
    pub admin: AdminState,
}

/// GET /health
///
/// Liveness probe; no dependencies are touched.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the CORS layer from the configured origin list.
///
/// An empty list falls back to a permissive policy, which is what local
/// development wants. Deployments set explicit origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Assemble the complete application router.
///
/// # Routes
///
/// - `GET  /health` - Liveness probe
/// - `/products/*` - Catalog (reads public, writes admin)
/// - `/checkout/*` - Order and donation checkout
/// - `/auth/*` - Admin login
/// - `POST /webhook` - Payment provider events
pub fn api_router(states: AppStates, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/products",
            catalog_router(states.admin).with_state(states.catalog),
        )
        .nest("/checkout", checkout_router().with_state(states.checkout))
        .nest("/auth", auth_router().with_state(states.auth))
        .merge(webhook_router().with_state(states.webhooks))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer(&server.cors_origins_list())),
        )
}
