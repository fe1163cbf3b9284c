//! Axum router configuration for catalog endpoints.
//!
//! Read endpoints are public; create/update/delete require an admin
//! bearer token and are wrapped with the admin middleware.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::adapters::http::middleware::{admin_middleware, AdminState};

use super::handlers::{
    create_product, delete_product, get_product, list_products, update_product, CatalogAppState,
};

/// Create the public catalog router.
///
/// # Routes
///
/// - `GET /` - List all products, newest first
/// - `GET /:id` - Get a single product
pub fn public_catalog_routes() -> Router<CatalogAppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

/// Create the admin catalog router.
///
/// # Routes (require admin token)
///
/// - `POST /` - Create a product
/// - `PUT /:id` - Update a product
/// - `DELETE /:id` - Delete a product
pub fn admin_catalog_routes(admin: AdminState) -> Router<CatalogAppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
        .layer(middleware::from_fn_with_state(admin, admin_middleware))
}

/// Create the complete catalog module router.
///
/// Combines public and admin routes into a single router suitable for
/// mounting at `/products`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use flashsale::adapters::http::catalog::{catalog_router, CatalogAppState};
///
/// let app = Router::new()
///     .nest("/products", catalog_router(admin_state))
///     .with_state(catalog_state);
/// ```
pub fn catalog_router(admin: AdminState) -> Router<CatalogAppState> {
    public_catalog_routes().merge(admin_catalog_routes(admin))
}
