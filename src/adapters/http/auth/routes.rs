//! Axum router configuration for admin authentication.

use axum::{routing::post, Router};

use super::handlers::{login, AuthAppState};

/// Create the auth module router.
///
/// # Routes
///
/// - `POST /login` - Exchange admin credentials for a bearer token
pub fn auth_router() -> Router<AuthAppState> {
    Router::new().route("/login", post(login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::adapters::auth::{AdminAuthConfig, AdminTokenService};

    fn test_state() -> AuthAppState {
        AuthAppState::new(Arc::new(AdminTokenService::new(AdminAuthConfig::new(
            "admin@example.com",
            "correct-horse-battery",
            "0123456789abcdef0123456789abcdef",
        ))))
    }

    #[test]
    fn auth_router_creates_router() {
        let router = auth_router();
        let _: Router<()> = router.with_state(test_state());
    }

    #[tokio::test]
    async fn auth_router_returns_token_for_valid_credentials() {
        let app = auth_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"email":"admin@example.com","password":"correct-horse-battery"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn auth_router_returns_401_for_bad_credentials() {
        let app = auth_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"email":"admin@example.com","password":"nope"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
