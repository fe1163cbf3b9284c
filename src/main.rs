//! FlashSale server binary.
//!
//! Loads configuration from the environment, connects to Postgres,
//! wires the adapters, and serves the HTTP API until Ctrl+C or SIGTERM.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashsale::adapters::auth::{AdminAuthConfig, AdminTokenService};
use flashsale::adapters::http::{
    api_router, AppStates, AuthAppState, CatalogAppState, CheckoutAppState, WebhookAppState,
};
use flashsale::adapters::postgres::{
    PostgresDonationStore, PostgresOrderStore, PostgresProductRepository, PostgresWebhookEventLog,
};
use flashsale::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use flashsale::config::AppConfig;
use flashsale::ports::{
    DonationStore, OrderStore, PaymentProvider, ProductRepository, WebhookEventLog,
};

#[tokio::main]
async fn main() {
    // Configuration problems should fail startup, not requests
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    init_tracing(&config);

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        tracing::info!("Migrations applied");
    }

    // Persistence adapters share the pool
    let products: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let orders: Arc<dyn OrderStore> = Arc::new(PostgresOrderStore::new(pool.clone()));
    let donations: Arc<dyn DonationStore> = Arc::new(PostgresDonationStore::new(pool.clone()));
    let event_log: Arc<dyn WebhookEventLog> = Arc::new(PostgresWebhookEventLog::new(pool.clone()));

    let mut stripe_config = StripeConfig::new(config.payment.stripe_api_key.clone())
        .with_currency(config.payment.currency.clone());
    if let Some(secret) = config.payment.webhook_secret() {
        stripe_config = stripe_config.with_webhook_secret(secret);
    } else {
        tracing::warn!("No webhook signing secret configured; signatures will not be verified");
    }
    let payment_provider: Arc<dyn PaymentProvider> =
        Arc::new(StripePaymentAdapter::new(stripe_config));

    let admin = Arc::new(AdminTokenService::new(
        AdminAuthConfig::new(
            config.auth.admin_email.clone(),
            config.auth.admin_password.clone(),
            config.auth.jwt_secret.clone(),
        )
        .with_token_ttl_secs(config.auth.token_ttl_secs()),
    ));

    let states = AppStates {
        catalog: CatalogAppState::new(products.clone()),
        checkout: CheckoutAppState {
            products,
            orders: orders.clone(),
            donations: donations.clone(),
            payment_provider: payment_provider.clone(),
            frontend_url: config.payment.frontend_url.clone(),
        },
        auth: AuthAppState::new(admin.clone()),
        webhooks: WebhookAppState {
            payment_provider,
            event_log,
            orders,
            donations,
        },
        admin,
    };

    let app = api_router(states, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!("flashsale listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Initialize tracing from the configured filter directive.
///
/// `RUST_LOG` wins when set. Production emits JSON lines for log
/// shipping; other environments get the human-readable format.
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
