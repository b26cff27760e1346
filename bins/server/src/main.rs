//! Savings API Server
//!
//! Main entry point for the savings account service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use savings_api::{AppState, create_router};
use savings_core::{AccountService, RetryPolicy};
use savings_db::{FlakyAccountRepository, InMemoryAccountRepository};
use savings_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "savings=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the account store
    let store = InMemoryAccountRepository::from_seed(&config.accounts.seed)?;
    info!(accounts = store.len(), "Account store ready");

    let repo = FlakyAccountRepository::from_config(store, &config.accounts);
    if repo.failure_rate() > 0.0 {
        info!(
            failure_rate = repo.failure_rate(),
            failure_kind = ?config.accounts.failure_kind,
            "Repository failure injection enabled"
        );
    }

    let retry = RetryPolicy::from_config(&config.retry);
    info!(
        max_attempts = retry.max_attempts(),
        backoff_ms = config.retry.backoff_ms,
        "Retry policy configured"
    );

    // Create application state
    let service = AccountService::new(Arc::new(repo)).with_retry_policy(retry);
    let state = AppState::new(service);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
