//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for savings accounts
//! - Mapping from account failures to HTTP error responses

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use savings_core::{AccountRepository, AccountService};

pub use error::{ApiError, ErrorModel, ErrorResponse, error_response};

/// Application state shared across handlers.
pub struct AppState<R: AccountRepository> {
    /// Savings account operations.
    pub accounts: Arc<AccountService<R>>,
}

impl<R: AccountRepository> AppState<R> {
    /// Creates the state around an account service.
    #[must_use]
    pub fn new(accounts: AccountService<R>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }
}

// Derived Clone would require `R: Clone`.
impl<R: AccountRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
        }
    }
}

/// Creates the main application router.
pub fn create_router<R: AccountRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
