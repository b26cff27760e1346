//! API route definitions.

use axum::Router;

use savings_core::AccountRepository;

use crate::AppState;

pub mod accounts;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes<R: AccountRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
}
