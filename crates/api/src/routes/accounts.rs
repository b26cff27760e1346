//! Savings account routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use savings_core::{AccountBalance, AccountRepository, SaveMoney, WithdrawMoney};
use savings_shared::{AccountNumber, ValidationError};

use crate::AppState;
use crate::error::ApiError;

/// Creates the account routes.
pub fn routes<R: AccountRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route("/accounts/withdraw", put(withdraw_money::<R>))
        .route("/accounts/save", put(save_money::<R>))
        .route("/accounts/{account_number}", get(get_balance::<R>))
}

/// Request body for withdrawing or saving money.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyRequest {
    /// Account number, `D-DDD-DDD-DDD`.
    pub account_number: Option<String>,
    /// Amount to move; must be > 0.
    #[serde(default)]
    pub amount: Decimal,
}

impl MoneyRequest {
    fn into_parts(self) -> Result<(AccountNumber, Decimal), ValidationError> {
        Ok((AccountNumber::parse_required(self.account_number)?, self.amount))
    }
}

impl TryFrom<MoneyRequest> for WithdrawMoney {
    type Error = ValidationError;

    fn try_from(request: MoneyRequest) -> Result<Self, Self::Error> {
        let (account_number, amount) = request.into_parts()?;
        Self::new(account_number, amount)
    }
}

impl TryFrom<MoneyRequest> for SaveMoney {
    type Error = ValidationError;

    fn try_from(request: MoneyRequest) -> Result<Self, Self::Error> {
        let (account_number, amount) = request.into_parts()?;
        Self::new(account_number, amount)
    }
}

/// PUT `/accounts/withdraw` - Withdraw money from an account.
async fn withdraw_money<R: AccountRepository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<MoneyRequest>, JsonRejection>,
) -> Result<Json<AccountBalance>, ApiError> {
    let Json(request) = payload?;
    let withdrawal = WithdrawMoney::try_from(request)?;
    let balance = state.accounts.withdraw_money(&withdrawal).await?;
    Ok(Json(balance))
}

/// PUT `/accounts/save` - Save money into an account.
async fn save_money<R: AccountRepository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<MoneyRequest>, JsonRejection>,
) -> Result<Json<AccountBalance>, ApiError> {
    let Json(request) = payload?;
    let savings = SaveMoney::try_from(request)?;
    let balance = state.accounts.save_money(&savings).await?;
    Ok(Json(balance))
}

/// GET `/accounts/{account_number}` - Current balance of an account.
async fn get_balance<R: AccountRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(account_number): Path<String>,
) -> Result<Json<AccountBalance>, ApiError> {
    let account_number = AccountNumber::parse(account_number)?;
    let balance = state.accounts.current_balance(&account_number).await?;
    Ok(Json(balance))
}
