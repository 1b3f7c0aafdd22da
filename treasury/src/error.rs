//! Treasury error types

use covenant_core::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreasuryError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("insufficient treasury balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("balance overflow")]
    BalanceOverflow,
}

pub type Result<T> = std::result::Result<T, TreasuryError>;
