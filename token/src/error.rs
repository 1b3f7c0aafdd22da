//! Token error types

use covenant_core::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("insufficient allowance: requested {requested}, approved {approved}")]
    InsufficientAllowance { requested: u128, approved: u128 },

    #[error("supply overflow")]
    SupplyOverflow,

    #[error("balance overflow")]
    BalanceOverflow,
}

pub type Result<T> = std::result::Result<T, TokenError>;
