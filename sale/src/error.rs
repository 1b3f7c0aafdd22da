//! Token sale error types

use covenant_core::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaleError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("sale round not found: {0}")]
    RoundNotFound(u64),

    #[error("sale round not active: {0}")]
    RoundNotActive(u64),

    #[error("sale not funded: requires {required}, contract holds {funded}")]
    NotFunded { required: u128, funded: u128 },

    #[error("incorrect amount of native currency: expected {expected}, got {provided}")]
    IncorrectPayment { expected: u128, provided: u128 },

    #[error("not enough tokens available: requested {requested}, available {available}")]
    InsufficientTokensAvailable { requested: u128, available: u128 },

    #[error("amount overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, SaleError>;
