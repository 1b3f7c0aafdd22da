//! Covenant Token Sale
//!
//! Sells pre-funded token inventory for native currency across
//! numbered rounds. A round's price is fixed for its lifetime and every
//! purchase must pay the exact price, with no partial refunds.

pub mod error;
pub mod round;

pub use error::{Result, SaleError};
pub use round::{SaleRound, TokenSale};
