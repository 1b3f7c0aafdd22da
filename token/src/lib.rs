//! Covenant Governance Token
//!
//! The balance ledger behind governance voting weight. Minting is
//! controller-gated and always credits the treasury; airdrops are the
//! controller-gated escape hatch for direct disbursements.

pub mod error;
pub mod ledger;

pub use error::{Result, TokenError};
pub use ledger::TokenLedger;
