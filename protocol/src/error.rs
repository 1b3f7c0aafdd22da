//! Protocol error types

use covenant_core::Address;
use governance::GovernanceError;
use payroll::PayrollError;
use thiserror::Error;
use timelock::TimelockError;
use token::TokenError;
use token_sale::SaleError;
use treasury::TreasuryError;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Treasury(#[from] TreasuryError),

    #[error(transparent)]
    Timelock(#[from] TimelockError),

    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Sale(#[from] SaleError),

    #[error(transparent)]
    Payroll(#[from] PayrollError),

    #[error("insufficient bond: {required} base units must be approved to the governance address")]
    InsufficientBond {
        required: u128,
        #[source]
        source: TokenError,
    },

    #[error("caller {0} is not the guardian")]
    NotGuardian(Address),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
