//! Covenant Payroll Registry
//!
//! Company and employee records with time-accrued salary payment.
//! Salaries accrue per second from the last pay date; settling a
//! company pays every accrual at once, funded by the treasury.

pub mod company;
pub mod error;

pub use company::{Company, Employee, HireKind, Registry};
pub use error::{PayrollError, Result};

/// Payroll configuration constants
pub mod config {
    use covenant_core::TOKEN_UNIT;

    /// Token fee for registering a company (10 tokens)
    pub const COMPANY_CREATION_FEE: u128 = 10 * TOKEN_UNIT;
}
