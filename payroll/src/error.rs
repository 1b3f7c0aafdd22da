//! Payroll error types

use covenant_core::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("company not found: {0}")]
    CompanyNotFound(u64),

    #[error("employee {wallet} not found in company {company}")]
    EmployeeNotFound { company: u64, wallet: Address },

    #[error("caller {caller} does not own company {company}")]
    NotCompanyOwner { caller: Address, company: u64 },

    #[error("employee {wallet} has {accrued} unsettled pay; settle before re-hiring")]
    UnsettledPay { wallet: Address, accrued: u128 },

    #[error("amount overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, PayrollError>;
