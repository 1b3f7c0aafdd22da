//! Native-currency pool with audit trail

use crate::error::{Result, TreasuryError};
use covenant_core::{Address, AuthPolicy};
use serde::{Deserialize, Serialize};

/// Where a deposit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreasurySource {
    SalePurchase,
    Donation,
}

/// One entry in the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreasuryRecord {
    Deposit {
        from: Address,
        amount: u128,
        source: TreasurySource,
        timestamp: u64,
    },
    Withdrawal {
        to: Address,
        amount: u128,
        timestamp: u64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treasury {
    native_balance: u128,
    policy: AuthPolicy,
    records: Vec<TreasuryRecord>,
}

impl Treasury {
    pub fn new(controller: Address) -> Self {
        Self {
            native_balance: 0,
            policy: AuthPolicy::new(controller),
            records: Vec::new(),
        }
    }

    pub fn native_balance(&self) -> u128 {
        self.native_balance
    }

    pub fn controller(&self) -> &Address {
        self.policy.controller()
    }

    /// Full audit trail, oldest first.
    pub fn records(&self) -> &[TreasuryRecord] {
        &self.records
    }

    /// Check spending authority without mutating anything. Used by the
    /// protocol layer before moving treasury-owned tokens.
    pub fn require_controller(&self, caller: &Address) -> Result<()> {
        self.policy.require(caller)?;
        Ok(())
    }

    /// Credit native currency. Open to any sender (the sale contract
    /// forwards purchase proceeds here).
    pub fn deposit_native(
        &mut self,
        from: &Address,
        amount: u128,
        source: TreasurySource,
        now: u64,
    ) -> Result<()> {
        self.native_balance = self
            .native_balance
            .checked_add(amount)
            .ok_or(TreasuryError::BalanceOverflow)?;
        self.records.push(TreasuryRecord::Deposit {
            from: from.clone(),
            amount,
            source,
            timestamp: now,
        });
        Ok(())
    }

    /// Pay out native currency. Controller-gated.
    pub fn withdraw_native(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: u128,
        now: u64,
    ) -> Result<()> {
        self.policy.require(caller)?;
        if self.native_balance < amount {
            return Err(TreasuryError::InsufficientBalance {
                requested: amount,
                available: self.native_balance,
            });
        }
        self.native_balance -= amount;
        self.records.push(TreasuryRecord::Withdrawal {
            to: to.clone(),
            amount,
            timestamp: now,
        });
        Ok(())
    }

    pub fn set_controller(&mut self, caller: &Address, new_controller: Address) -> Result<()> {
        self.policy.transfer(caller, new_controller)?;
        Ok(())
    }
}
