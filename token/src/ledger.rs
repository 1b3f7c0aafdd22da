//! Balance ledger

use crate::error::{Result, TokenError};
use covenant_core::{Address, AuthPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<Address, u128>,
    allowances: HashMap<Address, HashMap<Address, u128>>,
    total_supply: u128,
    treasury: Address,
    policy: AuthPolicy,
}

impl TokenLedger {
    /// New empty ledger. `treasury` is the fixed mint target,
    /// `controller` the initial minting authority (the deployer during
    /// bootstrap).
    pub fn new(treasury: Address, controller: Address) -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: 0,
            treasury,
            policy: AuthPolicy::new(controller),
        }
    }

    pub fn balance_of(&self, address: &Address) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn controller(&self) -> &Address {
        self.policy.controller()
    }

    pub fn treasury(&self) -> &Address {
        &self.treasury
    }

    /// Mint new supply to the treasury. Controller-gated.
    pub fn mint(&mut self, caller: &Address, amount: u128) -> Result<()> {
        self.policy.require(caller)?;
        let treasury = self.treasury.clone();
        self.issue(&treasury, amount)
    }

    /// Mint-and-send to an arbitrary address. Controller-gated.
    pub fn airdrop(&mut self, caller: &Address, to: &Address, amount: u128) -> Result<()> {
        self.policy.require(caller)?;
        self.issue(to, amount)
    }

    /// Move `amount` from the caller to `to`.
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: u128) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                requested: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let new_to = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow)?;
        self.balances.insert(from.clone(), available - amount);
        self.balances.insert(to.clone(), new_to);
        Ok(())
    }

    /// Set `spender`'s allowance over the caller's balance. Re-approval
    /// overwrites rather than accumulates.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: u128) {
        self.allowances
            .entry(owner.clone())
            .or_default()
            .insert(spender.clone(), amount);
    }

    /// Spend from `from`'s balance under an allowance granted to the
    /// caller. The allowance is consumed on use.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<()> {
        let approved = self.allowance(from, spender);
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                requested: amount,
                approved,
            });
        }
        self.transfer(from, to, amount)?;
        if let Some(spenders) = self.allowances.get_mut(from) {
            spenders.insert(spender.clone(), approved - amount);
        }
        Ok(())
    }

    /// Reassign the controller. Gated by the current controller.
    pub fn set_controller(&mut self, caller: &Address, new_controller: Address) -> Result<()> {
        self.policy.transfer(caller, new_controller)?;
        Ok(())
    }

    fn issue(&mut self, to: &Address, amount: u128) -> Result<()> {
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyOverflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow)?;
        self.balances.insert(to.clone(), new_balance);
        self.total_supply = new_supply;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::tokens;

    fn ledger() -> TokenLedger {
        TokenLedger::new(Address::from("treasury"), Address::from("dao"))
    }

    #[test]
    fn test_mint_credits_treasury() {
        let mut token = ledger();
        token.mint(&Address::from("dao"), tokens(1000)).unwrap();

        assert_eq!(token.balance_of(&Address::from("treasury")), tokens(1000));
        assert_eq!(token.total_supply(), tokens(1000));
    }

    #[test]
    fn test_mint_requires_controller() {
        let mut token = ledger();
        let result = token.mint(&Address::from("mallory"), tokens(1));
        assert!(matches!(result, Err(TokenError::Auth(_))));
        assert_eq!(token.total_supply(), 0);
    }

    #[test]
    fn test_transfer() {
        let mut token = ledger();
        token
            .airdrop(&Address::from("dao"), &Address::from("alice"), tokens(100))
            .unwrap();

        token
            .transfer(&Address::from("alice"), &Address::from("bob"), tokens(40))
            .unwrap();
        assert_eq!(token.balance_of(&Address::from("alice")), tokens(60));
        assert_eq!(token.balance_of(&Address::from("bob")), tokens(40));
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut token = ledger();
        let result = token.transfer(&Address::from("alice"), &Address::from("bob"), 1);
        assert!(matches!(
            result,
            Err(TokenError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn test_allowance_consumed_on_use() {
        let mut token = ledger();
        token
            .airdrop(&Address::from("dao"), &Address::from("alice"), tokens(100))
            .unwrap();

        token.approve(&Address::from("alice"), &Address::from("dao"), tokens(10));
        token
            .transfer_from(
                &Address::from("dao"),
                &Address::from("alice"),
                &Address::from("treasury"),
                tokens(10),
            )
            .unwrap();

        assert_eq!(
            token.allowance(&Address::from("alice"), &Address::from("dao")),
            0
        );
        let result = token.transfer_from(
            &Address::from("dao"),
            &Address::from("alice"),
            &Address::from("treasury"),
            1,
        );
        assert!(matches!(
            result,
            Err(TokenError::InsufficientAllowance { .. })
        ));
    }

    #[test]
    fn test_reapproval_overwrites() {
        let mut token = ledger();
        token.approve(&Address::from("alice"), &Address::from("dao"), tokens(10));
        token.approve(&Address::from("alice"), &Address::from("dao"), tokens(3));
        assert_eq!(
            token.allowance(&Address::from("alice"), &Address::from("dao")),
            tokens(3)
        );
    }
}
