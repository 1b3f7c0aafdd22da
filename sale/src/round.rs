//! Sale rounds

use crate::error::{Result, SaleError};
use covenant_core::{Address, AuthPolicy, TOKEN_UNIT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRound {
    pub id: u64,
    /// Remaining inventory in token base units.
    pub tokens_available: u128,
    /// Native base units per whole token. Fixed for the round.
    pub price_per_token: u128,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSale {
    address: Address,
    policy: AuthPolicy,
    rounds: HashMap<u64, SaleRound>,
    next_round_id: u64,
}

impl TokenSale {
    /// `address` is the sale contract's identity in the token ledger,
    /// where its for-sale inventory is held.
    pub fn new(address: Address, controller: Address) -> Self {
        Self {
            address,
            policy: AuthPolicy::new(controller),
            rounds: HashMap::new(),
            // First round is round 1
            next_round_id: 1,
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn controller(&self) -> &Address {
        self.policy.controller()
    }

    pub fn round(&self, id: u64) -> Result<&SaleRound> {
        self.rounds.get(&id).ok_or(SaleError::RoundNotFound(id))
    }

    /// Open a round. Controller-gated; `funded_balance` is the sale
    /// address's current token balance and must already cover the
    /// round's inventory.
    pub fn start_sale(
        &mut self,
        caller: &Address,
        tokens: u128,
        price_per_token: u128,
        funded_balance: u128,
    ) -> Result<u64> {
        self.policy.require(caller)?;
        if funded_balance < tokens {
            return Err(SaleError::NotFunded {
                required: tokens,
                funded: funded_balance,
            });
        }
        let id = self.next_round_id;
        self.next_round_id += 1;
        self.rounds.insert(
            id,
            SaleRound {
                id,
                tokens_available: tokens,
                price_per_token,
                active: true,
            },
        );
        Ok(id)
    }

    /// Validate and account a purchase of `amount_whole` whole tokens
    /// against `value` attached native currency. Returns the token base
    /// units to hand to the buyer; the caller performs the ledger moves.
    pub fn purchase(&mut self, round_id: u64, amount_whole: u128, value: u128) -> Result<u128> {
        let round = self
            .rounds
            .get_mut(&round_id)
            .ok_or(SaleError::RoundNotFound(round_id))?;
        if !round.active {
            return Err(SaleError::RoundNotActive(round_id));
        }

        let expected = amount_whole
            .checked_mul(round.price_per_token)
            .ok_or(SaleError::AmountOverflow)?;
        if value != expected {
            return Err(SaleError::IncorrectPayment {
                expected,
                provided: value,
            });
        }

        let base_amount = amount_whole
            .checked_mul(TOKEN_UNIT)
            .ok_or(SaleError::AmountOverflow)?;
        if round.tokens_available < base_amount {
            return Err(SaleError::InsufficientTokensAvailable {
                requested: base_amount,
                available: round.tokens_available,
            });
        }

        round.tokens_available -= base_amount;
        if round.tokens_available == 0 {
            round.active = false;
        }
        Ok(base_amount)
    }

    pub fn set_controller(&mut self, caller: &Address, new_controller: Address) -> Result<()> {
        self.policy.transfer(caller, new_controller)?;
        Ok(())
    }
}
