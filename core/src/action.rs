//! Governance actions
//!
//! A proposal carries a list of `Action`s instead of raw
//! (target, signature, calldata) triples. The set of things governance
//! can do is closed and typed; the protocol layer dispatches each
//! variant to its component with the proper authority.

use crate::Address;
use serde::{Deserialize, Serialize};

/// Components whose controller can be reassigned by governance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentId {
    Token,
    Treasury,
    TokenSale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Mint new tokens to the treasury.
    Mint { amount: u128 },
    /// Mint-and-send to an arbitrary address.
    Airdrop { to: Address, amount: u128 },
    /// Move treasury-owned tokens to a recipient.
    TreasuryTransfer { to: Address, amount: u128 },
    /// Pay out treasury-held native currency.
    WithdrawNative { to: Address, amount: u128 },
    /// Re-point a component's authorization policy.
    TransferOwnership {
        component: ComponentId,
        new_owner: Address,
    },
    /// Open a token sale round.
    StartSale { tokens: u128, price_per_token: u128 },
    /// Stage the timelock admin handoff.
    SetPendingAdmin { candidate: Address },
    /// Change the timelock delay.
    SetDelay { delay: u64 },
}

impl Action {
    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Mint { .. } => "mint",
            Action::Airdrop { .. } => "airdrop",
            Action::TreasuryTransfer { .. } => "treasury-transfer",
            Action::WithdrawNative { .. } => "withdraw-native",
            Action::TransferOwnership { .. } => "transfer-ownership",
            Action::StartSale { .. } => "start-sale",
            Action::SetPendingAdmin { .. } => "set-pending-admin",
            Action::SetDelay { .. } => "set-delay",
        }
    }
}
