//! Journal events
//!
//! Emitted by the protocol layer in call-inclusion order. Off-chain
//! consumers rely on that ordering; events from reverted calls are
//! never observable.

use crate::{Address, ComponentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Transfer {
        from: Address,
        to: Address,
        amount: u128,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: u128,
    },
    Minted {
        to: Address,
        amount: u128,
    },
    Airdropped {
        to: Address,
        amount: u128,
    },
    ProposalCreated {
        id: u64,
        proposer: Address,
    },
    VoteCast {
        proposal: u64,
        voter: Address,
        support: bool,
        weight: u128,
    },
    ProposalQueued {
        id: u64,
        eta: u64,
    },
    ProposalExecuted {
        id: u64,
    },
    ProposalExpired {
        id: u64,
    },
    SaleStarted {
        round: u64,
        tokens: u128,
        price_per_token: u128,
    },
    TokensPurchased {
        buyer: Address,
        round: u64,
        amount: u128,
        value: u128,
    },
    NativeWithdrawn {
        to: Address,
        amount: u128,
    },
    CompanyCreated {
        id: u64,
        owner: Address,
    },
    EmployeeHired {
        company: u64,
        wallet: Address,
    },
    EmployeePaid {
        company: u64,
        wallet: Address,
        amount: u128,
    },
    OwnershipTransferred {
        component: ComponentId,
        new_owner: Address,
    },
    PendingAdminSet {
        candidate: Address,
    },
    AdminAccepted {
        admin: Address,
    },
}
