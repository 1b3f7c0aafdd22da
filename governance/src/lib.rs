//! Covenant Governance
//!
//! The proposal book: token-weighted voting over lists of governance
//! actions. A proposal opens for voting at creation, closes after the
//! voting period, then travels Passed -> Queued -> Executed through the
//! timelock (or dies as Failed / Expired).

pub mod error;
pub mod governor;
pub mod proposal;

pub use error::{GovernanceError, Result};
pub use governor::{GovernanceConfig, Governor};
pub use proposal::{Proposal, ProposalStatus, VoteRecord};

/// Governance configuration constants
pub mod config {
    use covenant_core::TOKEN_UNIT;

    /// Voting window after proposal creation (2 days)
    pub const VOTING_PERIOD: u64 = 2 * 86400;

    /// Bond a proposer pays to create a proposal (10 tokens)
    pub const PROPOSAL_COST: u128 = 10 * TOKEN_UNIT;
}
