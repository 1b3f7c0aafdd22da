//! Governance error types

use covenant_core::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("proposal not found: {0}")]
    ProposalNotFound(u64),

    #[error("proposal has no actions")]
    EmptyProposal,

    #[error("already voted: {0}")]
    AlreadyVoted(Address),

    #[error("voting closed: now {now}, window ended {voting_end}")]
    VotingClosed { now: u64, voting_end: u64 },

    #[error("voting still open: now {now}, window ends {voting_end}")]
    VotingOpen { now: u64, voting_end: u64 },

    #[error("voter {0} has no voting weight")]
    NoVotingWeight(Address),

    #[error("proposal {0} must be passed to continue")]
    NotPassed(u64),

    #[error("proposal {0} already queued")]
    AlreadyQueued(u64),

    #[error("proposal {0} is not queued")]
    NotQueued(u64),
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
