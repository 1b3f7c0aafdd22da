//! Proposal records and lifecycle

use crate::error::{GovernanceError, Result};
use covenant_core::{Action, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Accepting votes until the window closes.
    Open,
    Passed,
    Failed,
    Queued,
    Executed,
    /// Queued but not executed within the timelock grace window.
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter: Address,
    pub support: bool,
    pub weight: u128,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub actions: Vec<Action>,
    pub votes_for: u128,
    pub votes_against: u128,
    pub voters: HashMap<Address, VoteRecord>,
    pub created_at: u64,
    pub voting_end: u64,
    /// Earliest execution time, set when queued.
    pub eta: Option<u64>,
    pub status: ProposalStatus,
}

impl Proposal {
    pub fn new(
        id: u64,
        proposer: Address,
        actions: Vec<Action>,
        now: u64,
        voting_period: u64,
    ) -> Self {
        Self {
            id,
            proposer,
            actions,
            votes_for: 0,
            votes_against: 0,
            voters: HashMap::new(),
            created_at: now,
            voting_end: now + voting_period,
            eta: None,
            status: ProposalStatus::Open,
        }
    }

    /// Add a vote. Weight is the voter's token balance at vote time,
    /// supplied by the caller.
    pub fn record_vote(
        &mut self,
        voter: &Address,
        support: bool,
        weight: u128,
        now: u64,
    ) -> Result<()> {
        if self.status != ProposalStatus::Open || now > self.voting_end {
            return Err(GovernanceError::VotingClosed {
                now,
                voting_end: self.voting_end,
            });
        }
        if self.voters.contains_key(voter) {
            return Err(GovernanceError::AlreadyVoted(voter.clone()));
        }
        if weight == 0 {
            return Err(GovernanceError::NoVotingWeight(voter.clone()));
        }

        if support {
            self.votes_for += weight;
        } else {
            self.votes_against += weight;
        }
        self.voters.insert(
            voter.clone(),
            VoteRecord {
                voter: voter.clone(),
                support,
                weight,
                timestamp: now,
            },
        );
        Ok(())
    }

    pub fn participation(&self) -> u128 {
        self.votes_for + self.votes_against
    }

    /// Simple majority of cast votes.
    pub fn passed(&self) -> bool {
        self.votes_for > self.votes_against
    }

    /// Lazily close the vote once the window has elapsed. `quorum` is
    /// the minimum participation in token base units, if configured.
    pub fn evaluate(&mut self, now: u64, quorum: Option<u128>) {
        if self.status != ProposalStatus::Open || now <= self.voting_end {
            return;
        }
        let quorum_met = quorum.map_or(true, |min| self.participation() >= min);
        self.status = if quorum_met && self.passed() {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Failed
        };
    }

    pub fn mark_queued(&mut self, eta: u64, now: u64) -> Result<()> {
        match self.status {
            ProposalStatus::Passed => {
                self.status = ProposalStatus::Queued;
                self.eta = Some(eta);
                Ok(())
            }
            ProposalStatus::Open => Err(GovernanceError::VotingOpen {
                now,
                voting_end: self.voting_end,
            }),
            ProposalStatus::Queued => Err(GovernanceError::AlreadyQueued(self.id)),
            _ => Err(GovernanceError::NotPassed(self.id)),
        }
    }

    pub fn mark_executed(&mut self) -> Result<()> {
        if self.status != ProposalStatus::Queued {
            return Err(GovernanceError::NotQueued(self.id));
        }
        self.status = ProposalStatus::Executed;
        Ok(())
    }

    pub fn mark_expired(&mut self) -> Result<()> {
        if self.status != ProposalStatus::Queued {
            return Err(GovernanceError::NotQueued(self.id));
        }
        self.status = ProposalStatus::Expired;
        Ok(())
    }
}
