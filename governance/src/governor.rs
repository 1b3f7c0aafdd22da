//! Proposal book

use crate::config;
use crate::error::{GovernanceError, Result};
use crate::proposal::{Proposal, ProposalStatus};
use covenant_core::{Action, Address};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceConfig {
    pub voting_period: u64,
    pub proposal_cost: u128,
    /// Minimum participation as a percentage of circulating supply.
    /// The base configuration runs on simple majority alone.
    pub quorum_percent: Option<u64>,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            voting_period: config::VOTING_PERIOD,
            proposal_cost: config::PROPOSAL_COST,
            quorum_percent: None,
        }
    }
}

/// Owns every proposal. Ids are sequential from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Governor {
    config: GovernanceConfig,
    proposals: Vec<Proposal>,
}

impl Governor {
    pub fn new(config: GovernanceConfig) -> Self {
        Self {
            config,
            proposals: Vec::new(),
        }
    }

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn proposal_count(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn proposal(&self, id: u64) -> Result<&Proposal> {
        self.proposals
            .get(id as usize)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Record a new proposal. The bond is collected by the caller
    /// before this point.
    pub fn create(&mut self, proposer: &Address, actions: Vec<Action>, now: u64) -> Result<u64> {
        if actions.is_empty() {
            return Err(GovernanceError::EmptyProposal);
        }
        let id = self.proposals.len() as u64;
        self.proposals.push(Proposal::new(
            id,
            proposer.clone(),
            actions,
            now,
            self.config.voting_period,
        ));
        Ok(id)
    }

    pub fn vote(
        &mut self,
        voter: &Address,
        id: u64,
        support: bool,
        weight: u128,
        now: u64,
    ) -> Result<()> {
        self.proposal_mut(id)?.record_vote(voter, support, weight, now)
    }

    /// Close the vote if the window has elapsed and return the current
    /// status. `circulating` is the supply outside the treasury, used
    /// only when a quorum percentage is configured.
    pub fn evaluate(&mut self, id: u64, now: u64, circulating: u128) -> Result<ProposalStatus> {
        let quorum = self
            .config
            .quorum_percent
            .map(|percent| circulating * percent as u128 / 100);
        let proposal = self.proposal_mut(id)?;
        proposal.evaluate(now, quorum);
        Ok(proposal.status)
    }

    pub fn mark_queued(&mut self, id: u64, eta: u64, now: u64) -> Result<()> {
        self.proposal_mut(id)?.mark_queued(eta, now)
    }

    pub fn mark_executed(&mut self, id: u64) -> Result<()> {
        self.proposal_mut(id)?.mark_executed()
    }

    pub fn mark_expired(&mut self, id: u64) -> Result<()> {
        self.proposal_mut(id)?.mark_expired()
    }

    fn proposal_mut(&mut self, id: u64) -> Result<&mut Proposal> {
        self.proposals
            .get_mut(id as usize)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }
}
