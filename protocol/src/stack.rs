//! The composed governance stack

use crate::error::{ProtocolError, Result};
use covenant_core::{Action, Address, ComponentId, Event};
use governance::{GovernanceConfig, Governor, ProposalStatus};
use payroll::Registry;
use serde::{Deserialize, Serialize};
use timelock::Timelock;
use token::TokenLedger;
use token_sale::TokenSale;
use treasury::{Treasury, TreasurySource};

/// Well-known component identities in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addresses {
    pub treasury: Address,
    pub timelock: Address,
    pub governance: Address,
    pub token_sale: Address,
    pub payroll: Address,
}

impl Default for Addresses {
    fn default() -> Self {
        Self {
            treasury: Address::from("treasury"),
            timelock: Address::from("timelock"),
            governance: Address::from("governance"),
            token_sale: Address::from("token-sale"),
            payroll: Address::from("payroll"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protocol {
    pub(crate) token: TokenLedger,
    pub(crate) treasury: Treasury,
    pub(crate) timelock: Timelock,
    pub(crate) governor: Governor,
    pub(crate) sale: TokenSale,
    pub(crate) payroll: Registry,
    pub(crate) addresses: Addresses,
    /// May complete the timelock admin handoff on governance's behalf.
    guardian: Address,
    events: Vec<Event>,
}

impl Protocol {
    /// Build the stack with `deployer` controlling every component,
    /// including the timelock admin seat. Bootstrap hands control over
    /// to the timelock/governance pair.
    pub fn new(deployer: Address, config: GovernanceConfig, delay: u64) -> Result<Self> {
        let addresses = Addresses::default();
        Ok(Self {
            token: TokenLedger::new(addresses.treasury.clone(), deployer.clone()),
            treasury: Treasury::new(deployer.clone()),
            timelock: Timelock::new(addresses.timelock.clone(), deployer.clone(), delay)?,
            governor: Governor::new(config),
            sale: TokenSale::new(addresses.token_sale.clone(), deployer.clone()),
            payroll: Registry::new(),
            addresses,
            guardian: deployer,
            events: Vec::new(),
        })
    }

    // ---- reads ----------------------------------------------------

    pub fn addresses(&self) -> &Addresses {
        &self.addresses
    }

    pub fn token(&self) -> &TokenLedger {
        &self.token
    }

    pub fn treasury(&self) -> &Treasury {
        &self.treasury
    }

    pub fn timelock(&self) -> &Timelock {
        &self.timelock
    }

    pub fn governor(&self) -> &Governor {
        &self.governor
    }

    pub fn sale(&self) -> &TokenSale {
        &self.sale
    }

    pub fn payroll(&self) -> &Registry {
        &self.payroll
    }

    /// Journal of everything that happened, in call-inclusion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn balance_of(&self, address: &Address) -> u128 {
        self.token.balance_of(address)
    }

    /// Supply outside the treasury.
    pub fn circulating_supply(&self) -> u128 {
        self.token.total_supply() - self.token.balance_of(&self.addresses.treasury)
    }

    // ---- token surface --------------------------------------------

    pub fn transfer(&mut self, caller: &Address, to: &Address, amount: u128) -> Result<()> {
        self.token.transfer(caller, to, amount)?;
        self.events.push(Event::Transfer {
            from: caller.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    pub fn approve(&mut self, caller: &Address, spender: &Address, amount: u128) {
        self.token.approve(caller, spender, amount);
        self.events.push(Event::Approval {
            owner: caller.clone(),
            spender: spender.clone(),
            amount,
        });
    }

    pub fn transfer_from(
        &mut self,
        caller: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<()> {
        self.token.transfer_from(caller, from, to, amount)?;
        self.events.push(Event::Transfer {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    /// Mint to the treasury. Controller-gated: the deployer during
    /// bootstrap, the timelock once governance is live.
    pub fn mint(&mut self, caller: &Address, amount: u128) -> Result<()> {
        self.token.mint(caller, amount)?;
        self.events.push(Event::Minted {
            to: self.addresses.treasury.clone(),
            amount,
        });
        Ok(())
    }

    pub fn airdrop(&mut self, caller: &Address, to: &Address, amount: u128) -> Result<()> {
        self.token.airdrop(caller, to, amount)?;
        self.events.push(Event::Airdropped {
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    /// Re-point a component's controller. Gated by that component's
    /// current controller.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        component: ComponentId,
        new_owner: Address,
    ) -> Result<()> {
        match component {
            ComponentId::Token => self.token.set_controller(caller, new_owner.clone())?,
            ComponentId::Treasury => self.treasury.set_controller(caller, new_owner.clone())?,
            ComponentId::TokenSale => self.sale.set_controller(caller, new_owner.clone())?,
        }
        self.events.push(Event::OwnershipTransferred {
            component,
            new_owner,
        });
        Ok(())
    }

    // ---- governance pipeline --------------------------------------

    /// Create a proposal. The proposer must have approved the
    /// governance address for the proposal cost; the bond moves to the
    /// treasury.
    pub fn create_proposal(
        &mut self,
        proposer: &Address,
        actions: Vec<Action>,
        now: u64,
    ) -> Result<u64> {
        self.transactional(|p| {
            let required = p.governor.config().proposal_cost;
            let governance = p.addresses.governance.clone();
            let treasury = p.addresses.treasury.clone();
            p.token
                .transfer_from(&governance, proposer, &treasury, required)
                .map_err(|source| ProtocolError::InsufficientBond { required, source })?;
            p.events.push(Event::Transfer {
                from: proposer.clone(),
                to: treasury,
                amount: required,
            });

            let id = p.governor.create(proposer, actions, now)?;
            p.events.push(Event::ProposalCreated {
                id,
                proposer: proposer.clone(),
            });
            log::info!("proposal {} created by {}", id, proposer);
            Ok(id)
        })
    }

    /// Vote with weight equal to the caller's token balance at vote
    /// time.
    pub fn vote(&mut self, voter: &Address, id: u64, support: bool, now: u64) -> Result<()> {
        let weight = self.token.balance_of(voter);
        self.governor.vote(voter, id, support, weight, now)?;
        self.events.push(Event::VoteCast {
            proposal: id,
            voter: voter.clone(),
            support,
            weight,
        });
        Ok(())
    }

    /// Queue a passed proposal: every action enters the timelock with
    /// eta = now + delay. Callable by anyone once the window closed.
    pub fn queue_proposal(&mut self, id: u64, now: u64) -> Result<u64> {
        self.transactional(|p| {
            let circulating = p.circulating_supply();
            p.governor.evaluate(id, now, circulating)?;

            let eta = now + p.timelock.delay();
            p.governor.mark_queued(id, eta, now)?;

            let actions = p.governor.proposal(id)?.actions.clone();
            let governance = p.addresses.governance.clone();
            for action in actions {
                p.timelock.queue(&governance, action, eta, now)?;
            }
            p.events.push(Event::ProposalQueued { id, eta });
            log::info!("proposal {} queued, eta {}", id, eta);
            Ok(eta)
        })
    }

    /// Execute a queued proposal once every entry's eta has elapsed.
    /// The whole batch commits or none of it does.
    pub fn execute_proposal(&mut self, id: u64, now: u64) -> Result<()> {
        let circulating = self.circulating_supply();
        self.governor.evaluate(id, now, circulating)?;

        let proposal = self.governor.proposal(id)?;
        match proposal.status {
            ProposalStatus::Queued => {}
            ProposalStatus::Open | ProposalStatus::Failed => {
                return Err(governance::GovernanceError::NotPassed(id).into());
            }
            _ => return Err(governance::GovernanceError::NotQueued(id).into()),
        }
        let eta = proposal.eta.ok_or(governance::GovernanceError::NotQueued(id))?;

        // A grace-period miss is a real transition, not a revert: the
        // proposal is dead and stays that way.
        let deadline = eta + timelock::config::GRACE_PERIOD;
        if now >= deadline {
            self.governor.mark_expired(id)?;
            self.events.push(Event::ProposalExpired { id });
            return Err(timelock::TimelockError::Expired { now, deadline }.into());
        }

        self.transactional(|p| {
            let actions = p.governor.proposal(id)?.actions.clone();
            let governance = p.addresses.governance.clone();
            for action in actions {
                let key = covenant_core::entry_key(&action, eta);
                let action = p.timelock.execute(&governance, &key, now)?;
                p.dispatch(action, now)?;
            }
            p.governor.mark_executed(id)?;
            p.events.push(Event::ProposalExecuted { id });
            log::info!("proposal {} executed", id);
            Ok(())
        })
    }

    /// Queue an action directly on the timelock. Only useful to the
    /// current timelock admin, i.e. the deployer during bootstrap.
    pub fn queue_timelock_action(
        &mut self,
        caller: &Address,
        action: Action,
        eta: u64,
        now: u64,
    ) -> Result<String> {
        Ok(self.timelock.queue(caller, action, eta, now)?)
    }

    /// Execute a directly-queued timelock entry and dispatch its action.
    pub fn execute_timelock_action(&mut self, caller: &Address, key: &str, now: u64) -> Result<()> {
        self.transactional(|p| {
            let action = p.timelock.execute(caller, key, now)?;
            p.dispatch(action, now)
        })
    }

    /// Complete the timelock admin handoff with governance as the new
    /// admin. Guardian-gated.
    pub fn accept_timelock_admin(&mut self, caller: &Address) -> Result<()> {
        if caller != &self.guardian {
            return Err(ProtocolError::NotGuardian(caller.clone()));
        }
        let governance = self.addresses.governance.clone();
        self.timelock.accept_admin(&governance)?;
        self.events.push(Event::AdminAccepted { admin: governance });
        Ok(())
    }

    // ---- token sale -----------------------------------------------

    /// Buy whole tokens from a round with exact attached value. Tokens
    /// come from the sale inventory, the native currency lands in the
    /// treasury.
    pub fn buy_tokens(
        &mut self,
        buyer: &Address,
        round_id: u64,
        amount_whole: u128,
        value: u128,
        now: u64,
    ) -> Result<()> {
        self.transactional(|p| {
            let sale_address = p.sale.address().clone();
            let base_amount = p.sale.purchase(round_id, amount_whole, value)?;
            p.token.transfer(&sale_address, buyer, base_amount)?;
            p.treasury
                .deposit_native(buyer, value, TreasurySource::SalePurchase, now)?;

            p.events.push(Event::Transfer {
                from: sale_address,
                to: buyer.clone(),
                amount: base_amount,
            });
            p.events.push(Event::TokensPurchased {
                buyer: buyer.clone(),
                round: round_id,
                amount: base_amount,
                value,
            });
            log::info!(
                "round {}: sold {} base units to {} for {}",
                round_id,
                base_amount,
                buyer,
                value
            );
            Ok(())
        })
    }

    // ---- payroll --------------------------------------------------

    /// Register a company. The creation fee must be approved to the
    /// payroll address and moves to the treasury.
    #[allow(clippy::too_many_arguments)]
    pub fn create_company(
        &mut self,
        caller: &Address,
        name: String,
        industry: String,
        metadata_uri: String,
        roles: Vec<String>,
        founder_name: String,
        founder_role: String,
        now: u64,
    ) -> Result<u64> {
        self.transactional(|p| {
            let fee = payroll::config::COMPANY_CREATION_FEE;
            let payroll_address = p.addresses.payroll.clone();
            let treasury = p.addresses.treasury.clone();
            p.token
                .transfer_from(&payroll_address, caller, &treasury, fee)?;
            p.events.push(Event::Transfer {
                from: caller.clone(),
                to: treasury,
                amount: fee,
            });

            let id = p.payroll.create_company(
                caller,
                name,
                industry,
                metadata_uri,
                roles,
                founder_name,
                founder_role,
                now,
            );
            p.events.push(Event::CompanyCreated {
                id,
                owner: caller.clone(),
            });
            Ok(id)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn hire_employee(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: Address,
        name: String,
        role: String,
        salary: u128,
        currency: String,
        now: u64,
    ) -> Result<()> {
        self.payroll.hire_employee(
            caller,
            company_id,
            wallet.clone(),
            name,
            role,
            salary,
            currency,
            now,
        )?;
        self.events.push(Event::EmployeeHired {
            company: company_id,
            wallet,
        });
        Ok(())
    }

    pub fn hire_contractor(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: Address,
        name: String,
        rate: u128,
        currency: String,
        now: u64,
    ) -> Result<()> {
        self.payroll
            .hire_contractor(caller, company_id, wallet.clone(), name, rate, currency, now)?;
        self.events.push(Event::EmployeeHired {
            company: company_id,
            wallet,
        });
        Ok(())
    }

    /// Pay every employee of a company `salary x elapsed` from the
    /// treasury's token balance. All-or-nothing: if any single payment
    /// cannot be funded the whole run reverts.
    pub fn pay_employees(&mut self, caller: &Address, company_id: u64, now: u64) -> Result<()> {
        self.transactional(|p| {
            let owed = p.payroll.accrued(company_id, now)?;
            p.payroll.settle(caller, company_id, now)?;

            let treasury = p.addresses.treasury.clone();
            let mut total = 0u128;
            for (wallet, amount) in owed {
                if amount == 0 {
                    continue;
                }
                p.token.transfer(&treasury, &wallet, amount)?;
                p.events.push(Event::Transfer {
                    from: treasury.clone(),
                    to: wallet.clone(),
                    amount,
                });
                p.events.push(Event::EmployeePaid {
                    company: company_id,
                    wallet,
                    amount,
                });
                total += amount;
            }
            log::info!("company {}: paid {} base units in salaries", company_id, total);
            Ok(())
        })
    }

    pub fn set_company_role(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: &Address,
        role: String,
    ) -> Result<()> {
        Ok(self
            .payroll
            .set_company_role(caller, company_id, wallet, role)?)
    }

    pub fn add_company_role(
        &mut self,
        caller: &Address,
        company_id: u64,
        role: String,
    ) -> Result<()> {
        Ok(self.payroll.add_company_role(caller, company_id, role)?)
    }

    // ---- internals ------------------------------------------------

    pub(crate) fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Run `f` against the stack; on any error restore the pre-call
    /// snapshot so no partial write (or event) survives.
    fn transactional<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }
}
