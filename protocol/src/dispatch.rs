//! Action dispatch
//!
//! Actions reach this point only after passing the governance vote and
//! the timelock window (or the bootstrap admin's direct queue), so they
//! run with the timelock's identity. Component authorization policies
//! still apply: an action against a component the timelock does not
//! control fails like any other unauthorized caller.

use crate::error::Result;
use crate::stack::Protocol;
use covenant_core::{Action, ComponentId, Event};

impl Protocol {
    pub(crate) fn dispatch(&mut self, action: Action, now: u64) -> Result<()> {
        log::debug!("dispatching action: {}", action.kind());
        let timelock_identity = self.addresses.timelock.clone();

        match action {
            Action::Mint { amount } => {
                self.token.mint(&timelock_identity, amount)?;
                self.push_event(Event::Minted {
                    to: self.addresses.treasury.clone(),
                    amount,
                });
            }
            Action::Airdrop { to, amount } => {
                self.token.airdrop(&timelock_identity, &to, amount)?;
                self.push_event(Event::Airdropped { to, amount });
            }
            Action::TreasuryTransfer { to, amount } => {
                self.treasury.require_controller(&timelock_identity)?;
                let treasury = self.addresses.treasury.clone();
                self.token.transfer(&treasury, &to, amount)?;
                self.push_event(Event::Transfer {
                    from: treasury,
                    to,
                    amount,
                });
            }
            Action::WithdrawNative { to, amount } => {
                self.treasury
                    .withdraw_native(&timelock_identity, &to, amount, now)?;
                self.push_event(Event::NativeWithdrawn { to, amount });
            }
            Action::TransferOwnership {
                component,
                new_owner,
            } => {
                match component {
                    ComponentId::Token => self
                        .token
                        .set_controller(&timelock_identity, new_owner.clone())?,
                    ComponentId::Treasury => self
                        .treasury
                        .set_controller(&timelock_identity, new_owner.clone())?,
                    ComponentId::TokenSale => self
                        .sale
                        .set_controller(&timelock_identity, new_owner.clone())?,
                }
                self.push_event(Event::OwnershipTransferred {
                    component,
                    new_owner,
                });
            }
            Action::StartSale {
                tokens,
                price_per_token,
            } => {
                let funded = self.token.balance_of(self.sale.address());
                let round =
                    self.sale
                        .start_sale(&timelock_identity, tokens, price_per_token, funded)?;
                self.push_event(Event::SaleStarted {
                    round,
                    tokens,
                    price_per_token,
                });
            }
            Action::SetPendingAdmin { candidate } => {
                self.timelock
                    .set_pending_admin(&timelock_identity, candidate.clone())?;
                self.push_event(Event::PendingAdminSet { candidate });
            }
            Action::SetDelay { delay } => {
                self.timelock.set_delay(&timelock_identity, delay)?;
                log::info!("timelock delay set to {}", delay);
            }
        }
        Ok(())
    }
}
