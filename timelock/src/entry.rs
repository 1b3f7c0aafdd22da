//! Queued entries and admin handoff

use crate::config::{GRACE_PERIOD, MAXIMUM_DELAY, MINIMUM_DELAY};
use crate::error::{Result, TimelockError};
use covenant_core::{entry_key, Action, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two-phase admin handoff state. A staged candidate must call
/// `accept_admin` before authority transfers, so a mistyped address can
/// never brick admin control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdminHandoff {
    None,
    Pending(Address),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedEntry {
    pub key: String,
    pub action: Action,
    pub eta: u64,
    pub queued_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timelock {
    address: Address,
    admin: Address,
    handoff: AdminHandoff,
    delay: u64,
    queued: HashMap<String, QueuedEntry>,
}

impl Timelock {
    /// `address` is the timelock's own identity; self-gated operations
    /// compare the caller against it.
    pub fn new(address: Address, admin: Address, delay: u64) -> Result<Self> {
        check_delay(delay)?;
        Ok(Self {
            address,
            admin,
            handoff: AdminHandoff::None,
            delay,
            queued: HashMap::new(),
        })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn pending_admin(&self) -> Option<&Address> {
        match &self.handoff {
            AdminHandoff::None => None,
            AdminHandoff::Pending(candidate) => Some(candidate),
        }
    }

    pub fn delay(&self) -> u64 {
        self.delay
    }

    pub fn entry(&self, key: &str) -> Option<&QueuedEntry> {
        self.queued.get(key)
    }

    /// Queue an action. Admin-gated; the eta must leave at least the
    /// mandatory delay.
    pub fn queue(&mut self, caller: &Address, action: Action, eta: u64, now: u64) -> Result<String> {
        self.require_admin(caller)?;
        let earliest = now + self.delay;
        if eta < earliest {
            return Err(TimelockError::DelayNotMet { eta, earliest });
        }
        let key = entry_key(&action, eta);
        if self.queued.contains_key(&key) {
            return Err(TimelockError::AlreadyQueued(key));
        }
        self.queued.insert(
            key.clone(),
            QueuedEntry {
                key: key.clone(),
                action,
                eta,
                queued_at: now,
            },
        );
        Ok(key)
    }

    /// Drop a queued entry. Admin-gated.
    pub fn cancel(&mut self, caller: &Address, key: &str) -> Result<()> {
        self.require_admin(caller)?;
        self.queued
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| TimelockError::NotQueued(key.to_string()))
    }

    /// Execute a queued entry, removing it. Admin-gated; succeeds only
    /// in the window [eta, eta + GRACE_PERIOD). The caller dispatches
    /// the returned action.
    pub fn execute(&mut self, caller: &Address, key: &str, now: u64) -> Result<Action> {
        self.require_admin(caller)?;
        let eta = self
            .queued
            .get(key)
            .map(|entry| entry.eta)
            .ok_or_else(|| TimelockError::NotQueued(key.to_string()))?;
        if now < eta {
            return Err(TimelockError::NotReady { now, eta });
        }
        let deadline = eta + GRACE_PERIOD;
        if now >= deadline {
            return Err(TimelockError::Expired { now, deadline });
        }
        let entry = self
            .queued
            .remove(key)
            .ok_or_else(|| TimelockError::NotQueued(key.to_string()))?;
        Ok(entry.action)
    }

    /// Stage a new admin. Only the timelock itself may call this, which
    /// means only a queued-and-executed `SetPendingAdmin` action reaches
    /// it. Admin changes are themselves subject to the delay.
    pub fn set_pending_admin(&mut self, caller: &Address, candidate: Address) -> Result<()> {
        self.require_self(caller)?;
        self.handoff = AdminHandoff::Pending(candidate);
        Ok(())
    }

    /// Complete the handoff. Only the staged candidate may accept.
    pub fn accept_admin(&mut self, caller: &Address) -> Result<()> {
        match &self.handoff {
            AdminHandoff::Pending(candidate) if candidate == caller => {
                self.admin = caller.clone();
                self.handoff = AdminHandoff::None;
                Ok(())
            }
            _ => Err(TimelockError::NoPendingAdmin(caller.clone())),
        }
    }

    /// Change the delay. Self-gated like `set_pending_admin`.
    pub fn set_delay(&mut self, caller: &Address, delay: u64) -> Result<()> {
        self.require_self(caller)?;
        check_delay(delay)?;
        self.delay = delay;
        Ok(())
    }

    fn require_admin(&self, caller: &Address) -> Result<()> {
        if caller != &self.admin {
            return Err(TimelockError::NotAdmin(caller.clone()));
        }
        Ok(())
    }

    fn require_self(&self, caller: &Address) -> Result<()> {
        if caller != &self.address {
            return Err(TimelockError::NotSelf(caller.clone()));
        }
        Ok(())
    }
}

fn check_delay(delay: u64) -> Result<()> {
    if !(MINIMUM_DELAY..=MAXIMUM_DELAY).contains(&delay) {
        return Err(TimelockError::DelayOutOfBounds {
            delay,
            min: MINIMUM_DELAY,
            max: MAXIMUM_DELAY,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::tokens;

    const DELAY: u64 = 2 * 86400;

    fn timelock() -> Timelock {
        Timelock::new(Address::from("timelock"), Address::from("dao"), DELAY).unwrap()
    }

    fn mint_action() -> Action {
        Action::Mint {
            amount: tokens(1000),
        }
    }

    #[test]
    fn test_queue_requires_delay() {
        let mut lock = timelock();
        let result = lock.queue(&Address::from("dao"), mint_action(), 1000 + DELAY - 1, 1000);
        assert!(matches!(result, Err(TimelockError::DelayNotMet { .. })));

        lock.queue(&Address::from("dao"), mint_action(), 1000 + DELAY, 1000)
            .unwrap();
    }

    #[test]
    fn test_queue_rejects_duplicates() {
        let mut lock = timelock();
        let eta = 1000 + DELAY;
        lock.queue(&Address::from("dao"), mint_action(), eta, 1000)
            .unwrap();
        let result = lock.queue(&Address::from("dao"), mint_action(), eta, 1000);
        assert!(matches!(result, Err(TimelockError::AlreadyQueued(_))));
    }

    #[test]
    fn test_execute_window() {
        let mut lock = timelock();
        let eta = 1000 + DELAY;
        let key = lock
            .queue(&Address::from("dao"), mint_action(), eta, 1000)
            .unwrap();

        // Too early
        let result = lock.execute(&Address::from("dao"), &key, eta - 1);
        assert!(matches!(result, Err(TimelockError::NotReady { .. })));

        // In window
        let action = lock.execute(&Address::from("dao"), &key, eta).unwrap();
        assert_eq!(action, mint_action());

        // Entry is gone: at-most-once
        let result = lock.execute(&Address::from("dao"), &key, eta);
        assert!(matches!(result, Err(TimelockError::NotQueued(_))));
    }

    #[test]
    fn test_execute_after_grace_expires() {
        let mut lock = timelock();
        let eta = 1000 + DELAY;
        let key = lock
            .queue(&Address::from("dao"), mint_action(), eta, 1000)
            .unwrap();

        let result = lock.execute(&Address::from("dao"), &key, eta + crate::config::GRACE_PERIOD);
        assert!(matches!(result, Err(TimelockError::Expired { .. })));
    }

    #[test]
    fn test_cancel() {
        let mut lock = timelock();
        let eta = 1000 + DELAY;
        let key = lock
            .queue(&Address::from("dao"), mint_action(), eta, 1000)
            .unwrap();
        lock.cancel(&Address::from("dao"), &key).unwrap();
        assert!(lock.entry(&key).is_none());
    }

    #[test]
    fn test_admin_gate() {
        let mut lock = timelock();
        let result = lock.queue(&Address::from("mallory"), mint_action(), 1000 + DELAY, 1000);
        assert!(matches!(result, Err(TimelockError::NotAdmin(_))));
    }

    #[test]
    fn test_pending_admin_handoff() {
        let mut lock = timelock();

        // Staging is self-gated
        let result = lock.set_pending_admin(&Address::from("dao"), Address::from("governance"));
        assert!(matches!(result, Err(TimelockError::NotSelf(_))));

        lock.set_pending_admin(&Address::from("timelock"), Address::from("governance"))
            .unwrap();
        assert_eq!(lock.pending_admin(), Some(&Address::from("governance")));

        // Only the candidate may accept
        let result = lock.accept_admin(&Address::from("mallory"));
        assert!(matches!(result, Err(TimelockError::NoPendingAdmin(_))));

        lock.accept_admin(&Address::from("governance")).unwrap();
        assert_eq!(lock.admin(), &Address::from("governance"));
        assert_eq!(lock.pending_admin(), None);
    }

    #[test]
    fn test_set_delay_bounds() {
        let mut lock = timelock();
        let result = lock.set_delay(&Address::from("timelock"), 60);
        assert!(matches!(result, Err(TimelockError::DelayOutOfBounds { .. })));

        lock.set_delay(&Address::from("timelock"), 3 * 86400).unwrap();
        assert_eq!(lock.delay(), 3 * 86400);
    }
}
