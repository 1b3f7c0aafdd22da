//! Authorization policy
//!
//! Every privileged mutation in the stack is gated by an `AuthPolicy`
//! injected at construction. The controller address changes only through
//! a call already authorized by the current controller, so the chain of
//! custody (deployer -> timelock -> governance) is explicit and testable.

use crate::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("caller {caller} is not the controller {controller}")]
    NotController { caller: Address, controller: Address },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPolicy {
    controller: Address,
}

impl AuthPolicy {
    pub fn new(controller: Address) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Address {
        &self.controller
    }

    /// Reject callers other than the current controller.
    pub fn require(&self, caller: &Address) -> Result<(), AuthError> {
        if caller != &self.controller {
            return Err(AuthError::NotController {
                caller: caller.clone(),
                controller: self.controller.clone(),
            });
        }
        Ok(())
    }

    /// Reassign the controller. Gated by the current controller.
    pub fn transfer(&mut self, caller: &Address, new_controller: Address) -> Result<(), AuthError> {
        self.require(caller)?;
        self.controller = new_controller;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_controller() {
        let policy = AuthPolicy::new(Address::from("deployer"));
        assert!(policy.require(&Address::from("deployer")).is_ok());
        assert!(policy.require(&Address::from("mallory")).is_err());
    }

    #[test]
    fn test_transfer_gated() {
        let mut policy = AuthPolicy::new(Address::from("deployer"));

        // Non-controller cannot reassign
        let result = policy.transfer(&Address::from("mallory"), Address::from("mallory"));
        assert!(result.is_err());
        assert_eq!(policy.controller(), &Address::from("deployer"));

        // Controller hands off, then loses authority
        policy
            .transfer(&Address::from("deployer"), Address::from("timelock"))
            .unwrap();
        assert_eq!(policy.controller(), &Address::from("timelock"));
        assert!(policy.require(&Address::from("deployer")).is_err());
    }
}
