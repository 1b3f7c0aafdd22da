//! Deploy-time bootstrap
//!
//! Builds the stack with the deployer in control, then walks the
//! handoff: component ownership moves to the timelock, and the
//! timelock admin seat moves to governance through the two-phase
//! pending-admin handshake. After this, every privileged mutation is
//! reachable only through the governance pipeline.

use crate::error::Result;
use crate::stack::Protocol;
use covenant_core::{Action, Address, ComponentId};
use governance::GovernanceConfig;

/// Build and hand over the stack. `initial_holders` receive airdropped
/// balances (and with them, voting weight) before the deployer gives up
/// control. Returns the stack and the logical time after the handoff's
/// mandatory delay.
pub fn bootstrap(
    deployer: &Address,
    initial_holders: &[(Address, u128)],
    now: u64,
) -> Result<(Protocol, u64)> {
    let mut protocol = Protocol::new(
        deployer.clone(),
        GovernanceConfig::default(),
        timelock::config::MINIMUM_DELAY,
    )?;

    for (holder, amount) in initial_holders {
        protocol.airdrop(deployer, holder, *amount)?;
    }

    let timelock_address = protocol.addresses().timelock.clone();
    let governance_address = protocol.addresses().governance.clone();

    for component in [
        ComponentId::Token,
        ComponentId::Treasury,
        ComponentId::TokenSale,
    ] {
        protocol.transfer_ownership(deployer, component, timelock_address.clone())?;
    }

    // Admin handoff travels through the timelock's own queue, so even
    // the deployer waits out the delay.
    let eta = now + protocol.timelock().delay();
    let key = protocol.queue_timelock_action(
        deployer,
        Action::SetPendingAdmin {
            candidate: governance_address,
        },
        eta,
        now,
    )?;
    protocol.execute_timelock_action(deployer, &key, eta)?;
    protocol.accept_timelock_admin(deployer)?;

    log::info!("bootstrap complete: governance controls the timelock");
    Ok((protocol, eta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::tokens;

    #[test]
    fn test_bootstrap_handoff() {
        let deployer = Address::from("founder");
        let holders = [
            (Address::from("addr1"), tokens(1000)),
            (Address::from("addr2"), tokens(1000)),
        ];

        let (protocol, _now) = bootstrap(&deployer, &holders, 1_000).unwrap();

        let addresses = protocol.addresses();
        assert_eq!(protocol.token().controller(), &addresses.timelock);
        assert_eq!(protocol.treasury().controller(), &addresses.timelock);
        assert_eq!(protocol.sale().controller(), &addresses.timelock);
        assert_eq!(protocol.timelock().admin(), &addresses.governance);
        assert_eq!(protocol.timelock().pending_admin(), None);

        assert_eq!(protocol.balance_of(&Address::from("addr1")), tokens(1000));
    }

    #[test]
    fn test_deployer_locked_out_after_bootstrap() {
        let deployer = Address::from("founder");
        let (mut protocol, now) = bootstrap(&deployer, &[], 1_000).unwrap();

        assert!(protocol.mint(&deployer, tokens(1)).is_err());
        assert!(protocol
            .queue_timelock_action(
                &deployer,
                Action::Mint { amount: tokens(1) },
                now + protocol.timelock().delay(),
                now,
            )
            .is_err());
    }
}
