//! Timelock error types

use covenant_core::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelockError {
    #[error("caller {0} is not the timelock admin")]
    NotAdmin(Address),

    #[error("caller {0} is not the timelock itself")]
    NotSelf(Address),

    #[error("delay {delay} outside allowed bounds [{min}, {max}]")]
    DelayOutOfBounds { delay: u64, min: u64, max: u64 },

    #[error("eta {eta} does not satisfy the delay (earliest {earliest})")]
    DelayNotMet { eta: u64, earliest: u64 },

    #[error("entry already queued: {0}")]
    AlreadyQueued(String),

    #[error("entry not queued: {0}")]
    NotQueued(String),

    #[error("entry not ready: now {now}, eta {eta}")]
    NotReady { now: u64, eta: u64 },

    #[error("entry expired: now {now}, deadline {deadline}")]
    Expired { now: u64, deadline: u64 },

    #[error("no pending admin staged for {0}")]
    NoPendingAdmin(Address),
}

pub type Result<T> = std::result::Result<T, TimelockError>;
