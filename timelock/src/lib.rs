//! Covenant Timelock
//!
//! Delays privileged actions behind a mandatory waiting period. An
//! action is queued with an eta, becomes executable at the eta, and
//! expires after a grace window. Admin authority moves only through a
//! two-phase handoff, and staging the handoff is itself only reachable
//! through a queued-and-executed action.

pub mod entry;
pub mod error;

pub use entry::{AdminHandoff, QueuedEntry, Timelock};
pub use error::{Result, TimelockError};

/// Timelock timing bounds (seconds).
pub mod config {
    /// Shortest allowed delay (2 days).
    pub const MINIMUM_DELAY: u64 = 2 * 86400;

    /// Longest allowed delay (30 days).
    pub const MAXIMUM_DELAY: u64 = 30 * 86400;

    /// Window after the eta during which execution is still allowed
    /// (14 days). Bounds state growth from abandoned entries.
    pub const GRACE_PERIOD: u64 = 14 * 86400;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_bounds() {
        assert!(config::MINIMUM_DELAY < config::MAXIMUM_DELAY);
        assert_eq!(config::GRACE_PERIOD, 14 * 86400);
    }
}
