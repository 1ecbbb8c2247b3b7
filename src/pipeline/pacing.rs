// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Waits between pools

use std::time::Duration;

use crate::config::constants::{DEFAULT_FAILURE_DELAY, DEFAULT_POOL_DELAY};

/// Intervals the scan loop sleeps for
///
/// ```rust
/// use coinscan::pipeline::Pacing;
/// use std::time::Duration;
///
/// let pacing = Pacing::default();
/// assert_eq!(pacing.between_pools, Duration::from_secs(10));
/// assert_eq!(pacing.after_failure, Duration::from_secs(15));
/// assert!(Pacing::none().between_pools.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait before every pool except the first
    pub between_pools: Duration,
    /// Extra wait after a pool fails to load
    pub after_failure: Duration,
}

impl Pacing {
    /// Explicit intervals
    pub fn new(between_pools: Duration, after_failure: Duration) -> Self {
        Self {
            between_pools,
            after_failure,
        }
    }

    /// No waiting at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub(crate) async fn before_pool(&self, index: usize) {
        if index > 0 {
            sleep(self.between_pools).await;
        }
    }

    pub(crate) async fn backoff(&self) {
        sleep(self.after_failure).await;
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_DELAY, DEFAULT_FAILURE_DELAY)
    }
}

async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
