// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for coinscan operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! helper here, and the operation attaches the span with
//! [`Instrument`](tracing::Instrument) so it stays correct across `.await`.
//!
//! ```rust,ignore
//! async fn my_operation(&self) -> Result<T, E> {
//!     self.inner().instrument(spans::my_operation()).await
//! }
//! ```

use alloy_chains::NamedChain;
use alloy_primitives::{BlockNumber, B256};
use tracing::{Level, Span};

/// Create span for a whole scan run.
///
/// Parent: None (root span)
/// Children: process_pool spans (one per decoded log)
#[inline]
pub(crate) fn scan_pools(
    chain: NamedChain,
    from_block: BlockNumber,
    to_block: BlockNumber,
) -> Span {
    tracing::span!(
        Level::INFO,
        "coinscan.scan_pools",
        chain_id = %chain,
        from_block = from_block,
        to_block = to_block,
    )
}

/// Create span for one iteration of the pool loop.
///
/// `pool_id` is empty when the log at `index` could not be decoded.
///
/// Parent: scan_pools span
/// Children: load_pool_state span
#[inline]
pub(crate) fn process_pool(index: usize, pool_id: Option<B256>) -> Span {
    tracing::debug_span!(
        "coinscan.process_pool",
        index = index,
        pool_id = pool_id.map(tracing::field::display),
    )
}

/// Create span for reading a pool's state and metadata.
///
/// Parent: process_pool span
/// Children: RPC calls issued through the provider
#[inline]
pub(crate) fn load_pool_state(pool_id: B256) -> Span {
    tracing::debug_span!("coinscan.load_pool_state", pool_id = %pool_id)
}
