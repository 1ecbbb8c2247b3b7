// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading a single pool's state.
//!
//! A [`PoolLoadError`] is always isolated to the pool that produced it: the
//! scanner logs it, waits out the failure backoff and moves to the next pool.

use alloy_primitives::{Address, B256};

use super::RpcError;

/// Errors that can occur while loading a pool's live state and metadata.
///
/// # Examples
///
/// ```rust,ignore
/// use coinscan::{PoolLoadError, PoolStateLoader};
///
/// match loader.load(&key).await {
///     Ok(state) => println!("tick {}", state.tick_current),
///     Err(PoolLoadError::Uninitialized { pool_id }) => {
///         eprintln!("pool {pool_id} has no price yet");
///     }
///     Err(e) => eprintln!("load failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PoolLoadError {
    /// Reading slot0 or liquidity for the pool failed.
    #[error("Failed to read state for pool {pool_id}: {source}")]
    State {
        /// Pool identifier
        pool_id: B256,
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },

    /// Fetching ERC-20 metadata for one of the pool's currencies failed.
    #[error("Failed to fetch {field} for token {token}")]
    MetadataFetchFailed {
        /// Token whose metadata could not be read
        token: Address,
        /// ERC-20 getter that failed (`name`, `symbol` or `decimals`)
        field: &'static str,
        /// The underlying contract error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The pool reports a zero square-root price.
    #[error("Pool {pool_id} is not initialized (sqrtPriceX96 is zero)")]
    Uninitialized {
        /// Pool identifier
        pool_id: B256,
    },

    /// Deriving a unit price from the square-root price failed.
    #[error("Failed to derive price: {details}")]
    PriceDerivation {
        /// Details about the failure
        details: String,
    },
}

impl PoolLoadError {
    /// Create a `State` error for a pool.
    pub fn state(pool_id: B256, source: RpcError) -> Self {
        PoolLoadError::State { pool_id, source }
    }

    /// Create a `MetadataFetchFailed` error from any error type.
    pub fn metadata_fetch_failed(
        token: Address,
        field: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PoolLoadError::MetadataFetchFailed {
            token,
            field,
            source: Box::new(source),
        }
    }

    /// Create a `PriceDerivation` error with details.
    pub fn price_derivation(details: impl Into<String>) -> Self {
        PoolLoadError::PriceDerivation {
            details: details.into(),
        }
    }
}
