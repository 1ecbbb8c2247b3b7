// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fatal errors for a scan run.
//!
//! Anything surfacing as a [`ScanError`] aborts the run: no further pools are
//! processed and the binary exits with a non-zero status.

use super::RpcError;

/// Errors that terminate a scan run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The chain head could not be determined, so no block range can be resolved.
    #[error("Failed to resolve block range: {0}")]
    LatestBlock(#[source] RpcError),

    /// Fetching the pool creation logs failed.
    #[error("Failed to fetch pool creation logs: {0}")]
    LogFetch(#[source] RpcError),

    /// The requested block range is empty or inverted.
    #[error("Invalid block range {from}..={to}")]
    InvalidRange {
        /// First block (inclusive)
        from: u64,
        /// Last block (inclusive)
        to: u64,
    },

    /// A record could not be written to the output sink.
    #[error("Failed to emit record for pool {pool_id}: {details}")]
    Emit {
        /// Pool the record belonged to
        pool_id: String,
        /// Details about the failure
        details: String,
    },
}

impl ScanError {
    /// Create an `Emit` error for a pool.
    pub fn emit(pool_id: impl std::fmt::Display, details: impl Into<String>) -> Self {
        ScanError::Emit {
            pool_id: pool_id.to_string(),
            details: details.into(),
        }
    }
}
