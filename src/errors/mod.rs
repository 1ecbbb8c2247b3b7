// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the coinscan library.
//!
//! Errors are split by how the scanner reacts to them:
//!
//! - [`ScanError`] - fatal, ends the run
//! - [`PoolLoadError`] - isolated to one pool, the run continues
//! - [`ConfigError`] - raised before any RPC traffic
//!
//! [`RpcError`] carries provider failures into the other three. The unified
//! [`CoinscanError`] wraps the errors that can end a run, for callers that only
//! need `?`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use coinscan::{CoinscanError, CoinscanConfig};
//!
//! async fn example() -> Result<(), CoinscanError> {
//!     let config = CoinscanConfig::from_env()?;
//!     let summary = coinscan::bootstrap::scan_with_config(config).await?;
//!     println!("emitted {} records", summary.emitted);
//!     Ok(())
//! }
//! ```

mod config;
mod pool;
mod rpc;
mod scan;

pub use config::ConfigError;
pub use pool::PoolLoadError;
pub use rpc::RpcError;
pub use scan::ScanError;

/// Unified error type for all coinscan operations.
///
/// Config, RPC and scan errors convert into `CoinscanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum CoinscanError {
    /// Error while loading configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the RPC layer outside of a scan (e.g. provider construction).
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Fatal error during a scan run.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}
