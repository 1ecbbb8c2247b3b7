// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # coinscan
//!
//! Batch reconciliation of Zora coin pools on Uniswap v4.
//!
//! A run scans the v4 PoolManager's `Initialize` logs over a block range, keeps
//! the pools whose hook is a registered Zora coin hook, reads each pool's live
//! price and token metadata and writes one [`PoolMetadata`] record per pool as
//! a JSON line.
//!
//! ## Pipeline
//!
//! ```text
//! ChainLogSource -> EventScanner -> decode_pool_keys -> for each key:
//!     Classifier (hook) -> PoolStateLoader -> Classifier (pair) -> RecordSink
//! ```
//!
//! Pools are processed one at a time with a pause between them (10s by
//! default) and a longer pause after a pool fails to load (15s). A single pool
//! failing never stops the run; failing to fetch the logs does.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use coinscan::{bootstrap, CoinscanConfigBuilder, BlockRange};
//!
//! let config = CoinscanConfigBuilder::with_defaults()
//!     .rpc_url("https://mainnet.base.org")
//!     .block_range(BlockRange::Trailing { blocks: 1_000 })
//!     .build()?;
//!
//! let summary = bootstrap::scan_with_config(config).await?;
//! println!("{} records", summary.emitted);
//! ```
//!
//! ## Testing against mocks
//!
//! The pipeline is generic over its three collaborators, [`ChainLogSource`],
//! [`PoolStateLoader`] and [`RecordSink`], so a run can be driven entirely in
//! memory. Pass [`Pacing::none()`] to skip the waits.

pub mod bootstrap;
pub mod classify;
pub mod config;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod pool;
pub mod provider;
mod spans;
pub mod transport;

pub use classify::{
    AppType, BasePairings, Classification, Classifier, CoinType, HookRegistry, Side,
};
pub use config::{BlockRange, CoinscanConfig, CoinscanConfigBuilder};
pub use errors::{CoinscanError, ConfigError, PoolLoadError, RpcError, ScanError};
pub use events::{ChainLogSource, EventScanner, Initialize};
pub use pipeline::{
    JsonLinesSink, Pacing, PoolMetadata, PoolOutcome, PoolScanner, RecordSink, ScanSummary,
};
pub use pool::{
    decode_pool_keys, Currency, NativeCurrency, OnchainPoolLoader, PoolKey, PoolState,
    PoolStateLoader, UnitPrice,
};
pub use provider::{create_http_provider, AnyHttpProvider, ProviderConfig};
