// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for Alloy providers.
//!
//! The scan issues a burst of `eth_call`s per pool (slot0, liquidity and up to
//! six metadata reads). Public endpoints reject such bursts, so
//! [`RateLimitLayer`] can be stacked on the RPC client to space them out.
//!
//! ```rust,ignore
//! use coinscan::transport::RateLimitLayer;
//! use alloy_rpc_client::ClientBuilder;
//! use alloy_provider::ProviderBuilder;
//!
//! let client = ClientBuilder::default()
//!     .layer(RateLimitLayer::per_second(10))
//!     .http(rpc_url);
//!
//! let provider = ProviderBuilder::new()
//!     .disable_recommended_fillers()
//!     .network::<AnyNetwork>()
//!     .connect_client(client);
//! ```

mod rate_limit;

pub use rate_limit::{RateLimitLayer, RateLimitService};
