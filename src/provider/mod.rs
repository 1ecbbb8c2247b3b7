// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP provider construction
//!
//! Every RPC consumer in the crate (log scanning, the StateView lens, token
//! metadata) shares one [`AnyHttpProvider`]. `AnyNetwork` keeps the scanner
//! usable on any EVM chain where the Zora hooks are deployed without pulling in
//! network-specific receipt types it never reads.
//!
//! ```rust,ignore
//! use coinscan::provider::{create_http_provider, ProviderConfig};
//!
//! let provider = create_http_provider(
//!     ProviderConfig::new("https://mainnet.base.org").with_rate_limit(5),
//! )?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::create_http_provider;

use alloy_network::AnyNetwork;

/// HTTP provider over `AnyNetwork`
pub type AnyHttpProvider = alloy_provider::RootProvider<AnyNetwork>;
