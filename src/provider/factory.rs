// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory

use alloy_network::AnyNetwork;
use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;
use tracing::debug;

use crate::errors::RpcError;

use super::config::ProviderConfig;
use super::AnyHttpProvider;

/// Create an HTTP provider with the given configuration
///
/// Recommended fillers are disabled: the scanner only reads, so a bare
/// `RootProvider` is all it needs. When the configuration carries a rate
/// limit, the RPC client is wrapped in [`RateLimitLayer`](crate::transport::RateLimitLayer).
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<AnyHttpProvider, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url)))?;

    let builder = ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>();

    match config.rate_limit_layer() {
        Some(layer) => {
            debug!(interval = ?layer.interval(), "Rate limiting RPC requests");
            let client = ClientBuilder::default().layer(layer).http(url);
            Ok(builder.connect_client(client))
        }
        None => Ok(builder.connect_http(url)),
    }
}
