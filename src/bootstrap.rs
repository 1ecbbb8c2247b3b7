// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wiring for the `coinscan` binary

use tracing::info;

use crate::config::CoinscanConfig;
use crate::errors::CoinscanError;
use crate::pipeline::{JsonLinesSink, PoolScanner, ScanSummary};
use crate::pool::OnchainPoolLoader;
use crate::provider::create_http_provider;

/// Main entry point for the application.
///
/// Loads configuration from the environment and runs a single scan, writing
/// records to stdout.
pub async fn run() -> anyhow::Result<ScanSummary> {
    let config = CoinscanConfig::from_env()?;
    let summary = scan_with_config(config).await?;
    Ok(summary)
}

/// Run one scan with an explicit configuration
///
/// # Errors
///
/// Returns [`CoinscanError`] if the provider cannot be built or the scan fails
/// fatally.
pub async fn scan_with_config(config: CoinscanConfig) -> Result<ScanSummary, CoinscanError> {
    let provider = create_http_provider(config.provider.clone())?;

    info!(
        chain = %config.chain,
        block_range = ?config.block_range,
        rate_limited = config.provider.has_rate_limiting(),
        "Starting coinscan"
    );

    let loader = OnchainPoolLoader::new(
        provider.clone(),
        config.state_view,
        config.native_currency.clone(),
    );
    let mut scanner = PoolScanner::from_config(&config, provider, loader, JsonLinesSink::stdout());

    Ok(scanner.run().await?)
}
