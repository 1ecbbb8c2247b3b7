// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event scanner with block range chunking
//!
//! Providers cap the span of a single `eth_getLogs` request, so long ranges are
//! split into chunks of at most `max_block_range` blocks. The scan is
//! all-or-nothing: if any chunk fails, the whole scan fails and no partial log
//! set is returned, because a pool reconciliation over a range with holes would
//! silently under-report.
//!
//! # Examples
//!
//! ```rust,ignore
//! use coinscan::events::scanner::EventScanner;
//!
//! let scanner = EventScanner::new(provider, 1_000);
//! let logs = scanner
//!     .scan_initialize(pool_manager, 32_964_917, 32_965_917)
//!     .await?;
//! println!("Found {} pools", logs.len());
//! ```

use alloy_primitives::{Address, BlockNumber};
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use tracing::{debug, error, info};

use super::definitions::Initialize;
use super::source::ChainLogSource;
use crate::errors::RpcError;

/// Fetches logs over a block range, chunked by a maximum span
pub struct EventScanner<S> {
    source: S,
    max_block_range: u64,
}

impl<S: ChainLogSource> EventScanner<S> {
    /// Create a new event scanner
    ///
    /// A `max_block_range` of zero is treated as one block per request.
    pub fn new(source: S, max_block_range: u64) -> Self {
        Self {
            source,
            max_block_range: max_block_range.max(1),
        }
    }

    /// The underlying log source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current head block number from the underlying source
    pub async fn latest_block(&self) -> Result<BlockNumber, RpcError> {
        self.source.latest_block().await
    }

    /// Fetch every `Initialize` log emitted by `pool_manager` in `[start_block, end_block]`
    pub async fn scan_initialize(
        &self,
        pool_manager: Address,
        start_block: BlockNumber,
        end_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError> {
        let filter = Filter::new()
            .address(pool_manager)
            .event_signature(Initialize::SIGNATURE_HASH);

        self.scan(filter, start_block, end_block).await
    }

    /// Fetch all logs matching `filter_template` in `[start_block, end_block]`
    ///
    /// Logs are returned in chain order. The first failing chunk aborts the scan.
    pub async fn scan(
        &self,
        filter_template: Filter,
        start_block: BlockNumber,
        end_block: BlockNumber,
    ) -> Result<Vec<Log>, RpcError> {
        info!(start_block, end_block, "Starting event scan");

        let mut all_logs = Vec::new();
        let mut current_block = start_block;

        while current_block <= end_block {
            let to_block = current_block
                .saturating_add(self.max_block_range)
                .saturating_sub(1)
                .min(end_block);

            let filter = filter_template
                .clone()
                .from_block(current_block)
                .to_block(to_block);

            debug!(current_block, to_block, "Fetching logs for chunk");

            let logs = self.source.logs(&filter).await.inspect_err(|e| {
                error!(?e, %current_block, %to_block, "Error fetching logs in range");
            })?;

            debug!(
                logs_count = logs.len(),
                current_block, to_block, "Fetched logs for block range"
            );
            all_logs.extend(logs);

            if to_block == BlockNumber::MAX {
                break;
            }
            current_block = to_block + 1;
        }

        info!(total_logs = all_logs.len(), "Finished event scan");

        Ok(all_logs)
    }
}
