// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The scan loop
//!
//! A run moves through three phases:
//!
//! 1. fetch every `Initialize` log in the resolved block range (fatal on failure)
//! 2. decode each log into an optional [`PoolKey`], keeping log order
//! 3. walk the keys one at a time: classify by hook, load state, emit a record
//!
//! Pools are processed strictly in sequence. Before every pool after the first
//! the loop waits [`Pacing::between_pools`]; after a pool fails to load it also
//! waits [`Pacing::after_failure`]. A pool failure never ends the run. Only the
//! log fetch, the head lookup and the sink can do that.
//!
//! ```rust,ignore
//! use coinscan::pipeline::{JsonLinesSink, PoolScanner};
//!
//! let summary = PoolScanner::new(scanner, loader, JsonLinesSink::stdout())
//!     .with_block_range(BlockRange::Trailing { blocks: 1_000 })
//!     .run()
//!     .await?;
//! println!("{} of {} pools emitted", summary.emitted, summary.keys);
//! ```

mod pacing;
mod record;
mod sink;

pub use pacing::Pacing;
pub use record::PoolMetadata;
pub use sink::{JsonLinesSink, RecordSink};

use alloy_chains::NamedChain;
use alloy_primitives::{Address, BlockNumber};
use tracing::{debug, error, info, warn, Instrument};

use crate::classify::Classifier;
use crate::config::constants::uniswap_v4::BASE_POOL_MANAGER;
use crate::config::{BlockRange, CoinscanConfig};
use crate::errors::ScanError;
use crate::events::{ChainLogSource, EventScanner};
use crate::pool::{decode_pool_keys, PoolKey, PoolStateLoader};
use crate::spans;

/// How a single pool iteration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOutcome {
    /// A record was written to the sink
    Emitted,
    /// The log did not decode or the hook is not a Zora coin hook
    Skipped,
    /// Loading the pool's state failed
    Failed,
}

/// Counts for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Logs fetched, one key slot per log
    pub keys: usize,
    /// Records emitted
    pub emitted: usize,
    /// Absent keys plus classifier rejections
    pub skipped: usize,
    /// Pools whose state could not be loaded
    pub failed: usize,
}

impl ScanSummary {
    fn record(&mut self, outcome: PoolOutcome) {
        match outcome {
            PoolOutcome::Emitted => self.emitted += 1,
            PoolOutcome::Skipped => self.skipped += 1,
            PoolOutcome::Failed => self.failed += 1,
        }
    }
}

/// Sequential scan, classify and emit pipeline
pub struct PoolScanner<S, L, K> {
    scanner: EventScanner<S>,
    loader: L,
    sink: K,
    classifier: Classifier,
    chain: NamedChain,
    pool_manager: Address,
    block_range: BlockRange,
    pacing: Pacing,
}

impl<S, L, K> PoolScanner<S, L, K>
where
    S: ChainLogSource,
    L: PoolStateLoader,
    K: RecordSink,
{
    /// Create a pipeline with Base defaults for everything but its collaborators
    pub fn new(scanner: EventScanner<S>, loader: L, sink: K) -> Self {
        Self {
            scanner,
            loader,
            sink,
            classifier: Classifier::default(),
            chain: NamedChain::Base,
            pool_manager: BASE_POOL_MANAGER,
            block_range: BlockRange::default(),
            pacing: Pacing::default(),
        }
    }

    /// Create a pipeline from a loaded configuration
    pub fn from_config(config: &CoinscanConfig, source: S, loader: L, sink: K) -> Self {
        Self::new(
            EventScanner::new(source, config.max_block_range),
            loader,
            sink,
        )
        .with_chain(config.chain)
        .with_classifier(config.classifier())
        .with_pool_manager(config.pool_manager)
        .with_block_range(config.block_range)
        .with_pacing(config.pacing)
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Chain reported in the run span
    #[must_use]
    pub fn with_chain(mut self, chain: NamedChain) -> Self {
        self.chain = chain;
        self
    }

    #[must_use]
    pub fn with_pool_manager(mut self, pool_manager: Address) -> Self {
        self.pool_manager = pool_manager;
        self
    }

    #[must_use]
    pub fn with_block_range(mut self, block_range: BlockRange) -> Self {
        self.block_range = block_range;
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// The log scanner
    pub fn scanner(&self) -> &EventScanner<S> {
        &self.scanner
    }

    /// The record sink
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Execute one run over the configured block range
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] when the block range cannot be resolved, the log
    /// fetch fails or a record cannot be emitted. Pool load failures are logged
    /// and counted in the summary instead.
    pub async fn run(&mut self) -> Result<ScanSummary, ScanError> {
        let (from_block, to_block) = self.resolve_range().await?;
        let span = spans::scan_pools(self.chain, from_block, to_block);
        self.scan_range(from_block, to_block).instrument(span).await
    }

    async fn resolve_range(&self) -> Result<(BlockNumber, BlockNumber), ScanError> {
        match self.block_range {
            BlockRange::Fixed { from, to } => {
                if from > to {
                    return Err(ScanError::InvalidRange { from, to });
                }
                Ok((from, to))
            }
            BlockRange::Trailing { blocks } => {
                let latest = self
                    .scanner
                    .latest_block()
                    .await
                    .map_err(ScanError::LatestBlock)?;
                Ok((latest.saturating_sub(blocks), latest))
            }
        }
    }

    async fn scan_range(
        &mut self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<ScanSummary, ScanError> {
        info!(
            from_block,
            to_block,
            pool_manager = %self.pool_manager,
            "Scanning for pool creations"
        );

        let logs = self
            .scanner
            .scan_initialize(self.pool_manager, from_block, to_block)
            .await
            .map_err(ScanError::LogFetch)?;

        let keys = decode_pool_keys(&logs);
        let total = keys.len();
        info!(total, "Processing pools");

        let mut summary = ScanSummary {
            keys: total,
            ..ScanSummary::default()
        };

        for (index, key) in keys.iter().enumerate() {
            self.pacing.before_pool(index).await;

            let span = spans::process_pool(index, key.as_ref().map(PoolKey::pool_id));
            let outcome = self
                .process_pool(index, total, key.as_ref())
                .instrument(span)
                .await?;
            summary.record(outcome);

            if outcome == PoolOutcome::Failed {
                self.pacing.backoff().await;
            }
        }

        info!(
            total = summary.keys,
            emitted = summary.emitted,
            skipped = summary.skipped,
            failed = summary.failed,
            "Scan complete"
        );

        Ok(summary)
    }

    async fn process_pool(
        &mut self,
        index: usize,
        total: usize,
        key: Option<&PoolKey>,
    ) -> Result<PoolOutcome, ScanError> {
        let Some(key) = key else {
            warn!(index, total, "Skipping log without a pool key");
            return Ok(PoolOutcome::Skipped);
        };
        let pool_id = key.pool_id();

        if self.classifier.coin_type(key.hooks).is_none() {
            debug!(index, total, %pool_id, hooks = %key.hooks, "Skipping pool without a Zora hook");
            return Ok(PoolOutcome::Skipped);
        }

        let state = match self.loader.load(key).await {
            Ok(state) => state,
            Err(e) => {
                error!(index, total, %pool_id, error = %e, "Failed to load pool");
                return Ok(PoolOutcome::Failed);
            }
        };

        // Classify again on canonical addresses: the native currency loads as its wrapped token
        let (currency0, currency1) = (state.currency0.address, state.currency1.address);
        let Some(classification) = self.classifier.classify(key.hooks, currency0, currency1) else {
            return Ok(PoolOutcome::Skipped);
        };

        let record = PoolMetadata::from_state(&state, &classification);
        self.sink.emit(&record)?;

        info!(
            index,
            total,
            %pool_id,
            symbol = %record.symbol,
            coin_type = %record.coin_type,
            app_type = %record.app_type,
            price = %record.price,
            "Emitted pool record"
        );

        Ok(PoolOutcome::Emitted)
    }
}
