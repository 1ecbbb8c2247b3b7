// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for a coinscan run
//!
//! Everything a run needs beyond its collaborators lives in [`CoinscanConfig`]:
//! the RPC endpoint, the contracts to read, the classification tables, the block
//! range and the pacing between pools.
//!
//! # Example: Base defaults
//!
//! ```rust
//! use coinscan::CoinscanConfigBuilder;
//!
//! let config = CoinscanConfigBuilder::with_defaults()
//!     .rpc_url("https://mainnet.base.org")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.max_block_range, 2_000);
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,no_run
//! use coinscan::CoinscanConfig;
//!
//! // Reads RPC_URL, SCAN_BLOCKS, FROM_BLOCK/TO_BLOCK, ... (and `.env` if present)
//! let config = CoinscanConfig::from_env()?;
//! # Ok::<(), coinscan::ConfigError>(())
//! ```

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::{Address, BlockNumber};

use crate::classify::{BasePairings, Classifier, HookRegistry};
use crate::errors::ConfigError;
use crate::pipeline::Pacing;
use crate::pool::NativeCurrency;
use crate::provider::ProviderConfig;

pub mod constants;

use constants::uniswap_v4::{BASE_POOL_MANAGER, BASE_STATE_VIEW};
use constants::{
    DEFAULT_FAILURE_DELAY, DEFAULT_MAX_BLOCK_RANGE, DEFAULT_POOL_DELAY, DEFAULT_TRAILING_BLOCKS,
};

/// Environment variables read by [`CoinscanConfig::from_env`]
pub mod env {
    /// RPC endpoint (required)
    pub const RPC_URL: &str = "RPC_URL";
    /// Trailing window size in blocks
    pub const SCAN_BLOCKS: &str = "SCAN_BLOCKS";
    /// First block of a fixed range (requires `TO_BLOCK`)
    pub const FROM_BLOCK: &str = "FROM_BLOCK";
    /// Last block of a fixed range (requires `FROM_BLOCK`)
    pub const TO_BLOCK: &str = "TO_BLOCK";
    /// Largest span per `eth_getLogs` call
    pub const MAX_BLOCK_RANGE: &str = "MAX_BLOCK_RANGE";
    /// Wait between pools, in milliseconds
    pub const POOL_DELAY_MS: &str = "POOL_DELAY_MS";
    /// Wait after a failed pool, in milliseconds
    pub const FAILURE_DELAY_MS: &str = "FAILURE_DELAY_MS";
    /// RPC requests per second
    pub const RPC_RATE_LIMIT: &str = "RPC_RATE_LIMIT";
}

/// Which blocks a run scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRange {
    /// `[head - blocks, head]`, resolved against the chain head at run time
    Trailing {
        /// Blocks to look back from the head
        blocks: u64,
    },
    /// An explicit inclusive range
    Fixed {
        /// First block
        from: BlockNumber,
        /// Last block
        to: BlockNumber,
    },
}

impl Default for BlockRange {
    fn default() -> Self {
        Self::Trailing {
            blocks: DEFAULT_TRAILING_BLOCKS,
        }
    }
}

/// Configuration for a coinscan run
///
/// Use [`CoinscanConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct CoinscanConfig {
    /// Chain being scanned
    pub chain: NamedChain,
    /// RPC endpoint and transport rate limit
    pub provider: ProviderConfig,
    /// Uniswap v4 PoolManager emitting `Initialize`
    pub pool_manager: Address,
    /// Uniswap v4 StateView lens
    pub state_view: Address,
    /// Hook address to coin type table
    pub hooks: HookRegistry,
    /// Reference tokens deciding app type and subject side
    pub base_pairings: BasePairings,
    /// How the zero-address currency is reported
    pub native_currency: NativeCurrency,
    /// Blocks to scan
    pub block_range: BlockRange,
    /// Largest span per `eth_getLogs` call
    pub max_block_range: u64,
    /// Waits between pools
    pub pacing: Pacing,
}

impl CoinscanConfig {
    /// Classifier over this configuration's tables
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.hooks.clone(), self.base_pairings.clone())
    }

    /// Load Base defaults overridden by environment variables
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `RPC_URL` is missing or any variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Load Base defaults overridden by values from `lookup`
    ///
    /// ```rust
    /// use coinscan::{BlockRange, CoinscanConfig};
    ///
    /// let config = CoinscanConfig::from_lookup(|name| match name {
    ///     "RPC_URL" => Some("http://localhost:8545".to_string()),
    ///     "FROM_BLOCK" => Some("100".to_string()),
    ///     "TO_BLOCK" => Some("200".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.block_range, BlockRange::Fixed { from: 100, to: 200 });
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = CoinscanConfigBuilder::with_defaults();

        if let Some(url) = lookup(env::RPC_URL).filter(|url| !url.trim().is_empty()) {
            builder = builder.rpc_url(url.trim());
        }

        let scan_blocks = parse_var::<u64>(&lookup, env::SCAN_BLOCKS)?;
        let from_block = parse_var::<BlockNumber>(&lookup, env::FROM_BLOCK)?;
        let to_block = parse_var::<BlockNumber>(&lookup, env::TO_BLOCK)?;

        match (from_block, to_block, scan_blocks) {
            (Some(from), Some(to), None) => {
                builder = builder.block_range(BlockRange::Fixed { from, to });
            }
            (Some(_), Some(_), Some(_)) => {
                return Err(ConfigError::invalid(
                    env::SCAN_BLOCKS,
                    "cannot be combined with FROM_BLOCK/TO_BLOCK",
                ));
            }
            (Some(_), None, _) => return Err(ConfigError::missing(env::TO_BLOCK)),
            (None, Some(_), _) => return Err(ConfigError::missing(env::FROM_BLOCK)),
            (None, None, Some(blocks)) => {
                builder = builder.block_range(BlockRange::Trailing { blocks });
            }
            (None, None, None) => {}
        }

        if let Some(max) = parse_var::<u64>(&lookup, env::MAX_BLOCK_RANGE)? {
            builder = builder.max_block_range(max);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, env::POOL_DELAY_MS)? {
            builder = builder.pool_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = parse_var::<u64>(&lookup, env::FAILURE_DELAY_MS)? {
            builder = builder.failure_delay(Duration::from_millis(ms));
        }
        if let Some(rps) = parse_var::<u32>(&lookup, env::RPC_RATE_LIMIT)? {
            if rps == 0 {
                return Err(ConfigError::invalid(
                    env::RPC_RATE_LIMIT,
                    "must be positive",
                ));
            }
            builder = builder.rate_limit(rps);
        }

        builder.build()
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e| ConfigError::invalid(name, format!("{raw:?}: {e}")))
}

/// Builder for [`CoinscanConfig`]
///
/// ```rust
/// use coinscan::{BlockRange, CoinscanConfigBuilder};
/// use std::time::Duration;
///
/// let config = CoinscanConfigBuilder::with_defaults()
///     .rpc_url("http://localhost:8545")
///     .block_range(BlockRange::Fixed { from: 10, to: 20 })
///     .pool_delay(Duration::from_secs(1))
///     .build()
///     .unwrap();
/// assert_eq!(config.pacing.between_pools, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct CoinscanConfigBuilder {
    rpc_url: Option<String>,
    rate_limit: Option<u32>,
    chain: NamedChain,
    pool_manager: Address,
    state_view: Address,
    hooks: HookRegistry,
    base_pairings: BasePairings,
    native_currency: NativeCurrency,
    block_range: BlockRange,
    max_block_range: u64,
    pacing: Pacing,
}

impl Default for CoinscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinscanConfigBuilder {
    /// Start from Base contract addresses with empty classification tables and
    /// no pacing
    pub fn new() -> Self {
        Self {
            rpc_url: None,
            rate_limit: None,
            chain: NamedChain::Base,
            pool_manager: BASE_POOL_MANAGER,
            state_view: BASE_STATE_VIEW,
            hooks: HookRegistry::empty(),
            base_pairings: BasePairings::empty(),
            native_currency: NativeCurrency::default(),
            block_range: BlockRange::default(),
            max_block_range: DEFAULT_MAX_BLOCK_RANGE,
            pacing: Pacing::none(),
        }
    }

    /// Start from the full Base deployment: Zora hooks, USDC/WETH pairings and
    /// the default 10s/15s pacing
    pub fn with_defaults() -> Self {
        Self {
            hooks: HookRegistry::default(),
            base_pairings: BasePairings::default(),
            pacing: Pacing::new(DEFAULT_POOL_DELAY, DEFAULT_FAILURE_DELAY),
            ..Self::new()
        }
    }

    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// RPC requests per second
    pub fn rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit = Some(requests_per_second);
        self
    }

    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn pool_manager(mut self, address: Address) -> Self {
        self.pool_manager = address;
        self
    }

    pub fn state_view(mut self, address: Address) -> Self {
        self.state_view = address;
        self
    }

    pub fn hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn base_pairings(mut self, base_pairings: BasePairings) -> Self {
        self.base_pairings = base_pairings;
        self
    }

    pub fn native_currency(mut self, native: NativeCurrency) -> Self {
        self.native_currency = native;
        self
    }

    pub fn block_range(mut self, block_range: BlockRange) -> Self {
        self.block_range = block_range;
        self
    }

    pub fn max_block_range(mut self, max: u64) -> Self {
        self.max_block_range = max;
        self
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pool_delay(mut self, delay: Duration) -> Self {
        self.pacing.between_pools = delay;
        self
    }

    pub fn failure_delay(mut self, delay: Duration) -> Self {
        self.pacing.after_failure = delay;
        self
    }

    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] when no RPC URL was set
    /// - [`ConfigError::Invalid`] for an inverted fixed range or a zero
    ///   `max_block_range`
    pub fn build(self) -> Result<CoinscanConfig, ConfigError> {
        let url = self
            .rpc_url
            .ok_or_else(|| ConfigError::missing(env::RPC_URL))?;

        if let BlockRange::Fixed { from, to } = self.block_range {
            if from > to {
                return Err(ConfigError::invalid(
                    env::FROM_BLOCK,
                    format!("{from} is after {} {to}", env::TO_BLOCK),
                ));
            }
        }
        if self.max_block_range == 0 {
            return Err(ConfigError::invalid(
                env::MAX_BLOCK_RANGE,
                "must be positive",
            ));
        }

        Ok(CoinscanConfig {
            chain: self.chain,
            provider: ProviderConfig::new(url).with_rate_limit_opt(self.rate_limit),
            pool_manager: self.pool_manager,
            state_view: self.state_view,
            hooks: self.hooks,
            base_pairings: self.base_pairings,
            native_currency: self.native_currency,
            block_range: self.block_range,
            max_block_range: self.max_block_range,
            pacing: self.pacing,
        })
    }
}
