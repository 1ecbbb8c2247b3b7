// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for coinscan integration tests
//!
//! Provides mock implementations of the pipeline's collaborators so a whole
//! run can execute without a blockchain connection.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use alloy_primitives::{
    address,
    aliases::{I24, U160, U24},
    Address, BlockNumber, LogData, B256, U256,
};
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use coinscan::{
    config::constants::{
        base_pairings::{BASE_USDC, BASE_WETH},
        zora_hooks::{CREATOR_COIN_HOOK, V4_COIN_HOOK},
    },
    ChainLogSource, Currency, Initialize, PoolKey, PoolLoadError, PoolMetadata, PoolState,
    PoolStateLoader, RecordSink, RpcError, ScanError, UnitPrice,
};
use tokio::time::Instant;

pub const HOOK_A: Address = CREATOR_COIN_HOOK;
pub const HOOK_B: Address = V4_COIN_HOOK;
pub const UNKNOWN_HOOK: Address = address!("00000000000000000000000000000000000000ff");
pub const USDC: Address = BASE_USDC;
pub const WETH: Address = BASE_WETH;
pub const TOKEN_X: Address = address!("1111111111111111111111111111111111111111");
pub const TOKEN_Y: Address = address!("2222222222222222222222222222222222222222");
pub const TOKEN_Z: Address = address!("3333333333333333333333333333333333333333");

/// Pool key with a 1% fee tier
pub fn pool_key(hooks: Address, currency0: Address, currency1: Address) -> PoolKey {
    PoolKey {
        currency0,
        currency1,
        fee: U24::from(10_000u32),
        tick_spacing: I24::try_from(200i32).unwrap(),
        hooks,
    }
}

/// `Initialize` log for `key` at `block`
pub fn initialize_log(key: &PoolKey, block: BlockNumber) -> Log {
    let event = Initialize {
        id: key.pool_id(),
        currency0: key.currency0,
        currency1: key.currency1,
        fee: key.fee,
        tickSpacing: key.tick_spacing,
        hooks: key.hooks,
        sqrtPriceX96: U160::from(1u64) << 96usize,
        tick: I24::ZERO,
    };
    Log {
        inner: alloy_primitives::Log {
            address: coinscan::config::constants::uniswap_v4::BASE_POOL_MANAGER,
            data: event.encode_log_data(),
        },
        block_number: Some(block),
        ..Default::default()
    }
}

/// A log at `block` that does not decode as `Initialize`
pub fn garbage_log(block: BlockNumber) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: Address::ZERO,
            data: LogData::new_unchecked(vec![Initialize::SIGNATURE_HASH], vec![0xde, 0xad].into()),
        },
        block_number: Some(block),
        ..Default::default()
    }
}

/// In-memory chain: a fixed head and a list of logs filtered by block
pub struct MockLogSource {
    head: BlockNumber,
    logs: Vec<Log>,
    fail_head: bool,
    fail_logs: bool,
    requests: Mutex<Vec<(BlockNumber, BlockNumber)>>,
}

impl MockLogSource {
    pub fn new(logs: Vec<Log>) -> Self {
        Self {
            head: 1_000_000,
            logs,
            fail_head: false,
            fail_logs: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_head(mut self, head: BlockNumber) -> Self {
        self.head = head;
        self
    }

    /// Every `eth_getLogs` call fails
    pub fn failing_logs(mut self) -> Self {
        self.fail_logs = true;
        self
    }

    /// Every head lookup fails
    pub fn failing_head(mut self) -> Self {
        self.fail_head = true;
        self
    }

    /// Block ranges requested so far
    pub fn requests(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainLogSource for MockLogSource {
    async fn latest_block(&self) -> Result<BlockNumber, RpcError> {
        if self.fail_head {
            return Err(RpcError::get_block_number_failed(std::io::Error::other(
                "connection refused",
            )));
        }
        Ok(self.head)
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError> {
        let from = filter.get_from_block().unwrap_or_default();
        let to = filter.get_to_block().unwrap_or(u64::MAX);
        self.requests.lock().unwrap().push((from, to));

        if self.fail_logs {
            return Err(RpcError::get_logs_failed(
                format!("blocks {from}-{to}"),
                std::io::Error::other("rate limited"),
            ));
        }

        Ok(self
            .logs
            .iter()
            .filter(|log| log.block_number.is_some_and(|b| b >= from && b <= to))
            .cloned()
            .collect())
    }
}

/// Loader returning a fixed 18-decimal state, failing for chosen pools
///
/// The zero address loads as WETH, like the on-chain loader's native currency.
pub struct MockPoolLoader {
    failing: HashSet<B256>,
    calls: Mutex<Vec<(PoolKey, Instant)>>,
}

impl MockPoolLoader {
    pub fn new() -> Self {
        Self {
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every load of `key`
    pub fn failing_for(mut self, key: &PoolKey) -> Self {
        self.failing.insert(key.pool_id());
        self
    }

    /// Keys loaded so far, in call order
    pub fn loaded(&self) -> Vec<PoolKey> {
        self.calls.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }

    /// Time of each load call
    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }
}

impl Default for MockPoolLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn mock_currency(address: Address) -> Currency {
    if address.is_zero() {
        return Currency {
            address: WETH,
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        };
    }
    let tag = format!("{address:x}");
    Currency {
        address,
        name: format!("Token {}", &tag[..6]),
        symbol: tag[..4].to_uppercase(),
        decimals: 18,
    }
}

#[async_trait]
impl PoolStateLoader for MockPoolLoader {
    async fn load(&self, key: &PoolKey) -> Result<PoolState, PoolLoadError> {
        self.calls.lock().unwrap().push((*key, Instant::now()));

        let pool_id = key.pool_id();
        if self.failing.contains(&pool_id) {
            return Err(PoolLoadError::state(
                pool_id,
                RpcError::contract_call_failed(
                    Address::ZERO,
                    "getSlot0",
                    std::io::Error::other("timeout"),
                ),
            ));
        }

        // sqrtPriceX96 = 2 * 2^96: one currency0 is worth 4 currency1
        Ok(PoolState {
            pool_id,
            key: *key,
            sqrt_price_x96: U256::from(2u64) << 96usize,
            tick_current: 13_863,
            liquidity: 1_000_000,
            currency0: mock_currency(key.currency0),
            currency1: mock_currency(key.currency1),
            currency0_price: UnitPrice::new(BigDecimal::from(4)),
            currency1_price: UnitPrice::new(BigDecimal::from(1) / BigDecimal::from(4)),
        })
    }
}

/// Sink collecting records in memory
#[derive(Default)]
pub struct CollectingSink {
    pub records: Vec<PoolMetadata>,
}

impl RecordSink for CollectingSink {
    fn emit(&mut self, record: &PoolMetadata) -> Result<(), ScanError> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Sink whose writes always fail
pub struct BrokenSink;

impl RecordSink for BrokenSink {
    fn emit(&mut self, record: &PoolMetadata) -> Result<(), ScanError> {
        Err(ScanError::emit(record.id, "stdout closed"))
    }
}
