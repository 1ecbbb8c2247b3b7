// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loaded pool state and currency metadata

use alloy_primitives::{Address, B256, U256};

use super::key::PoolKey;
use super::price::UnitPrice;
use crate::config::constants::base_pairings::BASE_WETH;

/// ERC-20 style metadata for one side of a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// Token address; for the native currency this is the wrapped token
    pub address: Address,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
}

/// How the chain's native currency (the zero address in a pool key) is described
///
/// Records report the wrapped token's address as the canonical address, so
/// downstream consumers never see the zero address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    /// Wrapped native token, used as the canonical address
    pub wrapped: Address,
    /// Display name
    pub name: String,
    /// Display symbol
    pub symbol: String,
    /// Decimals of the native currency
    pub decimals: u8,
}

impl NativeCurrency {
    /// Metadata for the native currency as a [`Currency`]
    pub fn currency(&self) -> Currency {
        Currency {
            address: self.wrapped,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
        }
    }
}

impl Default for NativeCurrency {
    /// Ether on Base, canonicalized to WETH
    fn default() -> Self {
        Self {
            wrapped: BASE_WETH,
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

/// Snapshot of a pool's live state plus both currencies' metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    /// Pool id, `keccak256(abi.encode(key))`
    pub pool_id: B256,
    /// Key the state was loaded for
    pub key: PoolKey,
    /// Current Q64.96 square-root price
    pub sqrt_price_x96: U256,
    /// Current tick
    pub tick_current: i32,
    /// In-range liquidity
    pub liquidity: u128,
    /// Metadata of currency0
    pub currency0: Currency,
    /// Metadata of currency1
    pub currency1: Currency,
    /// One currency0 in currency1
    pub currency0_price: UnitPrice,
    /// One currency1 in currency0
    pub currency1_price: UnitPrice,
}
