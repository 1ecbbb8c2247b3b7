// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! Deployment addresses for the Base network, where Zora coins launch their
//! Uniswap v4 pools. All of these are defaults; every one of them can be
//! replaced through [`CoinscanConfigBuilder`](crate::CoinscanConfigBuilder).

use std::time::Duration;

use alloy_primitives::{address, Address};

/// Uniswap v4 contracts on Base
pub mod uniswap_v4 {
    use super::*;

    /// Singleton PoolManager that emits `Initialize` for every new pool
    ///
    /// Contract: 0x498581fF718922c3f8e6A244956aF099B2652b2b
    pub const BASE_POOL_MANAGER: Address = address!("498581ff718922c3f8e6a244956af099b2652b2b");

    /// StateView lens exposing `getSlot0` and `getLiquidity` by pool id
    ///
    /// Contract: 0xA3c0c9b65baD0b08107Aa264b0f3dB444b867A71
    pub const BASE_STATE_VIEW: Address = address!("a3c0c9b65bad0b08107aa264b0f3db444b867a71");
}

/// Zora coin hook deployments on Base
pub mod zora_hooks {
    use super::*;

    /// Hook attached to creator coin pools
    pub const CREATOR_COIN_HOOK: Address = address!("d61a675f8a0c67a73dc3b54fb7318b4d91409040");

    /// Hook attached to v4 content coin pools
    pub const V4_COIN_HOOK: Address = address!("9ea932730a7787000042e34390b8e435dd839040");
}

/// Base-pairing tokens on Base
pub mod base_pairings {
    use super::*;

    /// Native USDC on Base
    ///
    /// Contract: 0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913
    pub const BASE_USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");

    /// Wrapped ether predeploy on OP-stack chains
    ///
    /// Contract: 0x4200000000000000000000000000000000000006
    pub const BASE_WETH: Address = address!("4200000000000000000000000000000000000006");
}

/// Blocks scanned back from the chain head when no explicit range is given
pub const DEFAULT_TRAILING_BLOCKS: u64 = 1_000;

/// Largest block span requested in a single `eth_getLogs` call
pub const DEFAULT_MAX_BLOCK_RANGE: u64 = 2_000;

/// Wait before each pool after the first
pub const DEFAULT_POOL_DELAY: Duration = Duration::from_secs(10);

/// Extra wait after a pool fails to load
pub const DEFAULT_FAILURE_DELAY: Duration = Duration::from_secs(15);
