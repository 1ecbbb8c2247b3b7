// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pool keys and the `Initialize` log decoder

use alloy_primitives::{
    aliases::{I24, U24},
    keccak256, Address, B256,
};
use alloy_rpc_types::Log;
use alloy_sol_types::{sol, SolEvent, SolValue};
use tracing::warn;

use crate::events::Initialize;

sol! {
    /// ABI layout of a v4 pool key, hashed to produce the pool id
    struct PoolKeyAbi {
        address currency0;
        address currency1;
        uint24 fee;
        int24 tickSpacing;
        address hooks;
    }
}

/// Identifies a Uniswap v4 pool
///
/// Currencies arrive sorted (`currency0 < currency1`) from the PoolManager and
/// are not re-checked here. The zero address denotes the native currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolKey {
    /// Lower-sorted currency
    pub currency0: Address,
    /// Higher-sorted currency
    pub currency1: Address,
    /// LP fee in hundredths of a bip
    pub fee: U24,
    /// Tick spacing
    pub tick_spacing: I24,
    /// Hook contract, zero when the pool has none
    pub hooks: Address,
}

impl PoolKey {
    /// Copy the key fields out of a decoded `Initialize` event
    pub fn from_initialize(event: &Initialize) -> Self {
        Self {
            currency0: event.currency0,
            currency1: event.currency1,
            fee: event.fee,
            tick_spacing: event.tickSpacing,
            hooks: event.hooks,
        }
    }

    /// Pool id: `keccak256(abi.encode(key))`, as computed by the PoolManager
    pub fn pool_id(&self) -> B256 {
        let abi = PoolKeyAbi {
            currency0: self.currency0,
            currency1: self.currency1,
            fee: self.fee,
            tickSpacing: self.tick_spacing,
            hooks: self.hooks,
        };
        keccak256(abi.abi_encode())
    }
}

/// Decode `Initialize` logs into pool keys, one entry per log, in log order
///
/// A log that does not decode as `Initialize` yields `None` at its index, so the
/// output always has the same length as the input.
pub fn decode_pool_keys(logs: &[Log]) -> Vec<Option<PoolKey>> {
    logs.iter()
        .enumerate()
        .map(|(index, log)| match Initialize::decode_log(&log.inner) {
            Ok(event) => Some(PoolKey::from_initialize(&event.data)),
            Err(e) => {
                warn!(
                    index,
                    tx_hash = ?log.transaction_hash,
                    error = %e,
                    "Failed to decode Initialize log"
                );
                None
            }
        })
        .collect()
}
