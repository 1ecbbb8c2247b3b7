// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Uniswap v4 PoolManager event definitions
//!
//! The PoolManager is a singleton: every pool lives inside it and is created
//! by a call to `initialize`, which emits [`Initialize`]. The event carries the
//! full pool key, so scanning it is enough to enumerate every pool created in a
//! block range.
//!
//! # Event Signature
//!
//! - **Initialize**: `Initialize(bytes32,address,address,uint24,int24,address,uint160,int24)`
//!
//! # Example: Filtering and decoding
//!
//! ```rust,ignore
//! use coinscan::Initialize;
//! use alloy_rpc_types::Filter;
//! use alloy_sol_types::SolEvent;
//!
//! let filter = Filter::new()
//!     .address(pool_manager)
//!     .event_signature(Initialize::SIGNATURE_HASH);
//!
//! for log in provider.get_logs(&filter).await? {
//!     let event = Initialize::decode_log(&log.inner)?;
//!     println!("pool {} hooks {}", event.id, event.hooks);
//! }
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// Uniswap v4 pool initialization
    ///
    /// # Fields
    ///
    /// - `id`: keccak256 of the abi-encoded pool key (indexed)
    /// - `currency0`: lower-sorted currency, zero for native ether (indexed)
    /// - `currency1`: higher-sorted currency (indexed)
    /// - `fee`: LP fee in hundredths of a bip
    /// - `tickSpacing`: minimum distance between initialized ticks
    /// - `hooks`: hook contract, zero when the pool has none
    /// - `sqrtPriceX96`: starting price as a Q64.96 square root
    /// - `tick`: starting tick
    event Initialize(
        bytes32 indexed id,
        address indexed currency0,
        address indexed currency1,
        uint24 fee,
        int24 tickSpacing,
        address hooks,
        uint160 sqrtPriceX96,
        int24 tick
    );
}

impl Debug for Initialize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Initialize(id: {}, currency0: {}, currency1: {}, fee: {}, tickSpacing: {}, hooks: {})",
            self.id, self.currency0, self.currency1, self.fee, self.tickSpacing, self.hooks
        )
    }
}
