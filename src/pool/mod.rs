// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Uniswap v4 pools: keys, live state and prices
//!
//! - [`key`] - pool keys decoded from `Initialize` logs
//! - [`loader`] - reading slot0, liquidity and token metadata
//! - [`price`] - unit prices from `sqrtPriceX96`
//! - [`state`] - the loaded snapshot

pub mod key;
pub mod loader;
pub mod price;
pub mod state;

pub use key::{decode_pool_keys, PoolKey};
pub use loader::{OnchainPoolLoader, PoolStateLoader};
pub use price::{prices_from_sqrt_price_x96, to_significant, PoolPrices, UnitPrice};
pub use state::{Currency, NativeCurrency, PoolState};
