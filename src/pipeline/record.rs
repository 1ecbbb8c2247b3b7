// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Output record assembly

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::classify::{AppType, Classification, CoinType, Side};
use crate::pool::price::DISPLAY_SIGNIFICANT_DIGITS;
use crate::pool::PoolState;

/// One emitted record per qualifying pool
///
/// Identity fields (`name`, `symbol`, `decimals`, `address`) describe the
/// subject currency; `price` is one subject unit in the other currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMetadata {
    /// Pool id
    pub id: B256,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Canonical address of the subject currency
    pub address: Address,
    pub tick: i32,
    /// Decimal string of the Q64.96 square-root price
    pub sqrt_price_x96: String,
    /// Six significant digits, plain notation
    pub price: String,
    pub coin_type: CoinType,
    pub app_type: AppType,
}

impl PoolMetadata {
    /// Assemble the record for a loaded, classified pool
    pub fn from_state(state: &PoolState, classification: &Classification) -> Self {
        let (subject, price) = match classification.subject {
            Side::Currency0 => (&state.currency0, &state.currency0_price),
            Side::Currency1 => (&state.currency1, &state.currency1_price),
        };

        Self {
            id: state.pool_id,
            name: subject.name.clone(),
            symbol: subject.symbol.clone(),
            decimals: subject.decimals,
            address: subject.address,
            tick: state.tick_current,
            sqrt_price_x96: state.sqrt_price_x96.to_string(),
            price: price.to_significant(DISPLAY_SIGNIFICANT_DIGITS),
            coin_type: classification.coin_type,
            app_type: classification.app_type,
        }
    }
}
