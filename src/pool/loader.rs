// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live pool state loading
//!
//! [`PoolStateLoader`] is the seam between the scan loop and the chain. The
//! production implementation, [`OnchainPoolLoader`], reads slot0 and liquidity
//! through the v4 `StateView` lens, resolves ERC-20 metadata for both
//! currencies and derives unit prices. Any failure along the way is reported as
//! a single [`PoolLoadError`]; no partial state is ever returned.

use alloy_erc20_full::LazyToken;
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::{debug, Instrument};

use super::key::PoolKey;
use super::price::{prices_from_sqrt_price_x96, DISPLAY_SIGNIFICANT_DIGITS};
use super::state::{Currency, NativeCurrency, PoolState};
use crate::errors::{PoolLoadError, RpcError};
use crate::provider::AnyHttpProvider;
use crate::spans;

sol! {
    /// Uniswap v4 StateView lens
    #[sol(rpc)]
    interface IStateView {
        function getSlot0(bytes32 poolId)
            external
            view
            returns (uint160 sqrtPriceX96, int24 tick, uint24 protocolFee, uint24 lpFee);
        function getLiquidity(bytes32 poolId) external view returns (uint128 liquidity);
    }
}

/// Loads the current state of a pool identified by its key
#[async_trait]
pub trait PoolStateLoader: Send + Sync {
    /// Load state, currency metadata and unit prices for `key`
    async fn load(&self, key: &PoolKey) -> Result<PoolState, PoolLoadError>;
}

/// [`PoolStateLoader`] backed by an RPC provider
#[derive(Debug, Clone)]
pub struct OnchainPoolLoader {
    provider: AnyHttpProvider,
    state_view: Address,
    native: NativeCurrency,
}

impl OnchainPoolLoader {
    /// Create a loader reading pool state from the `state_view` lens
    pub fn new(provider: AnyHttpProvider, state_view: Address, native: NativeCurrency) -> Self {
        Self {
            provider,
            state_view,
            native,
        }
    }

    async fn read_slot0(&self, pool_id: B256) -> Result<(U256, i32, u128), PoolLoadError> {
        let lens = IStateView::new(self.state_view, &self.provider);

        let slot0 = lens.getSlot0(pool_id).call().await.map_err(|e| {
            PoolLoadError::state(
                pool_id,
                RpcError::contract_call_failed(self.state_view, "getSlot0", e),
            )
        })?;
        let liquidity = lens.getLiquidity(pool_id).call().await.map_err(|e| {
            PoolLoadError::state(
                pool_id,
                RpcError::contract_call_failed(self.state_view, "getLiquidity", e),
            )
        })?;

        Ok((
            U256::from(slot0.sqrtPriceX96),
            slot0.tick.as_i32(),
            liquidity,
        ))
    }

    async fn currency(&self, address: Address) -> Result<Currency, PoolLoadError> {
        if address.is_zero() {
            return Ok(self.native.currency());
        }

        let token = LazyToken::new(address, self.provider.clone());
        let name = token
            .name()
            .await
            .map_err(|e| PoolLoadError::metadata_fetch_failed(address, "name", e))?
            .to_string();
        let symbol = token
            .symbol()
            .await
            .map_err(|e| PoolLoadError::metadata_fetch_failed(address, "symbol", e))?
            .to_string();
        let decimals = token
            .decimals()
            .await
            .map_err(|e| PoolLoadError::metadata_fetch_failed(address, "decimals", e))?
            .to_owned();

        Ok(Currency {
            address,
            name,
            symbol,
            decimals,
        })
    }

    async fn load_state(&self, key: &PoolKey, pool_id: B256) -> Result<PoolState, PoolLoadError> {
        let (sqrt_price_x96, tick_current, liquidity) = self.read_slot0(pool_id).await?;
        if sqrt_price_x96.is_zero() {
            return Err(PoolLoadError::Uninitialized { pool_id });
        }

        let currency0 = self.currency(key.currency0).await?;
        let currency1 = self.currency(key.currency1).await?;

        let prices =
            prices_from_sqrt_price_x96(sqrt_price_x96, currency0.decimals, currency1.decimals)?;

        debug!(
            %pool_id,
            tick = tick_current,
            liquidity = %liquidity,
            "1 {} = {} {}",
            currency0.symbol,
            prices.currency0_price.to_significant(DISPLAY_SIGNIFICANT_DIGITS),
            currency1.symbol,
        );

        Ok(PoolState {
            pool_id,
            key: *key,
            sqrt_price_x96,
            tick_current,
            liquidity,
            currency0,
            currency1,
            currency0_price: prices.currency0_price,
            currency1_price: prices.currency1_price,
        })
    }
}

#[async_trait]
impl PoolStateLoader for OnchainPoolLoader {
    async fn load(&self, key: &PoolKey) -> Result<PoolState, PoolLoadError> {
        let pool_id = key.pool_id();
        self.load_state(key, pool_id)
            .instrument(spans::load_pool_state(pool_id))
            .await
    }
}
