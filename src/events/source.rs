// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain log source abstraction
//!
//! The scanner only needs two things from the chain: the current head and the
//! logs matching a filter. [`ChainLogSource`] captures exactly that, so the
//! pipeline can run against a real provider or an in-memory mock.

use alloy_network::AnyNetwork;
use alloy_primitives::BlockNumber;
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;

use crate::errors::RpcError;

/// Read-only access to chain logs
#[async_trait]
pub trait ChainLogSource: Send + Sync {
    /// Current head block number
    async fn latest_block(&self) -> Result<BlockNumber, RpcError>;

    /// Logs matching `filter`, in chain order
    ///
    /// The filter always carries an explicit block range.
    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError>;
}

#[async_trait]
impl ChainLogSource for RootProvider<AnyNetwork> {
    async fn latest_block(&self) -> Result<BlockNumber, RpcError> {
        self.get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError> {
        self.get_logs(filter).await.map_err(|e| {
            let operation = format!(
                "blocks {:?}-{:?}",
                filter.get_from_block(),
                filter.get_to_block()
            );
            RpcError::get_logs_failed(operation, e)
        })
    }
}
