// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for blockchain provider operations.
//!
//! Every collaborator that talks to the chain (log scanning, pool state reads,
//! token metadata lookups) reports provider failures through [`RpcError`], so the
//! pipeline can decide per call site whether a failure is fatal or isolated.

/// Errors that can occur during blockchain RPC operations.
///
/// # Examples
///
/// ```rust
/// use coinscan::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("not a url".to_string());
/// assert!(error.to_string().contains("not a url"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to fetch logs from the blockchain.
    ///
    /// This can occur due to rate limiting, a block range the provider refuses,
    /// network connectivity issues, or provider-side errors.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the operation that failed (e.g., "Initialize events 100-200")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch the current block number.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A read-only contract call (`eth_call`) failed.
    #[error("Contract call {method} on {contract} failed")]
    ContractCallFailed {
        /// Contract the call was sent to
        contract: String,
        /// Solidity method name
        method: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured RPC endpoint could not be parsed as a URL.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `ContractCallFailed` error from any error type.
    pub fn contract_call_failed(
        contract: impl std::fmt::Display,
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ContractCallFailed {
            contract: contract.to_string(),
            method: method.into(),
            source: Box::new(source),
        }
    }
}
