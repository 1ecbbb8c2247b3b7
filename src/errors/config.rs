// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading run configuration.

/// Errors that can occur while assembling a [`CoinscanConfig`](crate::CoinscanConfig).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was not provided.
    #[error("Missing configuration: {field}")]
    Missing {
        /// Name of the missing setting (usually the environment variable)
        field: String,
    },

    /// A setting was provided but could not be used.
    #[error("Invalid configuration for {field}: {details}")]
    Invalid {
        /// Name of the offending setting
        field: String,
        /// Why the value was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create a `Missing` error for a specific field.
    pub fn missing(field: impl Into<String>) -> Self {
        ConfigError::Missing {
            field: field.into(),
        }
    }

    /// Create an `Invalid` error for a specific field.
    pub fn invalid(field: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            details: details.into(),
        }
    }
}
