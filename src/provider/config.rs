// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

use std::time::Duration;

use crate::transport::RateLimitLayer;

/// Configuration for creating providers
///
/// # Example
///
/// ```rust
/// use coinscan::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("https://mainnet.base.org").with_rate_limit(10);
/// assert!(config.has_rate_limiting());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Rate limit in requests per second (None for unlimited)
    pub rate_limit_per_second: Option<u32>,
    /// Minimum delay between requests (alternative to rate limiting)
    pub min_delay: Option<Duration>,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            rate_limit_per_second: None,
            min_delay: None,
        }
    }

    /// Set rate limiting (requests per second)
    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.rate_limit_per_second = Some(requests_per_second);
        self
    }

    /// Set rate limiting from an optional value
    #[must_use]
    pub fn with_rate_limit_opt(mut self, requests_per_second: Option<u32>) -> Self {
        self.rate_limit_per_second = requests_per_second;
        self
    }

    /// Set minimum delay between requests
    #[must_use]
    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = Some(delay);
        self
    }

    /// Check if this configuration includes rate limiting
    #[must_use]
    pub fn has_rate_limiting(&self) -> bool {
        self.rate_limit_per_second.is_some() || self.min_delay.is_some()
    }

    /// The transport layer implied by this configuration
    ///
    /// A requests-per-second limit takes precedence over a minimum delay.
    pub(crate) fn rate_limit_layer(&self) -> Option<RateLimitLayer> {
        match (self.rate_limit_per_second, self.min_delay) {
            (Some(rps), _) => Some(RateLimitLayer::per_second(rps)),
            (None, Some(delay)) => Some(RateLimitLayer::with_min_delay(delay)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_new() {
        let config = ProviderConfig::new("https://mainnet.base.org");
        assert_eq!(config.url, "https://mainnet.base.org");
        assert!(!config.has_rate_limiting());
        assert!(config.rate_limit_layer().is_none());
    }

    #[test]
    fn test_rate_limit_preferred_over_min_delay() {
        let config = ProviderConfig::new("https://mainnet.base.org")
            .with_min_delay(Duration::from_secs(2))
            .with_rate_limit(10);

        let layer = config.rate_limit_layer().unwrap();
        assert_eq!(layer.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_min_delay_layer() {
        let config = ProviderConfig::new("https://mainnet.base.org")
            .with_min_delay(Duration::from_millis(50));
        assert_eq!(
            config.rate_limit_layer().unwrap().interval(),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_rate_limit_opt_none_clears() {
        let config = ProviderConfig::new("https://mainnet.base.org")
            .with_rate_limit(3)
            .with_rate_limit_opt(None);
        assert!(config.rate_limit_per_second.is_none());
    }
}
