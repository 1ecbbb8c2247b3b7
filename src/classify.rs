// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pool classification
//!
//! Decides whether a pool belongs to the Zora coin protocol, which app surfaced
//! it, and which side of the pair is the coin being tracked. Everything here is
//! a pure lookup over static configuration: no I/O, no clock, no state.
//!
//! # Rules
//!
//! - The pool's hook address must exactly match a [`HookRegistry`] entry,
//!   otherwise the pool is not a Zora coin and is skipped.
//! - [`AppType::Tba`] when either currency is a base-pairing token (USDC, WETH),
//!   [`AppType::Zora`] otherwise.
//! - The subject is the currency that is not a base-pairing token. Whenever
//!   currency0 is a base token the subject is currency1, even if currency1 is
//!   one too; otherwise currency0 is the subject.
//!
//! # Example
//!
//! ```rust
//! use coinscan::{AppType, Classifier, CoinType, Side};
//! use coinscan::config::constants::{base_pairings::BASE_USDC, zora_hooks::CREATOR_COIN_HOOK};
//! use alloy_primitives::address;
//!
//! let classifier = Classifier::default();
//! let coin = address!("1111111111111111111111111111111111111111");
//!
//! let result = classifier.classify(CREATOR_COIN_HOOK, BASE_USDC, coin).unwrap();
//! assert_eq!(result.coin_type, CoinType::ZoraCreatorCoin);
//! assert_eq!(result.app_type, AppType::Tba);
//! assert_eq!(result.subject, Side::Currency1);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::config::constants::{base_pairings, zora_hooks};

/// Which variant of the Zora protocol deployed a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoinType {
    /// Creator coin, one per Zora profile
    ZoraCreatorCoin,
    /// Content coin launched through the v4 hook
    ZoraV4Coin,
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinType::ZoraCreatorCoin => write!(f, "ZORA_CREATOR_COIN"),
            CoinType::ZoraV4Coin => write!(f, "ZORA_V4_COIN"),
        }
    }
}

/// Application that surfaces the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppType {
    /// Paired against a base token (USDC, WETH)
    Tba,
    /// Paired inside the Zora ecosystem
    Zora,
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppType::Tba => write!(f, "TBA"),
            AppType::Zora => write!(f, "ZORA"),
        }
    }
}

/// One side of a pool's currency pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The lower-sorted currency
    Currency0,
    /// The higher-sorted currency
    Currency1,
}

/// Static mapping from hook contract to coin type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRegistry {
    hooks: HashMap<Address, CoinType>,
}

impl HookRegistry {
    /// Empty registry; every pool is rejected until hooks are registered
    pub fn empty() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register a hook address. A later registration of the same address replaces
    /// the earlier one, so each hook maps to exactly one coin type.
    pub fn with_hook(mut self, hook: Address, coin_type: CoinType) -> Self {
        self.hooks.insert(hook, coin_type);
        self
    }

    /// Coin type for a hook, if registered
    pub fn coin_type(&self, hook: Address) -> Option<CoinType> {
        self.hooks.get(&hook).copied()
    }

    /// Number of registered hooks
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Default for HookRegistry {
    /// The Base deployment: creator coin hook and v4 coin hook
    fn default() -> Self {
        Self::empty()
            .with_hook(zora_hooks::CREATOR_COIN_HOOK, CoinType::ZoraCreatorCoin)
            .with_hook(zora_hooks::V4_COIN_HOOK, CoinType::ZoraV4Coin)
    }
}

/// Set of reference tokens that mark the non-subject side of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePairings {
    tokens: HashSet<Address>,
}

impl BasePairings {
    /// Empty set; every pool classifies as [`AppType::Zora`]
    pub fn empty() -> Self {
        Self {
            tokens: HashSet::new(),
        }
    }

    /// Add a base-pairing token
    pub fn with_token(mut self, token: Address) -> Self {
        self.tokens.insert(token);
        self
    }

    /// Whether `token` is a base-pairing token
    pub fn contains(&self, token: Address) -> bool {
        self.tokens.contains(&token)
    }
}

impl Default for BasePairings {
    /// USDC and WETH on Base
    fn default() -> Self {
        Self::empty()
            .with_token(base_pairings::BASE_USDC)
            .with_token(base_pairings::BASE_WETH)
    }
}

/// Outcome of classifying a Zora pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Protocol variant, taken from the hook
    pub coin_type: CoinType,
    /// Which app surfaces the pool
    pub app_type: AppType,
    /// The side reported in the output record
    pub subject: Side,
}

/// Pure classifier over a hook registry and a base-pairing set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    hooks: HookRegistry,
    base_pairings: BasePairings,
}

impl Classifier {
    /// Create a classifier from explicit tables
    pub fn new(hooks: HookRegistry, base_pairings: BasePairings) -> Self {
        Self {
            hooks,
            base_pairings,
        }
    }

    /// Coin type for a pool's hook, `None` when the pool is not a Zora coin
    pub fn coin_type(&self, hooks: Address) -> Option<CoinType> {
        self.hooks.coin_type(hooks)
    }

    /// App type for a currency pair (canonical addresses)
    pub fn app_type(&self, currency0: Address, currency1: Address) -> AppType {
        if self.base_pairings.contains(currency0) || self.base_pairings.contains(currency1) {
            AppType::Tba
        } else {
            AppType::Zora
        }
    }

    /// Side reported as the coin; currency0 unless currency0 is a base token
    pub fn subject(&self, currency0: Address) -> Side {
        if self.base_pairings.contains(currency0) {
            Side::Currency1
        } else {
            Side::Currency0
        }
    }

    /// Full classification, `None` when the hook is not registered
    pub fn classify(
        &self,
        hooks: Address,
        currency0: Address,
        currency1: Address,
    ) -> Option<Classification> {
        let coin_type = self.coin_type(hooks)?;
        Some(Classification {
            coin_type,
            app_type: self.app_type(currency0, currency1),
            subject: self.subject(currency0),
        })
    }
}
