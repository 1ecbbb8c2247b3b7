// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unit prices from a Q64.96 square-root price
//!
//! A v4 pool stores `sqrtPriceX96 = sqrt(raw1 / raw0) * 2^96`, where `raw0` and
//! `raw1` are amounts in each token's smallest unit. The human price of one
//! whole currency0 in currency1 is therefore
//!
//! ```text
//! price0 = sqrtPriceX96^2 / 2^192 * 10^decimals0 / 10^decimals1
//! ```
//!
//! and `price1 = 1 / price0`. Prices are kept as [`BigDecimal`] so that tiny
//! meme-coin prices and huge inverse prices keep every significant digit until
//! they are rounded for display.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, One, RoundingMode, Zero};

use crate::errors::PoolLoadError;

/// Significant digits used when a price is rendered for output
pub const DISPLAY_SIGNIFICANT_DIGITS: u64 = 6;

/// Price of one whole unit of a currency, denominated in the other currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPrice(BigDecimal);

impl UnitPrice {
    /// Wrap an exact decimal price
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// The full-precision value
    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    /// Render with at most `digits` significant digits (see [`to_significant`])
    pub fn to_significant(&self, digits: u64) -> String {
        to_significant(&self.0, digits)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_significant(DISPLAY_SIGNIFICANT_DIGITS))
    }
}

/// Both unit prices of a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolPrices {
    /// One currency0 in currency1
    pub currency0_price: UnitPrice,
    /// One currency1 in currency0
    pub currency1_price: UnitPrice,
}

/// Derive both unit prices from a square-root price and the two tokens' decimals
///
/// # Errors
///
/// Returns [`PoolLoadError::PriceDerivation`] when `sqrt_price_x96` is zero,
/// because neither price is defined for an uninitialized pool.
pub fn prices_from_sqrt_price_x96(
    sqrt_price_x96: U256,
    decimals0: u8,
    decimals1: u8,
) -> Result<PoolPrices, PoolLoadError> {
    if sqrt_price_x96.is_zero() {
        return Err(PoolLoadError::price_derivation("sqrtPriceX96 is zero"));
    }

    let sqrt_price = u256_to_bigdecimal(sqrt_price_x96)?;
    let q192 = u256_to_bigdecimal(U256::from(1u64) << 192usize)?;

    let raw_price = (&sqrt_price * &sqrt_price) / q192;
    let scale = i64::from(decimals0) - i64::from(decimals1);
    let price0 = raw_price * pow10(scale);
    let price1 = BigDecimal::one() / &price0;

    Ok(PoolPrices {
        currency0_price: UnitPrice::new(price0),
        currency1_price: UnitPrice::new(price1),
    })
}

/// Round `value` to `digits` significant digits, half away from zero, and render
/// it in plain decimal notation without trailing zeros.
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use coinscan::pool::price::to_significant;
/// use std::str::FromStr;
///
/// let value = BigDecimal::from_str("0.000012345678").unwrap();
/// assert_eq!(to_significant(&value, 6), "0.0000123457");
/// ```
pub fn to_significant(value: &BigDecimal, digits: u64) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let digits = digits.max(1) as i64;

    // Position of the most significant digit relative to the decimal point
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let mantissa_digits = mantissa.to_string().trim_start_matches('-').len() as i64;
    let magnitude = mantissa_digits - 1 - scale;

    let rounded = value
        .with_scale_round(digits - 1 - magnitude, RoundingMode::HalfUp)
        .normalized();

    plain_decimal(&rounded)
}

/// Render a decimal without exponent notation
fn plain_decimal(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let text = mantissa.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return format!("{sign}{digits}{zeros}");
    }

    let scale = scale as usize;
    if digits.len() > scale {
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        format!("{sign}{whole}.{fraction}")
    } else {
        let zeros = "0".repeat(scale - digits.len());
        format!("{sign}0.{zeros}{digits}")
    }
}

fn pow10(exponent: i64) -> BigDecimal {
    // 1 with a negative scale is 10^exponent exactly
    BigDecimal::new(1.into(), -exponent)
}

fn u256_to_bigdecimal(value: U256) -> Result<BigDecimal, PoolLoadError> {
    BigDecimal::from_str(&value.to_string()).map_err(|e| {
        PoolLoadError::price_derivation(format!("cannot convert {value} to decimal: {e}"))
    })
}
