//! Money conversion
//!
//! Prices are stored as integer cents and handled as `Decimal` with scale 2
//! everywhere else.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Largest storable price in cents (NUMERIC(10, 2): 99 999 999.99)
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price must not be negative")]
    Negative,
    #[error("price must have at most two decimal places")]
    TooPrecise,
    #[error("price must be below 100000000")]
    TooLarge,
}

/// Cents to a scale-2 decimal (5500 -> 55.00)
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Decimal price to cents, rejecting values the store cannot hold exactly
pub fn to_cents(price: Decimal) -> Result<i64, PriceError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PriceError::Negative);
    }
    if price.round_dp(2) != price {
        return Err(PriceError::TooPrecise);
    }
    if price > from_cents(MAX_PRICE_CENTS) {
        return Err(PriceError::TooLarge);
    }
    (price * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or(PriceError::TooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_from_cents_has_two_decimals() {
        assert_eq!(from_cents(5500).to_string(), "55.00");
        assert_eq!(from_cents(4050).to_string(), "40.50");
        assert_eq!(from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_to_cents_accepts_whole_and_fractional() {
        assert_eq!(to_cents(dec("55")), Ok(5500));
        assert_eq!(to_cents(dec("55.5")), Ok(5550));
        assert_eq!(to_cents(dec("0.01")), Ok(1));
        assert_eq!(to_cents(dec("99999999.99")), Ok(MAX_PRICE_CENTS));
    }

    #[test]
    fn test_to_cents_rejects_out_of_range() {
        assert_eq!(to_cents(dec("-1")), Err(PriceError::Negative));
        assert_eq!(to_cents(dec("1.005")), Err(PriceError::TooPrecise));
        assert_eq!(to_cents(dec("100000000")), Err(PriceError::TooLarge));
        assert_eq!(to_cents(Decimal::MAX), Err(PriceError::TooLarge));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(to_cents(dec("-0.00")), Ok(0));
    }
}
