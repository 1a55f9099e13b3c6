//! Monetary amounts.
//!
//! All money in UniPOS is fixed-point decimal. Binary floats are never used
//! for amounts; request/response JSON still carries plain numbers via the
//! `serde-float` representation.

use rust_decimal::Decimal;

/// A monetary amount in the configured currency.
pub type Money = Decimal;

/// Sum a sequence of amounts (exact decimal fold, no rounding rules).
pub fn total<I>(amounts: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    amounts.into_iter().sum()
}
