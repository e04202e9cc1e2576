//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A retail price in the store currency.
///
/// Wraps [`Decimal`] so amounts never pass through floating point. Catalog
/// prices are non-negative; the type does not enforce this because the
/// catalog is read-only to the application.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type), sqlx(transparent))]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    /// Format for display, e.g. `$19.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        let price = Price::new(Decimal::new(1999, 2));
        assert_eq!(price.to_string(), "$19.99");

        let whole = Price::new(Decimal::from(120));
        assert_eq!(whole.to_string(), "$120.00");
    }

    #[test]
    fn test_times_and_sum() {
        let price = Price::new(Decimal::new(1050, 2));
        assert_eq!(price.times(3).amount(), Decimal::new(3150, 2));

        let total: Price = [price, price.times(2)].into_iter().sum();
        assert_eq!(total.amount(), Decimal::new(3150, 2));
    }
}
