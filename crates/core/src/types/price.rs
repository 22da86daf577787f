//! Type-safe price representation using decimal arithmetic.
//!
//! Monetary amounts are kept as exact [`Decimal`] values everywhere; rounding
//! to two decimal places happens only when a price is formatted for display.
//! Rounding intermediate values would compound error across derivations.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store's single display currency (USD).
///
/// ## Examples
///
/// ```
/// use majik_bloom_core::Price;
///
/// let price = Price::from_cents(4999);
/// assert_eq!(price.display(), "$49.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from an exact decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount for `quantity` units, unrounded.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// Rounds to two decimal places, midpoint away from zero, the way a
    /// two-digit `toFixed` display would.
    #[must_use]
    pub fn display(&self) -> String {
        format_usd(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a raw decimal amount as a dollar string, rounded to two places.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // The precision flag pads short scales (0 -> 0.00); rounding already
    // happened above
    format!("${rounded:.2}")
}
