use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced transaction: what was asked, what the platform takes, and what
/// the seller receives.
///
/// Holds derived values only; `fee + net` always reconstructs `price`
/// exactly because all three come out of one exact calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Entered sale price, already floored to an integer.
    pub price: Decimal,
    /// Commission subtracted from the sale price.
    pub fee: Decimal,
    /// Amount the seller actually receives.
    pub net: Decimal,
}
