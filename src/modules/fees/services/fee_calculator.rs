use rust_decimal::Decimal;

use crate::modules::fees::models::{DiscountFlags, FeeQuote};

/// FeeCalculator derives the transaction commission from a sale price.
///
/// The base commission is 10% of the price; an active discount policy
/// scales that down via [`DiscountFlags::multiplier`]. The calculation is
/// pure and total: no validation, no side effects, and a negative price
/// produces a negative fee and net without complaint.
pub struct FeeCalculator {
    rate: Decimal,
}

impl FeeCalculator {
    pub fn new() -> Self {
        Self {
            // 10% base commission
            rate: Decimal::new(1, 1),
        }
    }

    /// Quote the fee and net amount for a price under the given discounts.
    ///
    /// fee = price × 0.1 × multiplier(flags), net = price − fee. All
    /// arithmetic is exact decimal, so `quote.fee + quote.net == price`
    /// holds without rounding slack.
    pub fn quote(&self, price: Decimal, flags: DiscountFlags) -> FeeQuote {
        let fee = price * self.rate * flags.multiplier();

        FeeQuote {
            price,
            fee,
            net: price - fee,
        }
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}
