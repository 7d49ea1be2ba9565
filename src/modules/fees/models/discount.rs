use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two discount entitlements a seller may hold at once.
///
/// `ten_percent_buff` is the recurring discount; `thirty_percent_voucher`
/// is the single-use one. They do not stack multiplicatively: holding both
/// selects one combined policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountFlags {
    pub ten_percent_buff: bool,
    pub thirty_percent_voucher: bool,
}

impl DiscountFlags {
    pub fn new(ten_percent_buff: bool, thirty_percent_voucher: bool) -> Self {
        Self {
            ten_percent_buff,
            thirty_percent_voucher,
        }
    }

    /// Multiplier applied to the base fee.
    ///
    /// | buff | voucher | multiplier |
    /// |------|---------|------------|
    /// | yes  | yes     | 0.6        |
    /// | yes  | no      | 0.9        |
    /// | no   | yes     | 0.7        |
    /// | no   | no      | 1.0        |
    ///
    /// The 0.6 row is its own policy, not `0.9 × 0.7`.
    pub fn multiplier(&self) -> Decimal {
        match (self.ten_percent_buff, self.thirty_percent_voucher) {
            (true, true) => Decimal::new(6, 1),
            (true, false) => Decimal::new(9, 1),
            (false, true) => Decimal::new(7, 1),
            (false, false) => Decimal::ONE,
        }
    }

    /// True when any discount policy is active.
    pub fn any_active(&self) -> bool {
        self.ten_percent_buff || self.thirty_percent_voucher
    }
}
