use rust_decimal::Decimal;

/// Placeholder rendered when no numeric amount is available.
///
/// The widget shows `NaN` (not zero, not an error message) until the price
/// field holds something that parses. The unit suffix stays either way.
pub const NON_NUMERIC: &str = "NaN";

/// Formats an optional amount for display with the currency unit appended.
///
/// Trailing zeros are normalized away so `1000 × 0.1` renders as `100 SP`,
/// not `100.0 SP`. Absent amounts render as `NaN SP`.
pub fn display_amount(amount: Option<Decimal>, unit: &str) -> String {
    match amount {
        Some(value) => format!("{} {}", value.normalize(), unit),
        None => format!("{} {}", NON_NUMERIC, unit),
    }
}
