use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// State of the price field, parsed from its raw text.
///
/// Three states, not two: a cleared field and an unparseable one both
/// render non-numerically downstream, but only `Empty` means "nothing
/// entered yet" (and keeps the placeholder hint visible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceInput {
    /// Nothing entered yet, or the field was cleared.
    #[default]
    Empty,
    /// Text with no usable numeric prefix.
    Invalid,
    /// A parsed price, floored to an integer.
    Amount(Decimal),
}

impl PriceInput {
    /// Parse raw field text.
    ///
    /// The longest leading float wins and trailing junk is ignored, so
    /// `"12abc"` is 12 and `"3.9e2x"` is 390. The value is then floored:
    /// `"12.7"` becomes 12, `"-12.5"` becomes -13. Text without a numeric
    /// prefix, and values no `Decimal` can hold (infinities, out-of-range
    /// magnitudes), are `Invalid`.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }

        let Some(prefix) = float_prefix(text) else {
            return Self::Invalid;
        };

        let value: f64 = match prefix.parse() {
            Ok(value) => value,
            Err(_) => return Self::Invalid,
        };

        match Decimal::from_f64(value.floor()) {
            Some(amount) => Self::Amount(amount),
            None => Self::Invalid,
        }
    }

    /// The numeric amount, when one exists.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::Empty | Self::Invalid => None,
        }
    }

    /// True when the field holds no text at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Longest leading substring of `text` that parses as a decimal float,
/// after skipping leading whitespace.
///
/// Grammar: optional sign, digits, optional fraction, optional exponent.
/// A bare `.` or sign is not a number, and a dangling exponent marker is
/// left unconsumed (`"1e"` parses as 1).
fn float_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
