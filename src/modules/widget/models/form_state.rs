use crate::modules::fees::models::DiscountFlags;

use super::PriceInput;

/// Which of the two fixed color themes the form is showing.
///
/// Never persisted: every fresh start is `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The price field text changed (including being cleared).
    PriceEdited(String),
    /// The 10% buff switch was flipped.
    BuffToggled,
    /// The 30% voucher switch was flipped.
    VoucherToggled,
    /// The theme button was pressed.
    ThemeToggled,
}

/// The widget's four pieces of local state.
///
/// Created at startup, updated per user event, discarded on exit. Fee and
/// net are never stored here: they are re-derived from this state on every
/// change, so they cannot go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub price: PriceInput,
    pub ten_percent_buff: bool,
    pub thirty_percent_voucher: bool,
    pub mode: ThemeMode,
}

impl FormState {
    /// Fresh state: empty price, no discounts, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one user event. Each event touches exactly one field.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::PriceEdited(text) => self.price = PriceInput::parse(&text),
            FormEvent::BuffToggled => self.ten_percent_buff = !self.ten_percent_buff,
            FormEvent::VoucherToggled => {
                self.thirty_percent_voucher = !self.thirty_percent_voucher
            }
            FormEvent::ThemeToggled => self.mode = self.mode.toggled(),
        }
    }

    /// The discount selection as the fee engine sees it.
    pub fn flags(&self) -> DiscountFlags {
        DiscountFlags::new(self.ten_percent_buff, self.thirty_percent_voucher)
    }
}
