use tracing::debug;

use crate::core::money;
use crate::modules::fees::models::FeeQuote;
use crate::modules::fees::services::FeeCalculator;
use crate::modules::widget::models::{FormEvent, FormState, ThemeMode};

/// Hint shown while the price field is empty.
const PRICE_HINT: &str = "Enter an amount.";

/// Everything the surface needs to draw one frame of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Rendered fee line, e.g. `100 SP` or `NaN SP`.
    pub fee_text: String,
    /// Rendered net-amount line.
    pub net_text: String,
    /// Placeholder under the price field; empty once any text is present.
    pub hint_text: &'static str,
    /// Theme button label; names the mode it switches TO.
    pub theme_label: &'static str,
    pub buff_active: bool,
    pub voucher_active: bool,
    pub mode: ThemeMode,
}

/// One interactive session of the fee form.
///
/// Owns the four-field state and the calculator, applies user events, and
/// derives a full render snapshot after each one. The session lives in the
/// UI's user data and dies with the process; nothing is persisted.
pub struct WidgetSession {
    state: FormState,
    calculator: FeeCalculator,
    currency_label: String,
}

impl WidgetSession {
    pub fn new(currency_label: impl Into<String>) -> Self {
        Self {
            state: FormState::new(),
            calculator: FeeCalculator::new(),
            currency_label: currency_label.into(),
        }
    }

    /// Apply one user event to the form state.
    pub fn handle(&mut self, event: FormEvent) {
        debug!(?event, "form event");
        self.state.apply(event);
    }

    /// Current quote, when the price parses to a number.
    pub fn quote(&self) -> Option<FeeQuote> {
        self.state
            .price
            .amount()
            .map(|price| self.calculator.quote(price, self.state.flags()))
    }

    /// Derive the full set of display values from the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        let quote = self.quote();

        ViewSnapshot {
            fee_text: money::display_amount(quote.map(|q| q.fee), &self.currency_label),
            net_text: money::display_amount(quote.map(|q| q.net), &self.currency_label),
            hint_text: if self.state.price.is_empty() {
                PRICE_HINT
            } else {
                ""
            },
            theme_label: match self.state.mode {
                ThemeMode::Light => "Switch to dark mode",
                ThemeMode::Dark => "Switch to light mode",
            },
            buff_active: self.state.ten_percent_buff,
            voucher_active: self.state.thirty_percent_voucher,
            mode: self.state.mode,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }
}
