mod form_state;
mod price_input;

pub use form_state::{FormEvent, FormState, ThemeMode};
pub use price_input::PriceInput;
