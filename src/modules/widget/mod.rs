// Widget module: the stateful presentation component

pub mod models;
pub mod services;

pub use models::{FormEvent, FormState, PriceInput, ThemeMode};
pub use services::{ViewSnapshot, WidgetSession};
