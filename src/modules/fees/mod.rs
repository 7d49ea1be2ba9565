// Fees module: the pure fee engine

pub mod models;
pub mod services;

pub use models::{DiscountFlags, FeeQuote};
pub use services::FeeCalculator;
