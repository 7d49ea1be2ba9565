mod discount;
mod quote;

pub use discount::DiscountFlags;
pub use quote::FeeQuote;
