pub mod session;

pub use session::{ViewSnapshot, WidgetSession};
