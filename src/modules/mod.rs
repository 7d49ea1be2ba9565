pub mod fees;
pub mod widget;
