// UI module: the terminal surface for the fee form

pub mod app;
pub mod theme;
pub mod views;
