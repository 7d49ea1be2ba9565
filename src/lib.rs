//! Feeform Transaction Fee Calculator Library
//!
//! This library provides the fee engine and form widget behind the feeform
//! terminal calculator: a 10% transaction fee, two discount policies, and
//! a light/dark display mode.

pub mod config;
pub mod core;
pub mod modules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::fees;
pub use modules::widget;
