//! Terminal output helpers

pub mod display;
pub mod logger;

pub use display::{BoardFormatter, Color, ColorOutput, CLEAR_SCREEN};
pub use logger::ConsoleLogger;
