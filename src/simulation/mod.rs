//! Running simulations over many ticks and analyzing the result

pub mod history;
pub mod runner;

pub use history::{GenerationRecord, History, HistoryRecord, Outcome, StabilityAnalysis};
pub use runner::Simulation;
