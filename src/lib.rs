//! Sparse cellular automaton on an unbounded grid
//!
//! A board is the set of alive cells. Each tick, every active rule computes
//! its next generation from the same board and the results are unioned.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{advance, advance_union, Board, Cell, Rule, RuleKind};
pub use simulation::{History, Simulation, StabilityAnalysis};

use anyhow::Result;

/// Run the simulation described by `settings` headless and return its history
pub fn simulate(settings: &Settings) -> Result<History> {
    settings.validate()?;
    let mut simulation = Simulation::from_settings(settings)?;
    Ok(simulation.run(settings.simulation.generations))
}
