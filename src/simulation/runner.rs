//! The caller-owned board threaded through successive ticks

use super::history::History;
use crate::config::Settings;
use crate::game_of_life::{
    advance_union, load_board_from_file, parse_board_with, Board, Rule, RuleKind,
};
use anyhow::{Context, Result};
use log::{debug, info};

/// A running simulation: the current board plus the rules unioned each tick
#[derive(Debug, Clone)]
pub struct Simulation<R: Rule = RuleKind> {
    board: Board,
    rules: Vec<R>,
    generation: usize,
}

impl<R: Rule> Simulation<R> {
    /// Start a simulation from `board`
    pub fn new(board: Board, rules: Vec<R>) -> Self {
        Self {
            board,
            rules,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &[R] {
        &self.rules
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.len()
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.name().to_string()).collect()
    }

    /// Replace the board with the union of every rule's next generation
    pub fn step(&mut self) -> &Board {
        self.board = advance_union(&self.board, &self.rules);
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.board.len()
        );
        &self.board
    }

    /// Advance `generations` ticks and return every board visited
    pub fn run(&mut self, generations: usize) -> History {
        let mut history = History::new(self.rule_names(), self.board.clone());
        for _ in 0..generations {
            history.push(self.step().clone());
        }
        history
    }

    /// Advance `generations` ticks, handing each board to `on_tick` first.
    ///
    /// `on_tick` sees the current generation before it is advanced, so the
    /// initial board is the first one it receives. The returned history
    /// includes the board after the final tick.
    pub fn run_with<F>(&mut self, generations: usize, mut on_tick: F) -> Result<History>
    where
        F: FnMut(usize, &Board) -> Result<()>,
    {
        info!(
            "running {} generations with rules [{}]",
            generations,
            self.rule_names().join(", ")
        );

        let mut history = History::new(self.rule_names(), self.board.clone());
        for _ in 0..generations {
            on_tick(self.generation, &self.board)?;
            history.push(self.step().clone());
        }

        info!(
            "finished at generation {} with {} alive",
            self.generation,
            self.board.len()
        );
        Ok(history)
    }
}

impl Simulation<RuleKind> {
    /// Build the starting board and rules described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let alive = settings.display.alive;
        let board = match settings.input.pattern_file {
            Some(ref path) => load_board_from_file(path, alive)
                .with_context(|| format!("Failed to load pattern from {}", path.display()))?,
            None => parse_board_with(&settings.input.pattern, alive),
        };

        info!("loaded starting board with {} alive cells", board.len());
        Ok(Self::new(board, settings.rules.clone()))
    }
}
