//! Recorded run history and stability analysis

use crate::game_of_life::{sorted_cells, Board, Cell};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Every board a simulation passed through, starting with the initial one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Names of the rules that were unioned each tick
    pub rules: Vec<String>,
    /// `boards[i]` is the board at generation `i`
    pub boards: Vec<Board>,
}

/// Serialized form of a history, with cells in row-major order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub rules: Vec<String>,
    pub generations: Vec<GenerationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub population: usize,
    pub cells: Vec<Cell>,
}

impl History {
    /// Start a history from the initial board
    pub fn new(rules: Vec<String>, initial: Board) -> Self {
        Self {
            rules,
            boards: vec![initial],
        }
    }

    /// Append the next board
    pub fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Board at `generation`, if it was recorded
    pub fn board_at(&self, generation: usize) -> Option<&Board> {
        self.boards.get(generation)
    }

    pub fn initial(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// Number of ticks recorded after the initial board
    pub fn generations(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    /// Population per recorded generation
    pub fn populations(&self) -> Vec<usize> {
        self.boards.iter().map(Board::len).collect()
    }

    pub fn analyze(&self) -> StabilityAnalysis {
        StabilityAnalysis::analyze(&self.boards)
    }

    pub fn to_record(&self) -> HistoryRecord {
        HistoryRecord {
            rules: self.rules.clone(),
            generations: self
                .boards
                .iter()
                .enumerate()
                .map(|(generation, board)| GenerationRecord {
                    generation,
                    population: board.len(),
                    cells: sorted_cells(board),
                })
                .collect(),
        }
    }

    pub fn from_record(record: HistoryRecord) -> Self {
        Self {
            rules: record.rules,
            boards: record
                .generations
                .into_iter()
                .map(|generation| generation.cells.into_iter().collect())
                .collect(),
        }
    }

    /// Convert to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_record())
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::from_record)
    }

    /// Save history to a JSON file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load history from a JSON file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let history = Self::from_json(&json)?;
        Ok(history)
    }
}

/// How a run settled, judged from its recorded boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Outcome {
    /// No cell alive from generation `at` on
    Extinct { at: usize },
    /// Board unchanged from generation `from` on
    StillLife { from: usize },
    /// Board repeats every `period` generations starting at `from`
    Oscillator { from: usize, period: usize },
    /// No repeat within the recorded generations
    Unsettled,
}

/// Analysis of a recorded run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityAnalysis {
    pub outcome: Outcome,
    pub generations: usize,
    pub min_population: usize,
    pub max_population: usize,
    pub final_population: usize,
}

impl StabilityAnalysis {
    /// Analyze a sequence of boards where `boards[i]` is generation `i`
    pub fn analyze(boards: &[Board]) -> Self {
        let populations: Vec<usize> = boards.iter().map(Board::len).collect();

        Self {
            outcome: Self::detect_outcome(boards),
            generations: boards.len().saturating_sub(1),
            min_population: populations.iter().copied().min().unwrap_or(0),
            max_population: populations.iter().copied().max().unwrap_or(0),
            final_population: populations.last().copied().unwrap_or(0),
        }
    }

    /// Find the first board that repeats an earlier one
    fn detect_outcome(boards: &[Board]) -> Outcome {
        if let Some(at) = boards.iter().position(Board::is_empty) {
            return Outcome::Extinct { at };
        }

        let mut first_seen: HashMap<Vec<Cell>, usize> = HashMap::new();
        for (generation, board) in boards.iter().enumerate() {
            let key = sorted_cells(board);
            if let Some(&from) = first_seen.get(&key) {
                let period = generation - from;
                return if period == 1 {
                    Outcome::StillLife { from }
                } else {
                    Outcome::Oscillator { from, period }
                };
            }
            first_seen.insert(key, generation);
        }

        Outcome::Unsettled
    }

    pub fn is_settled(&self) -> bool {
        self.outcome != Outcome::Unsettled
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Extinct { at } => write!(f, "extinct at generation {}", at),
            Outcome::StillLife { from } => write!(f, "still life from generation {}", from),
            Outcome::Oscillator { from, period } => {
                write!(f, "oscillator (period {}) from generation {}", period, from)
            }
            Outcome::Unsettled => write!(f, "unsettled"),
        }
    }
}

impl fmt::Display for StabilityAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stability Analysis:")?;
        writeln!(f, "  Outcome: {}", self.outcome)?;
        writeln!(f, "  Generations: {}", self.generations)?;
        writeln!(
            f,
            "  Population: min {}, max {}, final {}",
            self.min_population, self.max_population, self.final_population
        )
    }
}
