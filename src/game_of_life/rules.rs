//! Neighbor-counting rules for the sparse board

use super::cell::Board;
use super::neighborhood::{NeighborCount, LATERAL_OFFSETS, MOORE_OFFSETS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule computes the next board from the current one.
///
/// Rules are stateless; the same input board always yields the same output,
/// and the input is never modified.
pub trait Rule: Send + Sync {
    /// Short human-readable name
    fn name(&self) -> &'static str;

    /// Compute the next generation without touching `board`
    fn next_generation(&self, board: &Board) -> Board;
}

/// A rule decided by counting alive neighbors under a fixed set of offsets.
///
/// Every `TallyRule` is a [`Rule`].
pub trait TallyRule: Send + Sync {
    const NAME: &'static str;

    /// Offsets counted as neighbors
    const OFFSETS: &'static [(i64, i64)];

    /// Tallies at which a dead coordinate becomes alive
    const BIRTH: &'static [u32];

    /// Tallies at which an alive cell stays alive
    const SURVIVAL: &'static [u32];

    /// Whether a coordinate is alive next generation given its state and tally
    fn should_be_alive(alive: bool, tally: u32) -> bool {
        if alive {
            Self::SURVIVAL.contains(&tally)
        } else {
            Self::BIRTH.contains(&tally)
        }
    }
}

impl<T: TallyRule> Rule for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn next_generation(&self, board: &Board) -> Board {
        // Coordinates with a zero tally never reach the output, so an
        // isolated cell always dies.
        NeighborCount::tally(board, T::OFFSETS)
            .iter()
            .filter(|(cell, tally)| T::should_be_alive(board.contains(cell), *tally))
            .map(|(cell, _)| cell)
            .collect()
    }
}

/// Conway's rule over the 8-cell Moore neighborhood (B3/S23)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalRule;

impl TallyRule for ClassicalRule {
    const NAME: &'static str = "classical";
    const OFFSETS: &'static [(i64, i64)] = &MOORE_OFFSETS;
    const BIRTH: &'static [u32] = &[3];
    const SURVIVAL: &'static [u32] = &[2, 3];
}

/// Same-row rule over the left and right neighbors only (B2/S12)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LateralNeighborRule;

impl TallyRule for LateralNeighborRule {
    const NAME: &'static str = "lateral";
    const OFFSETS: &'static [(i64, i64)] = &LATERAL_OFFSETS;
    const BIRTH: &'static [u32] = &[2];
    const SURVIVAL: &'static [u32] = &[1, 2];
}

/// The rules selectable from configuration and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Classical,
    Lateral,
}

impl RuleKind {
    /// Rules active in the default scenario
    pub fn defaults() -> Vec<RuleKind> {
        vec![RuleKind::Classical, RuleKind::Lateral]
    }
}

impl Rule for RuleKind {
    fn name(&self) -> &'static str {
        match self {
            RuleKind::Classical => ClassicalRule.name(),
            RuleKind::Lateral => LateralNeighborRule.name(),
        }
    }

    fn next_generation(&self, board: &Board) -> Board {
        match self {
            RuleKind::Classical => ClassicalRule.next_generation(board),
            RuleKind::Lateral => LateralNeighborRule.next_generation(board),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::neighborhood::neighbors;
    use crate::game_of_life::Cell;

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_empty_board_stays_empty() {
        assert!(ClassicalRule.next_generation(&Board::new()).is_empty());
        assert!(LateralNeighborRule.next_generation(&Board::new()).is_empty());
    }

    #[test]
    fn test_still_life_block() {
        let block = board(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(ClassicalRule.next_generation(&block), block);
    }

    #[test]
    fn test_isolated_cell_dies() {
        assert!(ClassicalRule.next_generation(&board(&[(5, 5)])).is_empty());
        assert!(LateralNeighborRule.next_generation(&board(&[(5, 5)])).is_empty());
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = board(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = board(&[(1, -1), (1, 0), (1, 1)]);

        let evolved = ClassicalRule.next_generation(&horizontal);
        assert_eq!(evolved, vertical);
        assert_eq!(ClassicalRule.next_generation(&evolved), horizontal);
    }

    #[test]
    fn test_lateral_pair_is_stable() {
        // Both cells are alive with tally 1; the outer spots only reach 1.
        let pair = board(&[(0, 0), (1, 0)]);
        let counts = NeighborCount::tally(&pair, &LATERAL_OFFSETS);
        assert_eq!(counts.get(&Cell::new(0, 0)), 1);
        assert_eq!(counts.get(&Cell::new(1, 0)), 1);
        assert_eq!(counts.get(&Cell::new(-1, 0)), 1);
        assert_eq!(counts.get(&Cell::new(2, 0)), 1);

        assert_eq!(LateralNeighborRule.next_generation(&pair), pair);
    }

    #[test]
    fn test_lateral_rows() {
        // A solid row holds; isolated cells die and fill the gaps between them.
        let row = board(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(LateralNeighborRule.next_generation(&row), row);

        let split = board(&[(0, 0), (2, 0), (4, 0)]);
        assert_eq!(
            LateralNeighborRule.next_generation(&split),
            board(&[(1, 0), (3, 0)])
        );
    }

    #[test]
    fn test_lateral_gap_is_filled() {
        let gap = board(&[(0, 0), (2, 0)]);
        assert_eq!(LateralNeighborRule.next_generation(&gap), board(&[(1, 0)]));
    }

    #[test]
    fn test_lateral_ignores_other_rows() {
        let column = board(&[(0, 0), (0, 1), (0, 2)]);
        assert!(LateralNeighborRule.next_generation(&column).is_empty());
    }

    #[test]
    fn test_purity() {
        let pattern = board(&[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)]);
        let snapshot = pattern.clone();

        for rule in [RuleKind::Classical, RuleKind::Lateral] {
            let first = rule.next_generation(&pattern);
            let second = rule.next_generation(&pattern);
            assert_eq!(first, second);
            assert_eq!(pattern, snapshot);
        }
    }

    #[test]
    fn test_output_within_neighborhoods() {
        let pattern = board(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 2)]);
        let rules = [
            (RuleKind::Classical, ClassicalRule::OFFSETS),
            (RuleKind::Lateral, LateralNeighborRule::OFFSETS),
        ];
        for (rule, offsets) in rules {
            let reachable: Board = pattern
                .iter()
                .flat_map(|&cell| neighbors(cell, offsets).chain(Some(cell)))
                .collect();
            assert!(rule.next_generation(&pattern).is_subset(&reachable));
        }
    }

    #[test]
    fn test_rule_logic() {
        assert!(ClassicalRule::should_be_alive(true, 2));
        assert!(ClassicalRule::should_be_alive(true, 3));
        assert!(ClassicalRule::should_be_alive(false, 3));
        assert!(!ClassicalRule::should_be_alive(false, 2));
        assert!(!ClassicalRule::should_be_alive(true, 4));
        assert!(!ClassicalRule::should_be_alive(true, 1));

        assert!(LateralNeighborRule::should_be_alive(false, 2));
        assert!(LateralNeighborRule::should_be_alive(true, 1));
        assert!(LateralNeighborRule::should_be_alive(true, 2));
        assert!(!LateralNeighborRule::should_be_alive(false, 1));
        assert!(!LateralNeighborRule::should_be_alive(true, 0));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ClassicalRule.name(), "classical");
        assert_eq!(LateralNeighborRule.name(), "lateral");
        assert_eq!(RuleKind::Classical.name(), "classical");
    }

    #[test]
    fn test_rule_kind_matches_concrete_rules() {
        let pattern = board(&[(0, 0), (1, 0), (2, 0), (4, 0), (1, 1)]);
        assert_eq!(
            RuleKind::Classical.next_generation(&pattern),
            ClassicalRule.next_generation(&pattern)
        );
        assert_eq!(
            RuleKind::Lateral.next_generation(&pattern),
            LateralNeighborRule.next_generation(&pattern)
        );
        assert_eq!(RuleKind::Lateral.to_string(), "lateral");
        assert_eq!(RuleKind::defaults(), vec![RuleKind::Classical, RuleKind::Lateral]);
    }
}
