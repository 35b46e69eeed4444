//! Board engine: applies rules to produce the next board

use super::cell::Board;
use super::rules::Rule;
use rayon::prelude::*;

/// Advance `board` one generation under `rule`
pub fn advance<R: Rule + ?Sized>(board: &Board, rule: &R) -> Board {
    rule.next_generation(board)
}

/// Apply every rule to the same `board` and union the results.
///
/// Rules are evaluated independently, so they may run in parallel. An empty
/// rule list yields an empty board.
pub fn advance_union<R: Rule>(board: &Board, rules: &[R]) -> Board {
    rules
        .par_iter()
        .map(|rule| advance(board, rule))
        .reduce(Board::new, |a, b| {
            // Extend the larger set with the smaller one
            let (mut larger, smaller) = if a.len() >= b.len() { (a, b) } else { (b, a) };
            larger.extend(smaller);
            larger
        })
}

/// Advance `board` through `generations` union steps
pub fn advance_generations<R: Rule>(mut board: Board, rules: &[R], generations: usize) -> Board {
    for _ in 0..generations {
        board = advance_union(&board, rules);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{Cell, ClassicalRule, LateralNeighborRule, RuleKind, TallyRule};

    /// Column-only counterpart of the lateral rule (B2/S12)
    struct VerticalRule;

    impl TallyRule for VerticalRule {
        const NAME: &'static str = "vertical";
        const OFFSETS: &'static [(i64, i64)] = &[(0, -1), (0, 1)];
        const BIRTH: &'static [u32] = &[2];
        const SURVIVAL: &'static [u32] = &[1, 2];
    }

    /// Moves every cell one column right, no tally involved
    struct ShiftRight;

    impl Rule for ShiftRight {
        fn name(&self) -> &'static str {
            "shift-right"
        }

        fn next_generation(&self, board: &Board) -> Board {
            board.iter().filter_map(|cell| cell.offset(1, 0)).collect()
        }
    }

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_advance_dispatches_to_rule() {
        let blinker = board(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(advance(&blinker, &ClassicalRule), board(&[(1, -1), (1, 0), (1, 1)]));
        assert_eq!(advance(&blinker, &LateralNeighborRule), blinker);
    }

    #[test]
    fn test_advance_trait_object() {
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ClassicalRule), Box::new(LateralNeighborRule)];
        let gap = board(&[(0, 0), (2, 0)]);
        assert!(advance(&gap, rules[0].as_ref()).is_empty());
        assert_eq!(advance(&gap, rules[1].as_ref()), board(&[(1, 0)]));
    }

    #[test]
    fn test_union_composition() {
        // Classical: the L-shaped tromino fills in to a block.
        // Lateral: (0,0)-(1,0) hold, (0,1) dies alone on its row.
        let tromino = board(&[(0, 0), (1, 0), (0, 1)]);

        let classical = advance(&tromino, &ClassicalRule);
        let lateral = advance(&tromino, &LateralNeighborRule);
        assert_eq!(classical, board(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        assert_eq!(lateral, board(&[(0, 0), (1, 0)]));

        let expected: Board = classical.union(&lateral).copied().collect();
        let combined = advance_union(&tromino, &[RuleKind::Classical, RuleKind::Lateral]);
        assert_eq!(combined, expected);
        assert_eq!(combined, board(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_union_with_disjoint_results() {
        // Lateral fills the gap that classical leaves dead.
        let gap = board(&[(0, 0), (2, 0)]);
        let combined = advance_union(&gap, &RuleKind::defaults());
        assert_eq!(combined, board(&[(1, 0)]));
    }

    #[test]
    fn test_union_without_rules() {
        let block = board(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let rules: [RuleKind; 0] = [];
        assert!(advance_union(&block, &rules).is_empty());
    }

    #[test]
    fn test_single_rule_union_matches_advance() {
        let blinker = board(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(
            advance_union(&blinker, &[RuleKind::Classical]),
            advance(&blinker, &ClassicalRule)
        );
    }

    #[test]
    fn test_advance_generations() {
        let blinker = board(&[(0, 0), (1, 0), (2, 0)]);
        let rules = [RuleKind::Classical];
        assert_eq!(advance_generations(blinker.clone(), &rules, 2), blinker);
        assert_eq!(advance_generations(blinker.clone(), &rules, 0), blinker);
        assert!(advance_generations(board(&[(3, 3)]), &RuleKind::defaults(), 1).is_empty());
    }

    #[test]
    fn test_locally_defined_tally_rule() {
        let gap = board(&[(0, 0), (0, 2)]);
        assert_eq!(VerticalRule.name(), "vertical");
        assert_eq!(advance(&gap, &VerticalRule), board(&[(0, 1)]));
        assert_eq!(advance_union(&gap, &[VerticalRule]), board(&[(0, 1)]));

        // The lateral rule sees nothing on a column.
        assert!(advance(&gap, &LateralNeighborRule).is_empty());
    }

    #[test]
    fn test_rule_without_tally() {
        let row = board(&[(0, 0), (1, 0), (i64::MAX, 3)]);
        assert_eq!(advance(&row, &ShiftRight), board(&[(1, 0), (2, 0)]));
        assert_eq!(
            advance_generations(board(&[(0, 0)]), &[ShiftRight], 3),
            board(&[(3, 0)])
        );
    }
}
