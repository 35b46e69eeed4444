//! Sparse board evolution: cells, neighborhoods, rules and the engine

pub mod cell;
pub mod engine;
pub mod io;
pub mod neighborhood;
pub mod rules;

pub use cell::{bounding_box, normalize, sorted_cells, Board, BoundingBox, Cell};
pub use engine::{advance, advance_generations, advance_union};
pub use io::{
    create_example_patterns, load_board_from_file, parse_board, parse_board_with, render_board,
    render_board_with, save_board_to_file, Glyphs, MalformedInputError,
};
pub use neighborhood::{neighbors, NeighborCount, LATERAL_OFFSETS, MOORE_OFFSETS};
pub use rules::{ClassicalRule, LateralNeighborRule, Rule, RuleKind, TallyRule};
