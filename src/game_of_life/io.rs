//! Text I/O for boards: building a board from a pattern and rendering it back

use super::cell::{bounding_box, Board, Cell};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rendered in place of a block when no cell is alive
pub const EMPTY_BOARD: &str = "empty";

/// Pattern the default scenario starts from
pub const DEFAULT_PATTERN: &str = "......X.\nXX......\n.X...XXX";

/// Errors raised when a pattern cannot be read as a board
#[derive(Debug, Error)]
pub enum MalformedInputError {
    #[error("pattern is not valid UTF-8 text")]
    NotText(#[from] std::str::Utf8Error),

    #[error("failed to read pattern file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Characters used for alive and dead cells in text patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: 'X', dead: '.' }
    }
}

/// Build a board from a pattern where `X` marks an alive cell.
///
/// Each line is a row (y grows downward from 0) and each character a column
/// (x grows rightward from 0). Any other character is dead, and rows may
/// have different lengths.
pub fn parse_board(text: &str) -> Board {
    parse_board_with(text, Glyphs::default().alive)
}

/// Build a board from a pattern using a custom alive marker
pub fn parse_board_with(text: &str, alive: char) -> Board {
    text.lines()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(move |&(_, ch)| ch == alive)
                .map(move |(col, _)| Cell::new(col as i64, row as i64))
        })
        .collect()
}

/// Build a board from raw bytes, rejecting anything that is not text
pub fn decode_board(bytes: &[u8], alive: char) -> Result<Board, MalformedInputError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_board_with(text, alive))
}

/// Load a board from a pattern file
pub fn load_board_from_file<P: AsRef<Path>>(path: P, alive: char) -> Result<Board, MalformedInputError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| MalformedInputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    decode_board(&bytes, alive)
}

/// Render a board with the default glyphs
pub fn render_board(board: &Board, pad: u32) -> String {
    render_board_with(board, pad, &Glyphs::default())
}

/// Render the bounding box of `board`, grown by `pad` on every side.
///
/// Rows are newline-separated and trailing whitespace is trimmed. An empty
/// board renders as [`EMPTY_BOARD`].
pub fn render_board_with(board: &Board, pad: u32, glyphs: &Glyphs) -> String {
    let Some(bounds) = bounding_box(board) else {
        return EMPTY_BOARD.to_string();
    };

    let pad = i64::from(pad);
    let (min_x, max_x) = (bounds.min_x.saturating_sub(pad), bounds.max_x.saturating_add(pad));
    let (min_y, max_y) = (bounds.min_y.saturating_sub(pad), bounds.max_y.saturating_add(pad));

    let mut output = String::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let alive = board.contains(&Cell::new(x, y));
            output.push(if alive { glyphs.alive } else { glyphs.dead });
        }
        output.push('\n');
    }

    output.truncate(output.trim_end().len());
    output
}

/// Save a board to a pattern file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P, glyphs: &Glyphs) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = render_board_with(board, 0, glyphs);
    content.push('\n');
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write board to file: {}", path.display()))?;

    Ok(())
}

/// Create example pattern files for the `setup` command
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("default.txt", DEFAULT_PATTERN),
        ("blinker.txt", "XXX"),
        ("block.txt", "XX\nXX"),
        ("glider.txt", ".X.\n..X\nXXX"),
        ("lateral_gaps.txt", "X.X.X.X"),
    ];

    for (name, pattern) in patterns {
        std::fs::write(dir.join(name), format!("{pattern}\n"))
            .with_context(|| format!("Failed to write {name}"))?;
    }

    Ok(())
}
