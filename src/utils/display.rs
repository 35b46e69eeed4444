//! Display and output formatting utilities

use crate::game_of_life::{bounding_box, render_board_with, Board, Cell, Glyphs};
use crate::simulation::History;
use std::io::Write;

/// Moves the cursor home after clearing the terminal
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Format boards for the terminal
pub struct BoardFormatter;

impl BoardFormatter {
    /// One animation frame: optional clear sequence, the board, a blank line
    pub fn format_frame(board: &Board, pad: u32, glyphs: &Glyphs, clear_screen: bool) -> String {
        let mut output = String::new();
        if clear_screen {
            output.push_str(CLEAR_SCREEN);
        }
        output.push_str(&render_board_with(board, pad, glyphs));
        output.push_str("\n\n");
        output
    }

    /// Render a board with its x coordinates on top and y coordinates on the left
    pub fn format_board_with_coords(board: &Board, glyphs: &Glyphs) -> String {
        let Some(bounds) = bounding_box(board) else {
            return render_board_with(board, 0, glyphs);
        };

        let mut output = String::new();
        let label_width = bounds.min_y.to_string().len().max(bounds.max_y.to_string().len());

        // Header with the last digit of each column
        output.push_str(&" ".repeat(label_width + 1));
        for x in bounds.min_x..=bounds.max_x {
            output.push_str(&format!("{:2}", x.rem_euclid(10)));
        }
        output.push('\n');

        for y in bounds.min_y..=bounds.max_y {
            output.push_str(&format!("{:>width$} ", y, width = label_width));
            for x in bounds.min_x..=bounds.max_x {
                let alive = board.contains(&Cell::new(x, y));
                output.push(' ');
                output.push(if alive { glyphs.alive } else { glyphs.dead });
            }
            output.push('\n');
        }

        output
    }

    /// One-line population trace of a history
    pub fn format_population_trace(history: &History) -> String {
        let populations = history.populations();
        let trace: Vec<String> = populations.iter().map(usize::to_string).collect();
        format!("Population by generation: {}", trace.join(" → "))
    }

    /// Write a frame to `out` and flush
    pub fn write_frame<W: Write>(out: &mut W, frame: &str) -> std::io::Result<()> {
        out.write_all(frame.as_bytes())?;
        out.flush()
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Format debug message
    pub fn debug(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(i64, i64)]) -> Board {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_format_frame() {
        let blinker = board(&[(0, 0), (1, 0), (2, 0)]);
        let glyphs = Glyphs::default();

        let plain = BoardFormatter::format_frame(&blinker, 0, &glyphs, false);
        assert_eq!(plain, "XXX\n\n");

        let cleared = BoardFormatter::format_frame(&blinker, 0, &glyphs, true);
        assert!(cleared.starts_with(CLEAR_SCREEN));
        assert!(cleared.ends_with("XXX\n\n"));
    }

    #[test]
    fn test_format_board_with_coords() {
        let cells = board(&[(-1, 9), (1, 10)]);
        let output = BoardFormatter::format_board_with_coords(&cells, &Glyphs::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "    9 0 1");
        assert_eq!(lines[1], " 9  X . .");
        assert_eq!(lines[2], "10  . . X");
    }

    #[test]
    fn test_format_empty_board_with_coords() {
        let output = BoardFormatter::format_board_with_coords(&Board::new(), &Glyphs::default());
        assert_eq!(output, "empty");
    }

    #[test]
    fn test_population_trace() {
        let mut history = History::new(vec![], board(&[(0, 0), (2, 0)]));
        history.push(board(&[(1, 0)]));
        history.push(Board::new());
        assert_eq!(
            BoardFormatter::format_population_trace(&history),
            "Population by generation: 2 → 1 → 0"
        );
    }

    #[test]
    fn test_write_frame() {
        let mut out = Vec::new();
        BoardFormatter::write_frame(&mut out, "X\n\n").unwrap();
        assert_eq!(out, b"X\n\n");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
