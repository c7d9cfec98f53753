//! Circuit board parsing, queries, and rendering.
//!
//! A board is a rectangular grid of one-byte cell marks with exactly one
//! start component and one end component. Boards are parsed once and then
//! cloned whenever a trace needs its own copy to stamp, so the clone is a
//! bulk copy of a flat `Vec`.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{BoardError, FormatViolation};

/// A `(row, col)` grid coordinate.
///
/// `(0, 0)` is the top-left corner; rows grow downward, columns grow
/// right. Signed so neighbor probes can step off the board without
/// ceremony; out-of-bounds coordinates simply answer "not open".
pub type Coord = (i32, i32);

/// Cell marking on a circuit board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Cell {
    /// Traversable empty cell (`O`).
    Open,
    /// Non-traversable cell (`X`).
    Blocked,
    /// The starting component (`1`), exactly one per board.
    Start,
    /// The ending component (`2`), exactly one per board.
    End,
    /// A routed trace cell (`T`); appears only on rendered boards.
    Trace,
}

impl Cell {
    /// Parses a single input token into a cell mark.
    ///
    /// `Trace` has no input token: it only exists on rendered output.
    fn from_token(token: &str) -> Option<Cell> {
        match token {
            "O" => Some(Cell::Open),
            "X" => Some(Cell::Blocked),
            "1" => Some(Cell::Start),
            "2" => Some(Cell::End),
            _ => None,
        }
    }

    /// The output token for this mark.
    fn token(self) -> &'static str {
        match self {
            Cell::Open => "O",
            Cell::Blocked => "X",
            Cell::Start => "1",
            Cell::End => "2",
            Cell::Trace => "T",
        }
    }
}

/// A parsed circuit board.
///
/// Structurally immutable after parse; the only mutation pathway is
/// cloning and stamping `Trace` marks on the copy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell grid, `rows * cols` entries.
    cells: Vec<Cell>,
    start: Coord,
    end: Coord,
}

impl Board {
    /// Reads and parses a board file.
    pub fn parse(path: impl AsRef<Path>) -> Result<Board, BoardError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoardError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Board::parse_str(&text).map_err(BoardError::InvalidFormat)
    }

    /// Parses board text: a `rows cols` header line followed by exactly
    /// `rows * cols` whitespace-separated cell tokens.
    ///
    /// Line breaks between rows are conventional but not required; the
    /// tokens fill the grid in row-major order wherever they fall.
    pub fn parse_str(text: &str) -> Result<Board, FormatViolation> {
        let mut lines = text.lines().enumerate();
        let (_, header) = lines
            .find(|(_, line)| !line.trim().is_empty())
            .ok_or(FormatViolation::MissingHeader)?;
        let (rows, cols) = parse_header(header)?;

        let expected = rows * cols;
        let mut cells = Vec::with_capacity(expected);
        let mut start = None;
        let mut end = None;
        let mut found = 0usize;

        for (index, line) in lines {
            let line_no = index + 1;
            for token in line.split_whitespace() {
                found += 1;
                if found > expected {
                    // keep counting so the diagnostic reports the real total
                    continue;
                }
                let cell =
                    Cell::from_token(token).ok_or_else(|| FormatViolation::UnknownToken {
                        token: token.to_string(),
                        line: line_no,
                    })?;
                let coord = ((cells.len() / cols) as i32, (cells.len() % cols) as i32);
                match cell {
                    Cell::Start => {
                        if start.replace(coord).is_some() {
                            return Err(FormatViolation::DuplicateStart { line: line_no });
                        }
                    }
                    Cell::End => {
                        if end.replace(coord).is_some() {
                            return Err(FormatViolation::DuplicateEnd { line: line_no });
                        }
                    }
                    _ => {}
                }
                cells.push(cell);
            }
        }

        if found != expected {
            return Err(FormatViolation::CellCount { expected, found });
        }
        let start = start.ok_or(FormatViolation::MissingStart)?;
        let end = end.ok_or(FormatViolation::MissingEnd)?;

        Ok(Board {
            rows,
            cols,
            cells,
            start,
            end,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Coordinate of the start component, cached at parse time.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Coordinate of the end component, cached at parse time.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// The mark at `(row, col)`, or `None` out of bounds.
    pub fn at(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// True iff `(row, col)` is in bounds and open.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.at(row, col) == Some(Cell::Open)
    }

    /// Overwrites an open cell with a new mark.
    ///
    /// Callers only stamp `Trace`, and only on private board copies. The
    /// start and end components are never rewritten because those cells
    /// are not `Open`.
    pub fn mark(&mut self, row: i32, col: i32, mark: Cell) {
        debug_assert!(
            self.is_open(row, col),
            "mark target ({row}, {col}) must be an open cell"
        );
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = mark;
        }
    }

    /// Linear index for `(row, col)`, or `None` out of bounds.
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            None
        } else {
            Some(row as usize * self.cols + col as usize)
        }
    }
}

impl fmt::Display for Board {
    /// Renders the grid as space-separated tokens, one row per line,
    /// every row newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(cell.token())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parses the `rows cols` header: exactly two positive integers.
fn parse_header(line: &str) -> Result<(usize, usize), FormatViolation> {
    let mut fields = line.split_whitespace();
    let rows = fields
        .next()
        .and_then(|field| field.parse::<usize>().ok())
        .filter(|&n| n > 0);
    let cols = fields
        .next()
        .and_then(|field| field.parse::<usize>().ok())
        .filter(|&n| n > 0);
    match (rows, cols, fields.next()) {
        (Some(rows), Some(cols), None) => Ok((rows, cols)),
        _ => Err(FormatViolation::BadHeader {
            header: line.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 4\n1 O O 2\nX X O X\nO O O O\n";

    #[test]
    fn test_parse_caches_dimensions_and_terminals() {
        let board = Board::parse_str(SAMPLE).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.start(), (0, 0));
        assert_eq!(board.end(), (0, 3));
    }

    #[test]
    fn test_at_reports_marks_and_tolerates_out_of_bounds() {
        let board = Board::parse_str(SAMPLE).unwrap();
        assert_eq!(board.at(0, 0), Some(Cell::Start));
        assert_eq!(board.at(1, 0), Some(Cell::Blocked));
        assert_eq!(board.at(2, 1), Some(Cell::Open));
        assert_eq!(board.at(-1, 0), None);
        assert_eq!(board.at(0, -1), None);
        assert_eq!(board.at(3, 0), None);
        assert_eq!(board.at(0, 4), None);
    }

    #[test]
    fn test_is_open_is_false_for_terminals_blocks_and_out_of_bounds() {
        let board = Board::parse_str(SAMPLE).unwrap();
        assert!(board.is_open(0, 1));
        assert!(!board.is_open(0, 0));
        assert!(!board.is_open(0, 3));
        assert!(!board.is_open(1, 0));
        assert!(!board.is_open(-1, 2));
        assert!(!board.is_open(0, 99));
    }

    #[test]
    fn test_tokens_may_break_lines_anywhere() {
        let one_per_line = Board::parse_str("2 2\n1\nO\nO\n2\n").unwrap();
        let single_line = Board::parse_str("2 2\n1 O O 2\n").unwrap();
        let conventional = Board::parse_str("2 2\n1 O\nO 2\n").unwrap();
        assert_eq!(one_per_line, single_line);
        assert_eq!(single_line, conventional);
    }

    #[test]
    fn test_header_may_follow_blank_lines() {
        let board = Board::parse_str("\n   \n2 2\n1 O\nO 2\n").unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.start(), (0, 0));
    }

    #[test]
    fn test_clone_is_independent_of_the_original() {
        let board = Board::parse_str(SAMPLE).unwrap();
        let mut copy = board.clone();
        copy.mark(0, 1, Cell::Trace);
        assert_eq!(copy.at(0, 1), Some(Cell::Trace));
        assert_eq!(board.at(0, 1), Some(Cell::Open));
    }

    #[test]
    fn test_render_emits_rows_of_space_separated_tokens() {
        let board = Board::parse_str(SAMPLE).unwrap();
        assert_eq!(board.to_string(), "1 O O 2\nX X O X\nO O O O\n");
    }

    #[test]
    fn test_render_round_trips_through_the_parser() {
        let board = Board::parse_str(SAMPLE).unwrap();
        let rendered = format!("{} {}\n{}", board.rows(), board.cols(), board);
        assert_eq!(Board::parse_str(&rendered).unwrap(), board);
    }

    #[test]
    fn test_empty_input_is_a_missing_header() {
        assert_eq!(Board::parse_str(""), Err(FormatViolation::MissingHeader));
        assert_eq!(
            Board::parse_str("  \n\t\n"),
            Err(FormatViolation::MissingHeader)
        );
    }

    #[test]
    fn test_malformed_headers_are_rejected() {
        for text in ["3\nO", "3 X\nO", "0 3\nO", "3 0\nO", "3 3 3\nO", "-1 3\nO"] {
            match Board::parse_str(text) {
                Err(FormatViolation::BadHeader { .. }) => {}
                other => panic!("expected BadHeader for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_tokens_are_located_by_line() {
        assert_eq!(
            Board::parse_str("2 2\n1 O\nQ 2\n"),
            Err(FormatViolation::UnknownToken {
                token: "Q".to_string(),
                line: 3,
            })
        );
    }

    #[test]
    fn test_trace_is_not_a_valid_input_token() {
        assert_eq!(
            Board::parse_str("2 2\n1 T\nO 2\n"),
            Err(FormatViolation::UnknownToken {
                token: "T".to_string(),
                line: 2,
            })
        );
    }

    #[test]
    fn test_too_few_tokens_fail_the_cell_count() {
        assert_eq!(
            Board::parse_str("3 3\nX 1 X\nX O X\nX 2\n"),
            Err(FormatViolation::CellCount {
                expected: 9,
                found: 8,
            })
        );
    }

    #[test]
    fn test_too_many_tokens_fail_the_cell_count() {
        assert_eq!(
            Board::parse_str("3 3\nX 1 X\nX O X\nX 2 X O\n"),
            Err(FormatViolation::CellCount {
                expected: 9,
                found: 10,
            })
        );
    }

    #[test]
    fn test_duplicate_terminals_are_rejected() {
        assert_eq!(
            Board::parse_str("2 2\n1 1\nO 2\n"),
            Err(FormatViolation::DuplicateStart { line: 2 })
        );
        assert_eq!(
            Board::parse_str("2 2\n1 2\n2 O\n"),
            Err(FormatViolation::DuplicateEnd { line: 3 })
        );
    }

    #[test]
    fn test_missing_terminals_are_rejected() {
        assert_eq!(
            Board::parse_str("2 2\nO O\nO 2\n"),
            Err(FormatViolation::MissingStart)
        );
        assert_eq!(
            Board::parse_str("2 2\n1 O\nO O\n"),
            Err(FormatViolation::MissingEnd)
        );
    }

    #[test]
    fn test_unreadable_path_is_file_not_found() {
        let err = Board::parse("definitely/not/a/board.txt").unwrap_err();
        assert!(matches!(err, BoardError::FileNotFound { .. }));
    }
}
