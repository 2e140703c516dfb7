//! Board model, geometry helpers and human-facing notation.
//!
//! The board is a fixed 8x8 grid of [`Cell`]s. It is `Copy`, so the capture
//! search can take a private snapshot for every branch it explores.

use std::fmt;

use crate::constants::*;

/// A square on the board as `(row, col)`, both in `0..N`.
pub type Square = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Starts on rows 5..7 and moves first.
    Light,
    /// Starts on rows 0..2.
    Dark,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row direction of a man's non-capturing move.
    #[inline]
    pub fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The far rank on which this color's men are crowned.
    #[inline]
    pub fn king_row(self) -> usize {
        match self {
            Color::Light => LIGHT_KING_ROW,
            Color::Dark => DARK_KING_ROW,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

/// Content of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character rendering of the cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Man(Color::Light) => GLYPH_LIGHT_MAN,
            Cell::King(Color::Light) => GLYPH_LIGHT_KING,
            Cell::Man(Color::Dark) => GLYPH_DARK_MAN,
            Cell::King(Color::Dark) => GLYPH_DARK_KING,
        }
    }
}

/// True iff both coordinates lie on the board.
#[inline]
pub fn on_board(row: isize, col: isize) -> bool {
    (0..N as isize).contains(&row) && (0..N as isize).contains(&col)
}

/// True iff `sq` names a square of the board.
#[inline]
pub fn in_bounds((row, col): Square) -> bool {
    row < N && col < N
}

/// Color of the piece in `cell`, or `None` for an empty square.
#[inline]
pub fn color_of(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::Man(c) | Cell::King(c) => Some(c),
    }
}

#[inline]
pub fn is_king(cell: Cell) -> bool {
    matches!(cell, Cell::King(_))
}

/// Step `dist` squares from `sq` along the diagonal `dir`.
///
/// Returns `None` when the target falls off the board.
#[inline]
pub fn offset(sq: Square, dir: (isize, isize), dist: isize) -> Option<Square> {
    let row = sq.0 as isize + dir.0 * dist;
    let col = sq.1 as isize + dir.1 * dist;
    on_board(row, col).then_some((row as usize, col as usize))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// The standard starting layout: dark men on the three rows nearest row 0,
    /// light men on the three rows nearest row N-1, dark squares only.
    pub fn initial() -> Self {
        let mut board = Self::new();
        for row in 0..N {
            for col in 0..N {
                if (row + col) % 2 == 0 {
                    continue;
                }
                if row < START_ROWS {
                    board.cells[row][col] = Cell::Man(Color::Dark);
                } else if row >= N - START_ROWS {
                    board.cells[row][col] = Cell::Man(Color::Light);
                }
            }
        }
        board
    }

    /// Content of `sq`. Panics if `sq` is off the board; see [`in_bounds`].
    #[inline]
    pub fn get(&self, (row, col): Square) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, (row, col): Square, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Iterate over every square together with its content, row by row.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        (0..N).flat_map(move |row| (0..N).map(move |col| ((row, col), self.cells[row][col])))
    }

    /// Render the board as seen by `viewer`.
    ///
    /// Light sees row 0 at the top with columns in natural order; dark sees
    /// the board rotated by 180 degrees. Rank labels follow [`square_name`].
    pub fn render(&self, viewer: Color) -> String {
        let mut out = String::new();
        out.push_str("   | A B C D E F G H\n");
        out.push_str("   -----------------\n");
        for i in 0..N {
            let row = match viewer {
                Color::Light => i,
                Color::Dark => N - 1 - i,
            };
            out.push_str(&format!(" {:2} | ", i + 1));
            for j in 0..N {
                let col = match viewer {
                    Color::Light => j,
                    Color::Dark => N - 1 - j,
                };
                if j > 0 {
                    out.push(' ');
                }
                out.push(self.cells[row][col].glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Color::Light))
    }
}

/// Crown a man standing on its far rank. No-op for anything else.
pub fn promote(board: &mut Board, sq: Square) {
    if !in_bounds(sq) {
        return;
    }
    if let Cell::Man(color) = board.get(sq) {
        if sq.0 == color.king_row() {
            board.set(sq, Cell::King(color));
        }
    }
}

/// Number of pieces (men and kings) of `color` on the board.
pub fn count_pieces(board: &Board, color: Color) -> usize {
    board
        .squares()
        .filter(|&(_, cell)| color_of(cell) == Some(color))
        .count()
}

// =============================================================================
// Notation
// =============================================================================

/// Failure to read a square name such as `"C3"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Not exactly two characters
    Length(usize),
    /// File letter outside A..H
    File(char),
    /// Rank digit outside 1..8
    Rank(char),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Length(n) => write!(f, "expected two characters, got {n}"),
            NotationError::File(c) => write!(f, "bad file '{c}', expected A-H"),
            NotationError::Rank(c) => write!(f, "bad rank '{c}', expected 1-8"),
        }
    }
}

impl std::error::Error for NotationError {}

#[inline]
fn mirror(sq: Square, viewer: Color) -> Square {
    match viewer {
        Color::Light => sq,
        Color::Dark => (N - 1 - sq.0, N - 1 - sq.1),
    }
}

/// Name of a square as printed for `viewer`: file = column, rank = row + 1,
/// both mirrored when the board is shown from the dark side.
pub fn square_name(sq: Square, viewer: Color) -> String {
    let (row, col) = mirror(sq, viewer);
    let file = FILES.as_bytes()[col] as char;
    format!("{file}{}", row + 1)
}

/// Inverse of [`square_name`]. The file letter is case-insensitive.
pub fn parse_square(s: &str, viewer: Color) -> Result<Square, NotationError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 2 {
        return Err(NotationError::Length(chars.len()));
    }

    let file = chars[0].to_ascii_uppercase();
    let col = FILES.find(file).ok_or(NotationError::File(chars[0]))?;

    let rank = chars[1]
        .to_digit(10)
        .filter(|d| (1..=N as u32).contains(d))
        .ok_or(NotationError::Rank(chars[1]))?;

    Ok(mirror((rank as usize - 1, col), viewer))
}
