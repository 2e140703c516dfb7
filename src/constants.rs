//! Board geometry and rule constants.
//!
//! The board is a plain 8x8 grid addressed by `(row, col)`. Pieces only ever
//! stand on the dark squares, i.e. where `row + col` is odd.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Number of rows each side fills at the start of the game.
pub const START_ROWS: usize = 3;

/// The four diagonal directions as `(d_row, d_col)`.
/// Order: SE, SW, NE, NW
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// =============================================================================
// Promotion
// =============================================================================

/// Row on which a light man is crowned.
pub const LIGHT_KING_ROW: usize = 0;

/// Row on which a dark man is crowned.
pub const DARK_KING_ROW: usize = N - 1;

// =============================================================================
// Cell glyphs (rendering only)
// =============================================================================

pub const GLYPH_EMPTY: char = '.';
pub const GLYPH_LIGHT_MAN: char = 'w';
pub const GLYPH_LIGHT_KING: char = 'W';
pub const GLYPH_DARK_MAN: char = 'b';
pub const GLYPH_DARK_KING: char = 'B';

/// File letters used by the human-facing notation.
pub const FILES: &str = "ABCDEFGH";
