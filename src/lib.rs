//! Checkers-Rust: a move engine for 8x8 draughts with mandatory captures.
//!
//! Men move one square diagonally forward and capture in all four diagonal
//! directions. Kings slide any distance and capture at long range, landing on
//! any empty square behind the captured piece. Capturing is compulsory and
//! continues for as long as another capture is available.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and rule constants
//! - [`board`] - Board model, geometry helpers and square notation
//! - [`moves`] - Move steps, move sequences and move application
//! - [`movegen`] - Per-piece simple moves and capture search
//! - [`enumerate`] - Parallel side-wide enumeration and the mandatory-capture rule
//! - [`game`] - Turn bookkeeping and win detection
//!
//! ## Example
//!
//! ```
//! use checkers_rust::board::{Board, Color};
//! use checkers_rust::enumerate::{find_all_captures, find_all_normal_moves};
//! use checkers_rust::moves::make_move_sequence;
//!
//! let mut board = Board::initial();
//! assert!(find_all_captures(&board, Color::Light).is_empty());
//!
//! let moves = find_all_normal_moves(&board, Color::Light);
//! assert!(make_move_sequence(&mut board, &moves[0]));
//! ```

pub mod board;
pub mod constants;
pub mod enumerate;
pub mod game;
pub mod movegen;
pub mod moves;
