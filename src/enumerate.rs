//! Side-wide move enumeration.
//!
//! The 8 rows are split into contiguous chunks, one per worker. Each chunk is
//! scanned in parallel against the same read-only board and produces its own
//! list; the lists are concatenated once every chunk has finished.
//!
//! # Mandatory capture
//!
//! Captures are compulsory. Whenever [`find_all_captures`] is non-empty for
//! the side to move, the result of [`find_all_normal_moves`] is not a set of
//! legal choices for that turn and must be discarded. [`legal_moves`] applies
//! this rule; callers that use the two finders directly must consult captures
//! first.
//!
//! The order of the returned moves is unspecified.

use std::ops::Range;

use log::debug;
use rayon::prelude::*;

use crate::board::{Board, Color, Square, color_of};
use crate::constants::N;
use crate::movegen::{captures_for_piece, simple_moves_for_piece};
use crate::moves::MoveSequence;

/// Split the board rows into contiguous ranges for `workers` workers.
///
/// Each range holds at least one row; with more workers than rows every row
/// becomes its own chunk. A worker count of zero is treated as one.
pub fn partition_rows(workers: usize) -> Vec<Range<usize>> {
    let chunk = (N / workers.max(1)).max(1);
    (0..N)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(N))
        .collect()
}

/// Scan `rows` in parallel, calling `per_piece` for every piece of `color`.
fn scan<F>(board: &Board, color: Color, workers: usize, per_piece: F) -> Vec<MoveSequence>
where
    F: Fn(&Board, Square) -> Vec<MoveSequence> + Sync,
{
    let chunks = partition_rows(workers);
    debug!("scanning {} chunk(s) for {color}", chunks.len());

    chunks
        .into_par_iter()
        .flat_map_iter(|rows| {
            let mut local = Vec::new();
            for row in rows {
                for col in 0..N {
                    if color_of(board.get((row, col))) == Some(color) {
                        local.extend(per_piece(board, (row, col)));
                    }
                }
            }
            local
        })
        .collect()
}

/// Every maximal capture chain for `color`, using `workers` chunks.
pub fn find_all_captures_with(board: &Board, color: Color, workers: usize) -> Vec<MoveSequence> {
    let moves = scan(board, color, workers, captures_for_piece);
    debug!("{color}: {} capture sequence(s)", moves.len());
    moves
}

/// Every non-capturing move for `color`, using `workers` chunks.
///
/// Only legal when [`find_all_captures_with`] is empty for the same position.
pub fn find_all_normal_moves_with(board: &Board, color: Color, workers: usize) -> Vec<MoveSequence> {
    let moves = scan(board, color, workers, simple_moves_for_piece);
    debug!("{color}: {} simple move(s)", moves.len());
    moves
}

/// Every maximal capture chain for `color`, one chunk per pool thread.
pub fn find_all_captures(board: &Board, color: Color) -> Vec<MoveSequence> {
    find_all_captures_with(board, color, rayon::current_num_threads())
}

/// Every non-capturing move for `color`, one chunk per pool thread.
///
/// Only legal when [`find_all_captures`] is empty for the same position.
pub fn find_all_normal_moves(board: &Board, color: Color) -> Vec<MoveSequence> {
    find_all_normal_moves_with(board, color, rayon::current_num_threads())
}

/// The moves `color` may actually choose from: all captures if there are
/// any, otherwise all simple moves.
pub fn legal_moves(board: &Board, color: Color) -> Vec<MoveSequence> {
    let captures = find_all_captures(board, color);
    if !captures.is_empty() {
        return captures;
    }
    find_all_normal_moves(board, color)
}

/// True iff `color` has at least one capture or simple move.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    !find_all_captures(board, color).is_empty() || !find_all_normal_moves(board, color).is_empty()
}
