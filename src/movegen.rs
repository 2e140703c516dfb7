//! Per-piece move generation: quiet moves and capture chains.
//!
//! Capture search is a depth-first backtracking walk. Every branch receives
//! its own copy of the board with the jump already applied, so sibling
//! branches never observe each other's removals. The set of enemies taken so
//! far in the current chain travels along as a 64-bit mask.

use log::trace;

use crate::board::{Board, Color, Square, color_of, in_bounds, is_king, offset};
use crate::constants::{DIRECTIONS, N};
use crate::moves::{MoveSequence, MoveStep, make_one_step};

// =============================================================================
// Simple moves
// =============================================================================

/// Quiet moves of a man: one square along either forward diagonal.
pub fn man_simple_moves(board: &Board, from: Square, color: Color) -> Vec<MoveSequence> {
    if !in_bounds(from) {
        return Vec::new();
    }
    let forward = color.forward();
    [(forward, -1), (forward, 1)]
        .into_iter()
        .filter_map(|dir| offset(from, dir, 1))
        .filter(|&to| board.get(to).is_empty())
        .map(|to| MoveSequence::simple(from, to))
        .collect()
}

/// Quiet moves of a king: any distance along a diagonal until blocked.
pub fn king_simple_moves(board: &Board, from: Square) -> Vec<MoveSequence> {
    let mut result = Vec::new();
    if !in_bounds(from) {
        return result;
    }
    for dir in DIRECTIONS {
        let mut dist = 1;
        while let Some(to) = offset(from, dir, dist) {
            if !board.get(to).is_empty() {
                break;
            }
            result.push(MoveSequence::simple(from, to));
            dist += 1;
        }
    }
    result
}

/// Quiet moves of whatever piece stands on `from` (empty if none or off the board).
pub fn simple_moves_for_piece(board: &Board, from: Square) -> Vec<MoveSequence> {
    if !in_bounds(from) {
        return Vec::new();
    }
    let cell = board.get(from);
    match color_of(cell) {
        None => Vec::new(),
        Some(_) if is_king(cell) => king_simple_moves(board, from),
        Some(color) => man_simple_moves(board, from, color),
    }
}

// =============================================================================
// Capture search
// =============================================================================

#[inline]
fn bit((row, col): Square) -> u64 {
    1u64 << (row * N + col)
}

/// Every maximal capture chain available to the piece on `from`.
///
/// Returns an empty list when the square is empty or off the board, or the piece cannot take
/// anything. Chains that stop early are never reported: a chain ends only
/// when no further capture is possible from its landing square.
pub fn captures_for_piece(board: &Board, from: Square) -> Vec<MoveSequence> {
    let mut results = Vec::new();
    if !in_bounds(from) {
        return results;
    }
    let Some(color) = color_of(board.get(from)) else {
        return results;
    };

    let mut path = Vec::new();
    search_captures(*board, from, color, 0, &mut path, &mut results);
    results
}

/// Extend the chain in `path` from `at`, pushing finished chains onto `results`.
///
/// `board` is this branch's private snapshot. `used` marks enemies already
/// taken earlier in the chain; they may not be targeted again.
fn search_captures(
    board: Board,
    at: Square,
    color: Color,
    used: u64,
    path: &mut Vec<MoveStep>,
    results: &mut Vec<MoveSequence>,
) {
    let enemy = color.opponent();
    let is_foe = |sq: Square| color_of(board.get(sq)) == Some(enemy) && used & bit(sq) == 0;

    // (landing, victim) pairs reachable from `at`
    let mut jumps: Vec<(Square, Square)> = Vec::new();

    if is_king(board.get(at)) {
        for dir in DIRECTIONS {
            let mut foe: Option<Square> = None;
            let mut dist = 1;
            while let Some(sq) = offset(at, dir, dist) {
                let empty = board.get(sq).is_empty();
                match foe {
                    None if empty => {}
                    None if is_foe(sq) => foe = Some(sq),
                    None => break,
                    Some(victim) if empty => jumps.push((sq, victim)),
                    Some(_) => break,
                }
                dist += 1;
            }
        }
    } else {
        for dir in DIRECTIONS {
            let (Some(mid), Some(land)) = (offset(at, dir, 1), offset(at, dir, 2)) else {
                continue;
            };
            if is_foe(mid) && board.get(land).is_empty() {
                jumps.push((land, mid));
            }
        }
    }

    if jumps.is_empty() {
        if !path.is_empty() {
            let seq = MoveSequence {
                steps: path.clone(),
                captures: path.len(),
            };
            trace!("capture chain {seq}");
            results.push(seq);
        }
        return;
    }

    for (to, victim) in jumps {
        let step = MoveStep::new(at, to);
        let mut next = board;
        make_one_step(&mut next, &step, true);
        path.push(step);
        search_captures(next, to, color, used | bit(victim), path, results);
        path.pop();
    }
}
