//! Move representation and move application.

use std::fmt;

use crate::board::{Board, Cell, Color, Square, in_bounds, promote, square_name};

/// One diagonal displacement of a single piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveStep {
    pub from: Square,
    pub to: Square,
}

impl MoveStep {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// True iff both endpoints are on the board and `to` lies on a diagonal
    /// through `from`, at least one square away.
    pub fn is_diagonal(&self) -> bool {
        in_bounds(self.from)
            && in_bounds(self.to)
            && self.from != self.to
            && self.to.0.abs_diff(self.from.0) == self.to.1.abs_diff(self.from.1)
    }

    /// Unit diagonal direction from `from` towards `to`.
    #[inline]
    pub fn direction(&self) -> (isize, isize) {
        let dr = if self.to.0 > self.from.0 { 1 } else { -1 };
        let dc = if self.to.1 > self.from.1 { 1 } else { -1 };
        (dr, dc)
    }

    /// Squares strictly between `from` and `to` along the diagonal.
    pub fn between(&self) -> impl Iterator<Item = Square> {
        let (dr, dc) = self.direction();
        let (r0, c0) = (self.from.0 as isize, self.from.1 as isize);
        let len = self.to.0.abs_diff(self.from.0) as isize;
        (1..len).map(move |i| ((r0 + dr * i) as usize, (c0 + dc * i) as usize))
    }
}

/// A complete move: either one quiet step, or a chain of capturing jumps.
///
/// A sequence with `captures == 0` is a simple move and has exactly one step.
/// Otherwise each step starts where the previous one ended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    pub steps: Vec<MoveStep>,
    pub captures: usize,
}

impl MoveSequence {
    /// A one-step non-capturing move.
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            steps: vec![MoveStep::new(from, to)],
            captures: 0,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captures > 0
    }

    /// Origin of the first step.
    pub fn from(&self) -> Option<Square> {
        self.steps.first().map(|s| s.from)
    }

    /// Destination of the last step.
    pub fn to(&self) -> Option<Square> {
        self.steps.last().map(|s| s.to)
    }

    /// Human-readable form, e.g. `(C3)->(E5), (E5)->(C7)`.
    pub fn notation(&self, viewer: Color) -> String {
        self.steps
            .iter()
            .map(|s| format!("({})->({})", square_name(s.from, viewer), square_name(s.to, viewer)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation(Color::Light))?;
        if self.is_capture() {
            write!(f, " x{}", self.captures)?;
        }
        Ok(())
    }
}

/// Move the piece of `step` and, for a capture, remove the one piece lying
/// between its endpoints. The destination must be empty. Crowns on arrival.
///
/// `step` must satisfy [`MoveStep::is_diagonal`]; [`make_move_sequence`]
/// checks this before applying anything.
pub fn make_one_step(board: &mut Board, step: &MoveStep, is_capture: bool) {
    let piece = board.get(step.from);
    board.set(step.from, Cell::Empty);
    board.set(step.to, piece);

    if is_capture {
        if let Some(victim) = step.between().find(|&sq| !board.get(sq).is_empty()) {
            board.set(victim, Cell::Empty);
        }
    }

    promote(board, step.to);
}

/// Apply every step of `seq` to `board`.
///
/// Returns `false` and leaves the board untouched if `seq` has no steps, a
/// step is not a diagonal move between two board squares, or the steps do not
/// chain.
pub fn make_move_sequence(board: &mut Board, seq: &MoveSequence) -> bool {
    if seq.steps.is_empty() || !seq.steps.iter().all(MoveStep::is_diagonal) {
        return false;
    }
    if seq.steps.windows(2).any(|w| w[0].to != w[1].from) {
        return false;
    }
    let capture = seq.is_capture();
    for step in &seq.steps {
        make_one_step(board, step, capture);
    }
    true
}
