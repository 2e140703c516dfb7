//! Turn bookkeeping on top of the move engine.
//!
//! A [`Game`] owns the authoritative board. Each turn the legal moves are
//! enumerated first; exactly one of them is then applied. The board is never
//! mutated while an enumeration is in progress.

use log::info;

use crate::board::{Board, Color, Square, count_pieces};
use crate::enumerate::{has_any_move, legal_moves};
use crate::moves::{MoveSequence, make_move_sequence};

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left.
    Elimination,
    /// The loser is to move and has no legal move.
    NoMoves,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Won { winner: Color, reason: WinReason },
}

#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    /// Side to move
    pub to_move: Color,
    /// Number of moves played so far
    pub move_number: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard layout, light to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::Light)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            move_number: 0,
        }
    }

    /// Moves the side to move may choose from this turn.
    ///
    /// Only capture chains are returned when any capture exists.
    pub fn legal_moves(&self) -> Vec<MoveSequence> {
        legal_moves(&self.board, self.to_move)
    }

    /// Find the move in `moves` that starts on `from` and ends on `to`.
    pub fn find_move(moves: &[MoveSequence], from: Square, to: Square) -> Option<&MoveSequence> {
        moves
            .iter()
            .find(|m| m.from() == Some(from) && m.to() == Some(to))
    }

    /// Pick one of `moves` uniformly at random.
    pub fn choose_random<'a>(moves: &'a [MoveSequence], rng: &mut fastrand::Rng) -> Option<&'a MoveSequence> {
        if moves.is_empty() {
            return None;
        }
        moves.get(rng.usize(..moves.len()))
    }

    /// Apply `seq` for the side to move and pass the turn.
    ///
    /// Returns `false` without changing anything if `seq` is rejected by
    /// [`make_move_sequence`].
    pub fn play(&mut self, seq: &MoveSequence) -> bool {
        if !make_move_sequence(&mut self.board, seq) {
            return false;
        }
        self.move_number += 1;
        info!("move {}: {} plays {}", self.move_number, self.to_move, seq);
        self.to_move = self.to_move.opponent();
        true
    }

    /// Result of the game as it stands, from the side to move's point of view.
    pub fn status(&self) -> Status {
        for color in [Color::Light, Color::Dark] {
            if count_pieces(&self.board, color) == 0 {
                return Status::Won {
                    winner: color.opponent(),
                    reason: WinReason::Elimination,
                };
            }
        }
        if !has_any_move(&self.board, self.to_move) {
            return Status::Won {
                winner: self.to_move.opponent(),
                reason: WinReason::NoMoves,
            };
        }
        Status::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move, Color::Light);
        assert_eq!(game.move_number, 0);
        assert_eq!(game.status(), Status::Ongoing);
        assert_eq!(game.legal_moves().len(), 7);
    }

    #[test]
    fn test_find_move() {
        let game = Game::new();
        let moves = game.legal_moves();
        let found = Game::find_move(&moves, (5, 0), (4, 1)).expect("A6-B5 is legal");
        assert_eq!(found, &MoveSequence::simple((5, 0), (4, 1)));
        assert!(Game::find_move(&moves, (5, 0), (3, 2)).is_none());
    }

    #[test]
    fn test_play_passes_turn() {
        let mut game = Game::new();
        assert!(game.play(&MoveSequence::simple((5, 0), (4, 1))));
        assert_eq!(game.to_move, Color::Dark);
        assert_eq!(game.move_number, 1);

        assert!(!game.play(&MoveSequence::default()));
        assert_eq!(game.to_move, Color::Dark);
        assert_eq!(game.move_number, 1);
    }

    #[test]
    fn test_play_rejects_malformed_move() {
        let mut game = Game::new();
        let before = game.board;
        let bogus = MoveSequence::simple((5, 0), (5, 1));
        assert!(!game.play(&bogus));
        assert_eq!(game.board, before);
        assert_eq!(game.to_move, Color::Light);
        assert_eq!(game.move_number, 0);
    }

    #[test]
    fn test_choose_random() {
        let mut rng = fastrand::Rng::with_seed(7);
        assert!(Game::choose_random(&[], &mut rng).is_none());

        let moves = Game::new().legal_moves();
        for _ in 0..20 {
            let m = Game::choose_random(&moves, &mut rng).unwrap();
            assert!(moves.contains(m));
        }
    }

    #[test]
    fn test_elimination() {
        let mut board = Board::new();
        board.set((3, 4), Cell::Man(Color::Light));
        board.set((2, 3), Cell::Man(Color::Dark));
        let mut game = Game::from_board(board, Color::Light);

        let moves = game.legal_moves();
        assert_eq!(moves.len(), 1);
        assert!(game.play(&moves[0]));
        assert_eq!(
            game.status(),
            Status::Won {
                winner: Color::Light,
                reason: WinReason::Elimination
            }
        );
    }

    #[test]
    fn test_blocked_side_loses() {
        let mut board = Board::new();
        board.set((7, 0), Cell::Man(Color::Dark));
        board.set((6, 1), Cell::Man(Color::Light));
        board.set((5, 2), Cell::Man(Color::Light));
        let game = Game::from_board(board, Color::Dark);
        assert_eq!(
            game.status(),
            Status::Won {
                winner: Color::Light,
                reason: WinReason::NoMoves
            }
        );
    }

    #[test]
    fn test_random_selfplay_terminates_consistently() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut game = Game::new();
        for _ in 0..300 {
            if game.status() != Status::Ongoing {
                break;
            }
            let moves = game.legal_moves();
            let choice = Game::choose_random(&moves, &mut rng).unwrap().clone();
            let light_before = count_pieces(&game.board, Color::Light);
            let dark_before = count_pieces(&game.board, Color::Dark);
            let mover = game.to_move;
            assert!(game.play(&choice));

            let (mine, theirs) = match mover {
                Color::Light => (light_before, dark_before),
                Color::Dark => (dark_before, light_before),
            };
            assert_eq!(count_pieces(&game.board, mover), mine);
            assert_eq!(count_pieces(&game.board, mover.opponent()), theirs - choice.captures);
        }
    }
}
