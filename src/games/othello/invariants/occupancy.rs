//! Occupancy invariant: each applied move adds exactly one piece.

use super::super::Game;
use super::Invariant;

/// Invariant: occupied cells = starting occupied cells + applied moves.
///
/// Flips change color, never occupancy, and no cell returns to empty.
pub struct OccupancyInvariant;

impl Invariant<Game> for OccupancyInvariant {
    fn holds(game: &Game) -> bool {
        game.board().occupied() == game.initial().occupied() + game.history().len()
    }

    fn description() -> &'static str {
        "Each applied move adds exactly one piece"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::{Cell, Color, Coordinate};

    #[test]
    fn test_holds_through_opening() {
        let mut game = Game::new();
        for coordinate in ["d3", "c3", "c4"] {
            game.play(coordinate.parse::<Coordinate>().unwrap()).unwrap();
            assert!(OccupancyInvariant::holds(&game));
        }
        assert_eq!(game.board().occupied(), 7);
    }

    #[test]
    fn test_extra_piece_violates() {
        let mut game = Game::new();
        game.board.place(Coordinate::new(0, 0), Color::White, &[]);
        assert_eq!(game.board().get(Coordinate::new(0, 0)), Some(Cell::Occupied(Color::White)));
        assert!(!OccupancyInvariant::holds(&game));
    }
}
