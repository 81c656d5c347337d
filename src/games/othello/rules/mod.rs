//! Game rules for Othello.
//!
//! Pure functions over a [`Board`](super::Board): flip detection, legality,
//! move application, and scoring. Turn sequencing lives in `game`.

pub mod flips;
pub mod score;

pub use flips::{
    DIRECTIONS, apply_move, compute_flips, has_any_legal_move, is_legal, legal_moves, scan_line,
};
pub use score::{Outcome, Score, evaluate};
