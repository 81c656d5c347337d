//! Shared fixtures for integration tests.

#![allow(dead_code)]

use strictly_othello::{Board, Coordinate};

/// Both sides always play their first legal move in row-major order.
/// Black is skipped after moves 18, 19, 20 and 47; White wins 45-19.
pub const FIRST_LEGAL_GAME: [&str; 60] = [
    "d3", "c3", "b3", "b2", "b1", "a1", "c4", "c1", "c2", "d2", "d1", "e1", "a2", "a3", "f5",
    "e2", "f1", "g1", "f2", "e3", "b5", "b4", "a5", "a4", "c5", "a6", "f4", "f3", "g3", "g2",
    "h2", "h1", "h3", "h4", "g4", "c6", "g5", "h5", "b6", "c7", "d6", "e6", "f6", "g6", "h6",
    "h7", "a7", "b7", "a8", "d7", "e7", "f7", "g7", "g8", "b8", "c8", "d8", "e8", "f8", "h8",
];

/// Parses a coordinate, panicking on bad fixtures.
pub fn at(text: &str) -> Coordinate {
    text.parse().unwrap()
}

/// Parses a board diagram given line by line.
pub fn diagram(lines: &[&str]) -> Board {
    lines.join("\n").parse().unwrap()
}

/// Black to play g6: flips c6, d6, e6, f6 (west) and f5 (north-west).
pub fn bookend_example() -> Board {
    diagram(&[
        "  a b c d e f g h",
        "3       W B W",
        "4     W B B W B",
        "5   W B W B W",
        "6   B W W W W",
    ])
}

/// White has no legal move.
pub fn white_stuck_example() -> Board {
    diagram(&[
        "  a b c d e f g h",
        "1       W W W   W",
        "2     W W W W   W",
        "3   W W W B W W W",
        "4     W B B W B W",
        "5 W W W W W W B W",
        "6   W W W W W W W",
        "7     W W W W W W",
        "8 B B B B B B B W",
    ])
}
