//! Board preparation
//!
//! Either re-hydrates a board from its literal text or deals a fresh one.

use crate::core::{Board, MIN_SIZE};
use crate::generator::{generate, generate_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Board size used when neither a size nor a literal says otherwise
pub const DEFAULT_SIZE: usize = 5;

/// Pick the board size for a command
///
/// An explicit size wins. Otherwise a literal whose length is a perfect square
/// of at least [`MIN_SIZE`] decides, and failing that [`DEFAULT_SIZE`].
#[must_use]
pub fn resolve_size(requested: Option<usize>, literal: Option<&str>) -> usize {
    requested
        .or_else(|| literal.and_then(square_side))
        .unwrap_or(DEFAULT_SIZE)
}

fn square_side(text: &str) -> Option<usize> {
    let cells = text.chars().count();
    let side = cells.isqrt();
    (side * side == cells && side >= MIN_SIZE).then_some(side)
}

/// Build the board a command will work on
///
/// A `literal` wins over generation. A `seed` makes generation reproducible.
///
/// # Errors
///
/// Returns an error if the literal does not describe a `size`×`size` board of
/// letters, or if `size` is too small.
pub fn prepare_board(
    size: usize,
    literal: Option<&str>,
    seed: Option<u64>,
) -> Result<Board, String> {
    let board = match (literal, seed) {
        (Some(text), _) => Board::from_literal(size, text),
        (None, Some(seed)) => generate_with_rng(size, &mut StdRng::seed_from_u64(seed)),
        (None, None) => generate(size),
    };
    board.map_err(|e| format!("Invalid board: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_board_is_used_verbatim() {
        let board = prepare_board(3, Some("abcdefghi"), Some(1)).unwrap();
        assert_eq!(board.to_literal(), "ABCDEFGHI");
    }

    #[test]
    fn seeded_boards_repeat() {
        let a = prepare_board(5, None, Some(2024)).unwrap();
        let b = prepare_board(5, None, Some(2024)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 5);
    }

    #[test]
    fn random_board_has_requested_size() {
        let board = prepare_board(4, None, None).unwrap();
        assert_eq!(board.size(), 4);
    }

    #[test]
    fn malformed_literal_is_reported() {
        let err = prepare_board(4, Some("ABC"), None).unwrap_err();
        assert!(err.contains("exactly 16 letters"), "{err}");
    }

    #[test]
    fn tiny_size_is_reported() {
        assert!(prepare_board(2, None, Some(0)).is_err());
    }

    #[test]
    fn explicit_size_wins() {
        assert_eq!(resolve_size(Some(4), Some("ABCDEFGHI")), 4);
        assert_eq!(resolve_size(Some(6), None), 6);
    }

    #[test]
    fn square_literal_sets_size() {
        assert_eq!(resolve_size(None, Some("ABCDEFGHI")), 3);
        assert_eq!(resolve_size(None, Some("CATSOXXXGXXXDEAR")), 4);

        let literal = Some("abcdefghi");
        let board = prepare_board(resolve_size(None, literal), literal, None).unwrap();
        assert_eq!(board.size(), 3);
    }

    #[test]
    fn other_literals_fall_back_to_default() {
        assert_eq!(resolve_size(None, None), DEFAULT_SIZE);
        assert_eq!(resolve_size(None, Some("ABCDEFGH")), DEFAULT_SIZE);
        // A 2×2 square is too small to be a board
        assert_eq!(resolve_size(None, Some("ABCD")), DEFAULT_SIZE);
    }
}
