//! Random board generation
//!
//! Boards are dealt from the [`DICE`] table. A pool of die indices with exactly
//! `size * size` entries is assembled first, then each cell (row-major) draws
//! one die from that pool without replacement and rolls it.
//!
//! For 3×3 boards the pool starts with the first [`SMALL_BOARD_DICE`] dice and
//! tops up from the rest, which keeps small boards on the easier dice. Larger
//! boards start from the full set and refill it as often as needed, so no die is
//! reused until every other die has been used in the current refill cycle.

pub mod dice;

pub use dice::{DICE, FACES, SMALL_BOARD_DICE};

use crate::core::{Board, BoardError, MIN_SIZE};
use rand::Rng;

/// Generate a random board using the thread-local RNG
///
/// # Errors
/// Returns `BoardError::InvalidSize` if `size` is below [`MIN_SIZE`].
///
/// # Examples
/// ```
/// use bobble_solver::generator::generate;
///
/// let board = generate(4).unwrap();
/// assert_eq!(board.size(), 4);
/// assert!(board.rows().all(|row| row.len() == 4));
/// ```
pub fn generate(size: usize) -> Result<Board, BoardError> {
    generate_with_rng(size, &mut rand::rng())
}

/// Generate a random board from an explicit RNG
///
/// # Errors
/// Returns `BoardError::InvalidSize` if `size` is below [`MIN_SIZE`] or
/// `size * size` overflows.
pub fn generate_with_rng<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, BoardError> {
    let mut available = select_dice(size, rng)?;

    let mut letters = Vec::with_capacity(available.len());
    while !available.is_empty() {
        let die = DICE[available.swap_remove(rng.random_range(0..available.len()))].as_bytes();
        letters.push(die[rng.random_range(0..die.len())]);
    }

    let board = Board::from_letters(size, letters);
    log::info!("Generated {size}x{size} board {}", board.to_literal());
    Ok(board)
}

/// Assemble the pool of die indices for a board of the given size
///
/// The returned pool has exactly `size * size` entries.
///
/// # Errors
/// Returns `BoardError::InvalidSize` if `size` is below [`MIN_SIZE`] or
/// `size * size` overflows.
pub fn select_dice<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Vec<usize>, BoardError> {
    if size < MIN_SIZE {
        return Err(BoardError::InvalidSize(size));
    }
    let num_cells = size
        .checked_mul(size)
        .ok_or(BoardError::InvalidSize(size))?;

    let (mut available, mut overflow) = initial_pools(size);
    available.reserve(num_cells.saturating_sub(available.len()));

    while available.len() < num_cells {
        if overflow.is_empty() {
            overflow = all_dice();
            continue;
        }
        available.push(overflow.swap_remove(rng.random_range(0..overflow.len())));
    }

    Ok(available)
}

/// Starting `(available, overflow)` pools before any top-up
#[must_use]
pub fn initial_pools(size: usize) -> (Vec<usize>, Vec<usize>) {
    if size == MIN_SIZE {
        (
            (0..SMALL_BOARD_DICE).collect(),
            (SMALL_BOARD_DICE..DICE.len()).collect(),
        )
    } else {
        (all_dice(), all_dice())
    }
}

fn all_dice() -> Vec<usize> {
    (0..DICE.len()).collect()
}
