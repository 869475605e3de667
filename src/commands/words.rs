//! Word listing command
//!
//! Finds every dictionary word on a board.

use crate::core::{Board, WordPath};
use crate::dictionary::Dictionary;
use crate::solver::Solver;
use std::time::{Duration, Instant};

/// Result of listing the words on a board
pub struct WordListResult {
    pub words: Vec<WordPath>,
    pub duration: Duration,
}

impl WordListResult {
    /// Longest word found, earliest in traversal order on ties
    #[must_use]
    pub fn longest(&self) -> Option<&WordPath> {
        self.words
            .iter()
            .rev()
            .max_by_key(|found| found.len())
    }
}

/// List every distinct word on the board in traversal order
///
/// # Errors
///
/// Returns an error if the dictionary fails or the search runs out of time.
pub fn list_words<D: Dictionary + ?Sized>(
    solver: &Solver<'_, D>,
    board: &Board,
) -> Result<WordListResult, String> {
    let start = Instant::now();
    let words = solver
        .find_all_words(board)
        .map_err(|e| format!("Word search failed: {e}"))?;

    Ok(WordListResult {
        words,
        duration: start.elapsed(),
    })
}
