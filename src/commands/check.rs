//! Word checking command
//!
//! Looks for specific words on a board and reports the path for each one found.

use crate::core::{Board, Cell};
use crate::dictionary::Dictionary;
use crate::solver::Solver;

/// Outcome of looking for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub found: bool,
    pub word: String,
    pub path: Vec<Cell>,
}

/// Check each word against the board
///
/// Words are searched concurrently; results keep the input order. A word that
/// is not on the board gets `found: false` and an empty path, echoing the word
/// as given.
///
/// # Errors
///
/// Returns an error if the dictionary fails or a search runs out of time.
pub fn check_words<D: Dictionary + Sync + ?Sized>(
    solver: &Solver<'_, D>,
    board: &Board,
    words: &[String],
) -> Result<Vec<CheckResult>, String> {
    let results = solver
        .has_words(board, words)
        .map_err(|e| format!("Check failed: {e}"))?;

    Ok(words
        .iter()
        .zip(results)
        .map(|(word, result)| match result {
            Some(found) => {
                let (word, path) = found.into_parts();
                CheckResult {
                    found: true,
                    word,
                    path,
                }
            }
            None => CheckResult {
                found: false,
                word: word.clone(),
                path: Vec::new(),
            },
        })
        .collect())
}
