//! Main Bobble solver interface

use super::{SearchConfig, SearchError, SearchSession};
use crate::core::{Board, WordPath};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Bobble word finder
///
/// Holds a borrowed dictionary and the search options. Every call builds a
/// fresh [`SearchSession`], so one solver can serve any number of boards.
pub struct Solver<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    config: SearchConfig,
}

impl<'a, D: Dictionary + ?Sized> Solver<'a, D> {
    /// Create a solver with default options
    pub const fn new(dictionary: &'a D) -> Self {
        Self {
            dictionary,
            config: SearchConfig::new(),
        }
    }

    /// Create a solver with explicit options
    pub const fn with_config(dictionary: &'a D, config: SearchConfig) -> Self {
        Self { dictionary, config }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// First word in traversal order, optionally restricted to `target`
    ///
    /// # Errors
    /// Returns `SearchError` if a lookup fails or the time limit runs out.
    pub fn find_word(
        &self,
        board: &Board,
        target: Option<&str>,
    ) -> Result<Option<WordPath>, SearchError> {
        SearchSession::new(board, self.dictionary, target.unwrap_or(""), &self.config)
            .find_first()
    }

    /// Look for one specific word, ignoring case
    ///
    /// # Errors
    /// Returns `SearchError` if a lookup fails or the time limit runs out.
    pub fn has_word(&self, board: &Board, word: &str) -> Result<Option<WordPath>, SearchError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(None);
        }
        self.find_word(board, Some(word))
    }

    /// Every distinct word on the board, in traversal order
    ///
    /// # Errors
    /// Returns `SearchError` if a lookup fails or the time limit runs out.
    pub fn find_all_words(&self, board: &Board) -> Result<Vec<WordPath>, SearchError> {
        SearchSession::new(board, self.dictionary, "", &self.config).find_all()
    }
}

impl<D: Dictionary + Sync + ?Sized> Solver<'_, D> {
    /// Look for several words on the same board at once
    ///
    /// Each word gets its own search; results line up with `words`.
    ///
    /// # Errors
    /// Returns the first `SearchError` raised by any of the searches.
    pub fn has_words(
        &self,
        board: &Board,
        words: &[String],
    ) -> Result<Vec<Option<WordPath>>, SearchError> {
        words
            .par_iter()
            .map(|word| self.has_word(board, word))
            .collect()
    }
}
