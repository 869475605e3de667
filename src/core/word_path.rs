//! A found word and the cells that spell it

use super::{Board, Cell, MIN_WORD_LEN};
use std::fmt;

/// A word paired with the ordered grid cells that spell it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPath {
    word: String,
    path: Vec<Cell>,
}

impl WordPath {
    #[must_use]
    pub const fn new(word: String, path: Vec<Cell>) -> Self {
        Self { word, path }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Number of cells in the path
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Cell>) {
        (self.word, self.path)
    }

    /// Check every structural invariant of a found word against `board`
    ///
    /// The word must be at least [`MIN_WORD_LEN`] letters, one cell per letter,
    /// with pairwise distinct and consecutively adjacent in-bounds cells whose
    /// letters spell the word.
    ///
    /// # Examples
    /// ```
    /// use bobble_solver::core::{Board, Cell, WordPath};
    ///
    /// let board = Board::from_literal(3, "CATXXXYYY").unwrap();
    /// let found = WordPath::new(
    ///     "CAT".to_string(),
    ///     vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    /// );
    /// assert!(found.is_spelled_on(&board));
    /// ```
    #[must_use]
    pub fn is_spelled_on(&self, board: &Board) -> bool {
        if self.word.len() < MIN_WORD_LEN || self.word.len() != self.path.len() {
            return false;
        }

        let size = board.size();
        if self
            .path
            .iter()
            .any(|cell| cell.row >= size || cell.col >= size)
        {
            return false;
        }

        let mut seen = vec![false; size * size];
        for cell in &self.path {
            let idx = cell.row * size + cell.col;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }

        self.path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
            && board.spell(&self.path) == self.word
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(f, "{} {}", self.word, cells.join(" → "))
    }
}
