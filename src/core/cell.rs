//! Grid positions
//!
//! A `Cell` is a 0-indexed `(row, col)` pair. Identity is purely positional.

use std::fmt;

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Neighbour offsets in traversal order: `dr` ascending, then `dc` ascending
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether `other` touches this cell, diagonals included
    ///
    /// A cell is not adjacent to itself.
    ///
    /// # Examples
    /// ```
    /// use bobble_solver::core::Cell;
    ///
    /// let a = Cell::new(1, 1);
    /// assert!(a.is_adjacent(Cell::new(0, 0)));
    /// assert!(a.is_adjacent(Cell::new(2, 1)));
    /// assert!(!a.is_adjacent(Cell::new(1, 3)));
    /// assert!(!a.is_adjacent(a));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr | dc) != 0
    }

    /// Move by `(dr, dc)`, returning `None` if the result leaves a `size`×`size` grid
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
