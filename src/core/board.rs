//! Bobble letter grid
//!
//! A `Board` is a square grid of letter values. Each letter value is the ASCII
//! code of a single uppercase glyph, stored row-major in one flat buffer so the
//! "every row has exactly `size` entries" invariant holds by construction.

use super::Cell;
use std::fmt;

/// Smallest playable board side
pub const MIN_SIZE: usize = 3;

/// A square grid of uppercase letter values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    letters: Vec<u8>,
}

/// Error type for boards that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side length is below [`MIN_SIZE`] or too large to address
    InvalidSize(usize),
    /// Literal text length does not equal `size * size`
    Malformed { expected: usize, actual: usize },
    /// A glyph that is not an ASCII letter
    InvalidLetter { index: usize, letter: char },
    /// A row whose length differs from the number of rows
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => {
                write!(f, "Board size must be at least {MIN_SIZE}, got {size}")
            }
            Self::Malformed { expected, actual } => {
                write!(
                    f,
                    "Board text must contain exactly {expected} letters, got {actual}"
                )
            }
            Self::InvalidLetter { index, letter } => {
                write!(f, "Board contains non-letter {letter:?} at position {index}")
            }
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Board row {row} has {actual} letters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Build a board from a row-major literal such as `"ABCDEFGHI"`
    ///
    /// Letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - `size` is below [`MIN_SIZE`]
    /// - `text` does not hold exactly `size * size` characters
    /// - `text` contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use bobble_solver::core::{Board, Cell};
    ///
    /// let board = Board::from_literal(3, "abcdefghi").unwrap();
    /// assert_eq!(board.letter(Cell::new(0, 0)), b'A');
    /// assert_eq!(board.letter(Cell::new(2, 2)), b'I');
    ///
    /// assert!(Board::from_literal(3, "ABCD").is_err());
    /// ```
    pub fn from_literal(size: usize, text: &str) -> Result<Self, BoardError> {
        let num_cells = checked_cell_count(size)?;

        let actual = text.chars().count();
        if actual != num_cells {
            return Err(BoardError::Malformed {
                expected: num_cells,
                actual,
            });
        }

        let letters = text
            .chars()
            .enumerate()
            .map(|(index, letter)| letter_value(index, letter))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { size, letters })
    }

    /// Build a board from explicit rows of letter values
    ///
    /// # Errors
    /// Returns `BoardError::Ragged` if any row length differs from the row count,
    /// `BoardError::InvalidSize` if there are fewer than [`MIN_SIZE`] rows and
    /// `BoardError::InvalidLetter` for values that are not ASCII letters.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let num_cells = checked_cell_count(size)?;

        let mut letters = Vec::with_capacity(num_cells);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::Ragged {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                letters.push(letter_value(row * size + col, char::from(value))?);
            }
        }

        Ok(Self { size, letters })
    }

    /// Wrap an already-validated buffer of uppercase letters
    pub(crate) fn from_letters(size: usize, letters: Vec<u8>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self { size, letters }
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letter value at `cell`
    ///
    /// # Panics
    /// Panics if `cell` lies outside the board
    #[inline]
    #[must_use]
    pub fn letter(&self, cell: Cell) -> u8 {
        assert!(
            cell.row < self.size && cell.col < self.size,
            "cell {cell} outside {0}x{0} board",
            self.size
        );
        self.letters[cell.row * self.size + cell.col]
    }

    /// Iterate over rows of letter values
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.letters.chunks_exact(self.size)
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// Concatenate the letters along `path`
    #[must_use]
    pub fn spell(&self, path: &[Cell]) -> String {
        path.iter().map(|&cell| char::from(self.letter(cell))).collect()
    }

    /// Row-major literal accepted by [`Board::from_literal`]
    #[must_use]
    pub fn to_literal(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

fn checked_cell_count(size: usize) -> Result<usize, BoardError> {
    if size < MIN_SIZE {
        return Err(BoardError::InvalidSize(size));
    }
    size.checked_mul(size).ok_or(BoardError::InvalidSize(size))
}

fn letter_value(index: usize, letter: char) -> Result<u8, BoardError> {
    if letter.is_ascii_alphabetic() {
        // ASCII letters fit in a single byte
        Ok(letter.to_ascii_uppercase() as u8)
    } else {
        Err(BoardError::InvalidLetter { index, letter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_literal_is_row_major() {
        let board = Board::from_literal(3, "ABCDEFGHI").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.letter(Cell::new(0, 0)), b'A');
        assert_eq!(board.letter(Cell::new(0, 2)), b'C');
        assert_eq!(board.letter(Cell::new(1, 0)), b'D');
        assert_eq!(board.letter(Cell::new(2, 2)), b'I');
    }

    #[test]
    fn from_literal_uppercases() {
        let board = Board::from_literal(3, "abcDEFghi").unwrap();
        assert_eq!(board.to_literal(), "ABCDEFGHI");
    }

    #[test]
    fn from_literal_length_mismatch() {
        assert_eq!(
            Board::from_literal(3, "ABCD"),
            Err(BoardError::Malformed {
                expected: 9,
                actual: 4
            })
        );
        assert_eq!(
            Board::from_literal(4, "ABCDEFGHI"),
            Err(BoardError::Malformed {
                expected: 16,
                actual: 9
            })
        );
    }

    #[test]
    fn from_literal_rejects_small_sizes() {
        assert_eq!(Board::from_literal(0, ""), Err(BoardError::InvalidSize(0)));
        assert_eq!(
            Board::from_literal(2, "ABCD"),
            Err(BoardError::InvalidSize(2))
        );
    }

    #[test]
    fn from_literal_rejects_non_letters() {
        assert_eq!(
            Board::from_literal(3, "ABCD3FGHI"),
            Err(BoardError::InvalidLetter {
                index: 4,
                letter: '3'
            })
        );
        assert!(Board::from_literal(3, "ABCD FGHI").is_err());
    }

    #[test]
    fn from_rows_builds_board() {
        let board = Board::from_rows(&["CAT", "XXX", "YYY"]).unwrap();
        assert_eq!(board.to_literal(), "CATXXXYYY");
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![b"CAT".to_vec(), b"XX".to_vec(), b"YYY".to_vec()];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::Ragged {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn from_rows_rejects_too_few_rows() {
        assert_eq!(
            Board::from_rows(&["AB", "CD"]),
            Err(BoardError::InvalidSize(2))
        );
    }

    #[test]
    fn cells_are_row_major() {
        let board = Board::from_literal(3, "ABCDEFGHI").unwrap();
        let cells: Vec<Cell> = board.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[8], Cell::new(2, 2));
    }

    #[test]
    fn spell_follows_path() {
        let board = Board::from_literal(3, "CATXXXYYY").unwrap();
        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(board.spell(&path), "CAT");
    }

    #[test]
    fn display_prints_rows() {
        let board = Board::from_literal(3, "ABCDEFGHI").unwrap();
        assert_eq!(format!("{board}"), "A B C\nD E F\nG H I\n");
    }

    #[test]
    fn error_messages() {
        let err = BoardError::Malformed {
            expected: 9,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Board text must contain exactly 9 letters, got 4"
        );
    }
}
