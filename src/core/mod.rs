//! Core domain types for Bobble
//!
//! This module contains the fundamental value types shared by the generator and
//! the search engine. Nothing here performs I/O or touches a dictionary.

mod board;
pub(crate) mod cell;
mod word_path;

pub use board::{Board, BoardError, MIN_SIZE};
pub use cell::Cell;
pub use word_path::WordPath;

/// Words shorter than this are never accepted, whatever the dictionary says
pub const MIN_WORD_LEN: usize = 3;
