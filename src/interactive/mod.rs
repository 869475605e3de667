//! Interactive terminal explorer
//!
//! Type a word, see where it sits on the board.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
