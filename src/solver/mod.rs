//! Word search over a board
//!
//! A depth-first walk from every cell, in row-major order, through
//! 8-connected neighbours. Branches are cut as soon as the partial word stops
//! being a dictionary prefix (or a prefix of the requested target).

mod config;
mod engine;
mod error;
pub mod search;

pub use config::SearchConfig;
pub use engine::Solver;
pub use error::SearchError;
pub use search::{SearchSession, find_all_words, find_word};
