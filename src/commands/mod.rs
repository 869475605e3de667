//! Command implementations

pub mod benchmark;
pub mod board;
pub mod check;
pub mod words;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use board::{DEFAULT_SIZE, prepare_board, resolve_size};
pub use check::{CheckResult, check_words};
pub use words::{WordListResult, list_words};
