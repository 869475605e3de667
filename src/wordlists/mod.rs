//! Word lists for Bobble dictionaries
//!
//! Provides the embedded word list compiled into the binary, plus loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
