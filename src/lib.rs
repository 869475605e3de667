//! Bobble Solver
//!
//! Deals Bobble boards from the classic sixteen dice and finds words on them
//! with a prefix-pruned depth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use bobble_solver::core::Board;
//! use bobble_solver::dictionary::TrieDictionary;
//! use bobble_solver::solver::Solver;
//!
//! let board = Board::from_literal(3, "CATXXXXXX").unwrap();
//! let dict = TrieDictionary::from_words(["CAT", "DOG"]);
//! let solver = Solver::new(&dict);
//!
//! let found = solver.has_word(&board, "cat").unwrap().unwrap();
//! println!("{found}");
//! assert_eq!(found.path().len(), 3);
//! ```

// Core domain types
pub mod core;

// Board generation
pub mod generator;

// Word lookup adapters
pub mod dictionary;

// Word search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
