//! Dictionary lookups used by the search engine
//!
//! The engine only ever asks two questions: is this exact string a word, and
//! does any word start with it. Anything that can answer both (an in-memory
//! trie, a sorted list, a database table) can back a search.

pub mod sorted;
pub mod trie;

pub use sorted::SortedDictionary;
pub use trie::TrieDictionary;

use std::fmt;

/// Error raised when the backing store cannot answer a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    Unavailable(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Dictionary unavailable: {reason}"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Combined answer for one candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lookup {
    /// The candidate is itself a word
    pub is_word: bool,
    /// Some word starts with the candidate (the candidate included)
    pub has_prefix: bool,
}

/// Exact-match and prefix queries over a word set
///
/// Candidates are uppercase ASCII. Implementations must answer for any length.
pub trait Dictionary {
    /// Exact membership test
    ///
    /// # Errors
    /// Returns `DictionaryError` if the backing store cannot be queried.
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError>;

    /// True iff some entry begins with `candidate`, `candidate` itself included
    ///
    /// # Errors
    /// Returns `DictionaryError` if the backing store cannot be queried.
    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError>;

    /// Answer both queries at once
    ///
    /// The default asks [`Dictionary::is_word`] first and skips the prefix query
    /// when it succeeds, since a word is always a prefix of itself.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the backing store cannot be queried.
    fn lookup(&self, candidate: &str) -> Result<Lookup, DictionaryError> {
        if self.is_word(candidate)? {
            return Ok(Lookup {
                is_word: true,
                has_prefix: true,
            });
        }
        Ok(Lookup {
            is_word: false,
            has_prefix: self.has_prefix(candidate)?,
        })
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError> {
        (**self).is_word(candidate)
    }

    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError> {
        (**self).has_prefix(candidate)
    }

    fn lookup(&self, candidate: &str) -> Result<Lookup, DictionaryError> {
        (**self).lookup(candidate)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError> {
        (**self).is_word(candidate)
    }

    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError> {
        (**self).has_prefix(candidate)
    }

    fn lookup(&self, candidate: &str) -> Result<Lookup, DictionaryError> {
        (**self).lookup(candidate)
    }
}
