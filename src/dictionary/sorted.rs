//! Sorted word list with binary-search lookups

use super::{Dictionary, DictionaryError};

/// Word set stored as a sorted, de-duplicated vector
///
/// Smaller than a trie; each query costs `O(log n)` string comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedDictionary {
    words: Vec<String>,
}

impl SortedDictionary {
    /// Build from any list of words, normalized to uppercase
    ///
    /// # Examples
    /// ```
    /// use bobble_solver::dictionary::{Dictionary, SortedDictionary};
    ///
    /// let dict = SortedDictionary::from_words(["dog", "cat", "cat"]);
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.has_prefix("CA"), Ok(true));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_uppercase())
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for SortedDictionary {
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError> {
        Ok(self
            .words
            .binary_search_by(|w| w.as_str().cmp(candidate))
            .is_ok())
    }

    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError> {
        // The first word not less than the candidate is the only one that can
        // start with it
        let idx = self.words.partition_point(|w| w.as_str() < candidate);
        Ok(self
            .words
            .get(idx)
            .is_some_and(|w| w.starts_with(candidate)))
    }
}
