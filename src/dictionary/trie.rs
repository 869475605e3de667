//! In-memory trie dictionary
//!
//! Nodes live in a single arena and link to their children by index, so a
//! lookup walks one byte at a time with no allocation. Both queries share the
//! same walk, which makes [`Dictionary::lookup`] a single pass.

use super::{Dictionary, DictionaryError, Lookup};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<u8, usize>,
    terminal: bool,
}

/// Word set stored as a prefix tree
#[derive(Debug, Clone)]
pub struct TrieDictionary {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Build a trie from a list of words
    ///
    /// # Examples
    /// ```
    /// use bobble_solver::dictionary::{Dictionary, TrieDictionary};
    ///
    /// let dict = TrieDictionary::from_words(["cat", "cats", "dog"]);
    /// assert_eq!(dict.len(), 3);
    /// assert_eq!(dict.is_word("CAT"), Ok(true));
    /// assert_eq!(dict.has_prefix("DO"), Ok(true));
    /// assert_eq!(dict.has_prefix("DOGS"), Ok(false));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, normalized to uppercase
    ///
    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = 0;
        for byte in word.bytes().map(|b| b.to_ascii_uppercase()) {
            node = match self.nodes[node].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(byte, next);
                    next
                }
            };
        }

        let inserted = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, candidate: &str) -> Option<&Node> {
        let mut node = &self.nodes[0];
        for byte in candidate.bytes() {
            node = &self.nodes[*node.children.get(&byte)?];
        }
        Some(node)
    }
}

impl Dictionary for TrieDictionary {
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError> {
        Ok(self.find(candidate).is_some_and(|node| node.terminal))
    }

    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError> {
        Ok(self.lookup(candidate)?.has_prefix)
    }

    fn lookup(&self, candidate: &str) -> Result<Lookup, DictionaryError> {
        Ok(self.find(candidate).map_or_else(Lookup::default, |node| Lookup {
            is_word: node.terminal,
            // Every node below the root lies on the path of some inserted word
            has_prefix: node.terminal || !node.children.is_empty(),
        }))
    }
}
