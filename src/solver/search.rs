//! Depth-first word search with prefix pruning
//!
//! A [`SearchSession`] owns all scratch state for one search (the visited
//! grid and the words found so far) and is consumed by running it, so nothing
//! carries over between searches and concurrent searches over one shared
//! [`Board`] never see each other's state.
//!
//! # Traversal order
//! Start cells are tried in row-major order. From each cell the neighbours are
//! visited with `dr` ascending then `dc` ascending. The first accepted word in
//! that order is the one [`find_word`] returns, so results are deterministic for
//! a given board, dictionary and target.

use super::{SearchConfig, SearchError};
use crate::core::cell::NEIGHBOR_OFFSETS;
use crate::core::{Board, Cell, MIN_WORD_LEN, WordPath};
use crate::dictionary::{Dictionary, Lookup};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Find the first word on the board in traversal order
///
/// With a non-empty `target` (matched case-insensitively) only that word can be
/// found, and it must also be a dictionary word. Without one, any dictionary
/// word of at least [`MIN_WORD_LEN`] letters qualifies.
///
/// # Errors
/// Returns `SearchError::Dictionary` if a lookup fails.
///
/// # Examples
/// ```
/// use bobble_solver::core::{Board, Cell};
/// use bobble_solver::dictionary::TrieDictionary;
/// use bobble_solver::solver::find_word;
///
/// let board = Board::from_literal(3, "CATXXXYYY").unwrap();
/// let dict = TrieDictionary::from_words(["CAT"]);
///
/// let found = find_word(&board, &dict, Some("cat")).unwrap().unwrap();
/// assert_eq!(found.word(), "CAT");
/// assert_eq!(found.path(), &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
///
/// assert!(find_word(&board, &dict, Some("dog")).unwrap().is_none());
/// ```
pub fn find_word<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
    target: Option<&str>,
) -> Result<Option<WordPath>, SearchError> {
    SearchSession::new(board, dictionary, target.unwrap_or(""), &SearchConfig::new()).find_first()
}

/// Find every dictionary word on the board
///
/// Words come back in traversal order. A word reachable by several paths is
/// reported once, with the first path found.
///
/// # Errors
/// Returns `SearchError::Dictionary` if a lookup fails.
pub fn find_all_words<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
) -> Result<Vec<WordPath>, SearchError> {
    SearchSession::new(board, dictionary, "", &SearchConfig::new()).find_all()
}

/// Scratch state for exactly one search over one board
pub struct SearchSession<'a, D: ?Sized> {
    board: &'a Board,
    dictionary: &'a D,
    config: &'a SearchConfig,
    target: String,
    visited: Vec<bool>,
    words: Vec<WordPath>,
    stop_after_first: bool,
    started: Instant,
    nodes: u64,
}

impl<'a, D: Dictionary + ?Sized> SearchSession<'a, D> {
    /// Prepare a search; an empty `target` means "any word"
    pub fn new(
        board: &'a Board,
        dictionary: &'a D,
        target: &str,
        config: &'a SearchConfig,
    ) -> Self {
        let size = board.size();
        Self {
            board,
            dictionary,
            config,
            target: target.to_ascii_uppercase(),
            visited: vec![false; size * size],
            words: Vec::new(),
            stop_after_first: false,
            started: Instant::now(),
            nodes: 0,
        }
    }

    /// Run until the first word is found
    ///
    /// # Errors
    /// Returns `SearchError` if a lookup fails or the time limit runs out.
    pub fn find_first(mut self) -> Result<Option<WordPath>, SearchError> {
        self.stop_after_first = true;
        self.run()?;
        Ok(self.words.into_iter().next())
    }

    /// Run the full search, keeping the first path for each distinct word
    ///
    /// # Errors
    /// Returns `SearchError` if a lookup fails or the time limit runs out.
    pub fn find_all(mut self) -> Result<Vec<WordPath>, SearchError> {
        self.run()?;

        let mut seen = FxHashSet::default();
        let mut words = self.words;
        words.retain(|found| seen.insert(found.word().to_string()));
        Ok(words)
    }

    fn run(&mut self) -> Result<(), SearchError> {
        let mut word = String::new();
        let mut path = Vec::new();

        for start in self.board.cells() {
            self.dfs(start, &mut word, &mut path)?;
            log::debug!(
                "Finished {}:{}. Found {} words",
                start.row,
                start.col,
                self.words.len()
            );
            if self.is_done() {
                break;
            }
        }

        log::debug!(
            "Search for {:?} visited {} nodes in {:?}",
            self.target,
            self.nodes,
            self.started.elapsed()
        );
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.stop_after_first && !self.words.is_empty()
    }

    fn dfs(
        &mut self,
        cell: Cell,
        word: &mut String,
        path: &mut Vec<Cell>,
    ) -> Result<(), SearchError> {
        let idx = cell.row * self.board.size() + cell.col;
        if self.visited[idx] {
            return Ok(());
        }
        self.check_deadline()?;
        self.nodes += 1;

        word.push(char::from(self.board.letter(cell)));
        path.push(cell);
        self.visited[idx] = true;

        let result = self.extend(cell, word, path);

        // Backtrack
        self.visited[idx] = false;
        word.pop();
        path.pop();

        result
    }

    fn extend(
        &mut self,
        cell: Cell,
        word: &mut String,
        path: &mut Vec<Cell>,
    ) -> Result<(), SearchError> {
        let targeted = !self.target.is_empty();
        if targeted && !self.target.starts_with(word.as_str()) {
            return Ok(());
        }

        // Too short to ask the dictionary; keep going
        let mut valid_prefix = true;

        if word.len() >= MIN_WORD_LEN {
            let lookup = if targeted {
                self.check_target(word)?
            } else {
                self.lookup(word)?
            };
            valid_prefix = lookup.has_prefix;

            if lookup.is_word {
                self.words.push(WordPath::new(word.clone(), path.clone()));
                if self.is_done() {
                    return Ok(());
                }
            }
        }

        if self
            .config
            .max_word_len
            .is_some_and(|max| word.len() >= max)
        {
            valid_prefix = false;
        }

        if valid_prefix {
            let size = self.board.size();
            for (dr, dc) in NEIGHBOR_OFFSETS {
                if let Some(next) = cell.offset(dr, dc, size) {
                    self.dfs(next, word, path)?;
                    if self.is_done() {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Acceptance for a targeted search
    ///
    /// The partial word is already known to be a prefix of the target, so the
    /// branch stays open unless the dictionary says otherwise on an exact match.
    fn check_target(&self, word: &str) -> Result<Lookup, SearchError> {
        if word != self.target {
            return Ok(Lookup {
                is_word: false,
                has_prefix: true,
            });
        }
        if self.config.verify_target {
            self.lookup(word)
        } else {
            Ok(Lookup {
                is_word: true,
                has_prefix: true,
            })
        }
    }

    fn lookup(&self, word: &str) -> Result<Lookup, SearchError> {
        self.dictionary
            .lookup(word)
            .inspect_err(|err| log::warn!("Lookup of {word:?} failed: {err}"))
            .map_err(SearchError::from)
    }

    fn check_deadline(&self) -> Result<(), SearchError> {
        if let Some(limit) = self.config.time_limit {
            let elapsed = self.started.elapsed();
            if elapsed >= limit {
                log::warn!("Search for {:?} hit its {limit:?} limit", self.target);
                return Err(SearchError::DeadlineExceeded { elapsed });
            }
        }
        Ok(())
    }
}
