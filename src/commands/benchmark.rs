//! Benchmark command
//!
//! Deals many boards and lists every word on each, in parallel.

use crate::core::Board;
use crate::dictionary::Dictionary;
use crate::generator::generate_with_rng;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub size: usize,
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Board literal with the most words, and its count
    pub richest_board: Option<(String, usize)>,
    /// Longest word seen on any board
    pub longest_word: Option<String>,
    /// Word length -> number of words of that length
    pub length_distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate `count` boards of the given size and search each for every word
///
/// Boards are dealt from `seed` so runs are repeatable; searches run on the
/// rayon pool.
///
/// # Errors
///
/// Returns an error if `size` is invalid or any search fails.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark<D: Dictionary + Sync + ?Sized>(
    solver: &Solver<'_, D>,
    size: usize,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let boards = (0..count)
        .map(|_| generate_with_rng(size, &mut rng))
        .collect::<Result<Vec<Board>, _>>()
        .map_err(|e| format!("Invalid board: {e}"))?;

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let per_board = boards
        .par_iter()
        .map(|board| {
            let words = solver.find_all_words(board);
            pb.inc(1);
            words.map(|words| (board, words))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Benchmark search failed: {e}"))?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut length_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut longest_word: Option<String> = None;
    for (_, words) in &per_board {
        for found in words {
            *length_distribution.entry(found.len()).or_insert(0) += 1;
            if longest_word.as_ref().is_none_or(|w| found.len() > w.len()) {
                longest_word = Some(found.word().to_string());
            }
        }
    }

    let counts: Vec<usize> = per_board.iter().map(|(_, words)| words.len()).collect();
    let total_words: usize = counts.iter().sum();
    let richest_board = per_board
        .iter()
        .rev()
        .max_by_key(|(_, words)| words.len())
        .map(|(board, words)| (board.to_literal(), words.len()));

    Ok(BenchmarkResult {
        size,
        total_boards: count,
        total_words,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        min_words: counts.iter().copied().min().unwrap_or(0),
        max_words: counts.iter().copied().max().unwrap_or(0),
        richest_board,
        longest_word,
        length_distribution,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TrieDictionary;
    use crate::wordlists::EMBEDDED;

    fn dictionary() -> TrieDictionary {
        TrieDictionary::from_words(EMBEDDED)
    }

    #[test]
    fn benchmark_runs() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        let result = run_benchmark(&solver, 4, 8, 42, false).unwrap();

        assert_eq!(result.total_boards, 8);
        assert_eq!(result.size, 4);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn distribution_sums_to_total() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        let result = run_benchmark(&solver, 4, 6, 7, false).unwrap();

        let distribution_sum: usize = result.length_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert!(result.length_distribution.keys().all(|&len| len >= 3));
    }

    #[test]
    fn same_seed_same_result() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        let a = run_benchmark(&solver, 4, 5, 99, false).unwrap();
        let b = run_benchmark(&solver, 4, 5, 99, false).unwrap();

        assert_eq!(a.total_words, b.total_words);
        assert_eq!(a.richest_board, b.richest_board);
        assert_eq!(a.longest_word, b.longest_word);
    }

    #[test]
    fn zero_boards() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        let result = run_benchmark(&solver, 4, 0, 1, false).unwrap();

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.total_words, 0);
        assert!(result.richest_board.is_none());
    }

    #[test]
    fn invalid_size_is_reported() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        assert!(run_benchmark(&solver, 1, 3, 1, false).is_err());
    }
}
