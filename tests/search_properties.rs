//! End-to-end checks of board generation and word search through the public API

use bobble_solver::core::{Board, Cell, WordPath};
use bobble_solver::dictionary::{Dictionary, DictionaryError, TrieDictionary};
use bobble_solver::generator::{generate, generate_with_rng, initial_pools};
use bobble_solver::solver::{Solver, find_all_words, find_word};
use bobble_solver::wordlists::EMBEDDED;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn embedded() -> TrieDictionary {
    TrieDictionary::from_words(EMBEDDED)
}

fn assert_valid(found: &WordPath, board: &Board) {
    assert!(found.word().len() >= 3, "{found}");
    assert_eq!(found.path().len(), found.word().len(), "{found}");
    for (i, a) in found.path().iter().enumerate() {
        for b in &found.path()[i + 1..] {
            assert_ne!(a, b, "{found} revisits a cell");
        }
    }
    for pair in found.path().windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{found} jumps");
    }
    assert_eq!(board.spell(found.path()), found.word());
}

#[test]
fn generated_boards_are_square_and_uppercase() {
    for size in 3..=8 {
        let board = generate(size).unwrap();
        let rows: Vec<&[u8]> = board.rows().collect();
        assert_eq!(rows.len(), size);
        for row in rows {
            assert_eq!(row.len(), size);
            assert!(row.iter().all(u8::is_ascii_uppercase));
        }
    }
}

#[test]
fn small_board_pools_are_disjoint() {
    let (available, refill) = initial_pools(3);
    assert_eq!(available.len(), 6);
    assert_eq!(refill.len(), 10);
    assert!(available.iter().all(|die| !refill.contains(die)));
}

#[test]
fn literal_is_row_major() {
    let board = Board::from_literal(3, "ABCDEFGHI").unwrap();
    assert_eq!(board.letter(Cell::new(0, 0)), b'A');
    assert_eq!(board.letter(Cell::new(2, 2)), b'I');
    assert_eq!(board.to_literal(), "ABCDEFGHI");
}

#[test]
fn every_found_word_is_spelled_on_random_boards() {
    let dict = embedded();
    let mut rng = StdRng::seed_from_u64(0xB0B);
    for _ in 0..20 {
        let board = generate_with_rng(4, &mut rng).unwrap();
        if let Some(found) = find_word(&board, &dict, None).unwrap() {
            assert_valid(&found, &board);
        }
        for found in find_all_words(&board, &dict).unwrap() {
            assert_valid(&found, &board);
            assert_eq!(dict.is_word(found.word()), Ok(true));
        }
    }
}

#[test]
fn target_cat_is_found_with_its_path() {
    let dict = embedded();
    let board = Board::from_literal(3, "CATXXXXXX").unwrap();
    let found = find_word(&board, &dict, Some("CAT")).unwrap().unwrap();

    assert_eq!(found.word(), "CAT");
    assert_eq!(
        found.path(),
        &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
    );
}

#[test]
fn unspellable_target_is_not_found() {
    let dict = embedded();
    assert_eq!(dict.is_word("CAT"), Ok(true));

    // A and T are not adjacent here
    let board = Board::from_literal(3, "CXXAXXXXT").unwrap();
    assert_eq!(find_word(&board, &dict, Some("CAT")), Ok(None));
}

#[test]
fn board_without_words_yields_nothing() {
    let dict = embedded();
    let board = Board::from_literal(3, "XXXXXXXXX").unwrap();
    assert_eq!(find_word(&board, &dict, None), Ok(None));
    assert!(find_all_words(&board, &dict).unwrap().is_empty());
}

#[test]
fn repeated_searches_agree() {
    let dict = embedded();
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..10 {
        let board = generate_with_rng(5, &mut rng).unwrap();
        assert_eq!(
            find_word(&board, &dict, None).unwrap(),
            find_word(&board, &dict, None).unwrap()
        );
        assert_eq!(
            find_all_words(&board, &dict).unwrap(),
            find_all_words(&board, &dict).unwrap()
        );
    }
}

/// Fixed word set whose prefix answers can be cut off below `blocked`
struct Controlled {
    words: &'static [&'static str],
    blocked: Option<&'static str>,
}

impl Dictionary for Controlled {
    fn is_word(&self, candidate: &str) -> Result<bool, DictionaryError> {
        Ok(self.words.contains(&candidate))
    }

    fn has_prefix(&self, candidate: &str) -> Result<bool, DictionaryError> {
        if self.blocked.is_some_and(|blocked| candidate.starts_with(blocked)) {
            return Ok(false);
        }
        Ok(self.words.iter().any(|w| w.starts_with(candidate)))
    }
}

const CONTROLLED_WORDS: &[&str] = &["CAOX", "SOX", "TAO"];

#[test]
fn pruned_prefixes_never_produce_words() {
    let board = Board::from_literal(3, "CATSOXDEA").unwrap();

    let open = Controlled {
        words: CONTROLLED_WORDS,
        blocked: None,
    };
    let all: Vec<String> = find_all_words(&board, &open)
        .unwrap()
        .into_iter()
        .map(|w| w.word().to_string())
        .collect();
    assert_eq!(all, vec!["CAOX", "TAO", "SOX"]);

    let pruned = Controlled {
        words: CONTROLLED_WORDS,
        blocked: Some("CAO"),
    };
    let words: Vec<String> = find_all_words(&board, &pruned)
        .unwrap()
        .into_iter()
        .map(|w| w.word().to_string())
        .collect();
    assert_eq!(words, vec!["TAO", "SOX"]);
}

#[test]
fn concurrent_searches_share_one_board() {
    let dict = embedded();
    let board = Board::from_literal(4, "CATSOXXXGXXXDEAR").unwrap();
    let solver = Solver::new(&dict);
    let words: Vec<String> = ["cat", "cats", "dear", "dog", "ear"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let results = solver.has_words(&board, &words).unwrap();

    assert!(results[0].is_some());
    assert!(results[1].is_some());
    assert!(results[2].is_some());
    assert!(results[3].is_none());
    assert!(results[4].is_some());
}
