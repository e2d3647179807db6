#[macro_use]
extern crate assert_matches;

use letterpress_solver::*;

use std::result::Result;

const DICTIONARY: &str = "../data/words.txt";

#[test]
fn score_word_takes_each_tile_once() {
    assert_eq!(score_word("aab", "a", "b"), 3);
}

#[test]
fn solve_end_to_end() -> Result<(), SolverError> {
    let index = WordIndex::from_iterator(["mason", "butts", "agammaglobulinemias"])?;
    let board = Board::new("MASON", "RSTLNEVWXYZ", "abcdefghi")?;

    for form in [IndexForm::Trie, IndexForm::Radix] {
        let solver = Solver::new(WordIndex::from_iterator(index.words())?, form);

        let top = solver.solve(&board, DEFAULT_CAPACITY, Enumeration::Sequential);

        assert_eq!(top.snapshot(), &[RankedEntry::new("mason", 10)]);
        assert!(!solver.index().contains("asdfgh"));
    }
    Ok(())
}

#[test]
fn solve_from_dictionary_file() -> Result<(), SolverError> {
    let board = Board::new("rtsle", "aoiunmp", "bcdfghjkvwxyz")?;
    let trie = Solver::from_path(DICTIONARY, IndexForm::Trie)?;
    let radix = Solver::from_path(DICTIONARY, IndexForm::Radix)?;

    let from_trie = trie.solve(&board, DEFAULT_CAPACITY, Enumeration::Sequential);
    let from_radix = radix.solve(&board, DEFAULT_CAPACITY, Enumeration::Sequential);
    let from_parallel = radix.solve(&board, DEFAULT_CAPACITY, Enumeration::Parallel);

    assert!(!from_trie.is_empty());
    assert!(from_trie.len() <= DEFAULT_CAPACITY);
    let scores = |top: &TopWords| -> Vec<u32> {
        top.snapshot().iter().map(|entry| entry.score).collect()
    };
    assert_eq!(scores(&from_radix), scores(&from_trie));
    assert_eq!(scores(&from_parallel), scores(&from_trie));
    let letters = board.letter_counts();
    for entry in from_trie.snapshot() {
        assert!(letters.can_spell(&entry.word), "{} is not spellable", entry.word);
        assert_eq!(entry.score, board.scorer().score_word(&entry.word));
    }
    Ok(())
}

#[test]
fn candidates_match_between_forms() -> Result<(), SolverError> {
    let board = Board::new("rtsle", "aoiunmp", "bcdfghjkvwxyz")?;
    let trie = Solver::from_path(DICTIONARY, IndexForm::Trie)?;
    let radix = Solver::from_path(DICTIONARY, IndexForm::Radix)?;

    let mut from_trie = trie.candidates(&board, Enumeration::Sequential);
    let mut from_radix = radix.candidates(&board, Enumeration::Parallel);
    from_trie.sort_unstable();
    from_radix.sort_unstable();

    assert_eq!(from_trie, from_radix);
    assert!(from_trie.contains(&"mason"));
    Ok(())
}

#[test]
fn invalid_board_fails_before_loading() {
    assert_matches!(
        Board::new("mason", "butts", "x"),
        Err(SolverError::InvalidLetterPool(_))
    );
}

#[test]
fn missing_dictionary_fails() {
    assert_matches!(
        Solver::from_path("../data/missing.txt", IndexForm::Radix),
        Err(SolverError::DictionaryUnavailable { .. })
    );
}
