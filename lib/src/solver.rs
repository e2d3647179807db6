use crate::board::Board;
use crate::finder::{find_words, find_words_par};
use crate::ranking::{RankedEntry, TopWords};
use crate::results::SolverError;
use crate::scorer::LetterpressScorer;
use crate::trie::WordIndex;
use log::{debug, trace};
use std::path::Path;
use std::result::Result;

/// Which form the word index should take once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexForm {
    /// One node per letter.
    Trie,
    /// Single-child chains merged into multi-letter labels.
    Radix,
}

/// How the index is walked when looking for words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enumeration {
    /// A single depth-first walk on the calling thread.
    Sequential,
    /// One rayon task per first letter, each with its own letter counts.
    Parallel,
}

/// Finds the best words for a board using a loaded dictionary.
///
/// ```
/// use letterpress_solver::{Board, Enumeration, IndexForm, Solver, WordIndex};
///
/// let index = WordIndex::from_iterator(["mason", "butts", "agammaglobulinemias"])?;
/// let solver = Solver::new(index, IndexForm::Radix);
/// let board = Board::new("mn", "aso", "bcdefghijklpqrstuvwx")?;
///
/// let top = solver.solve(&board, 25, Enumeration::Sequential);
/// assert_eq!(&*top.snapshot()[0].word, "mason");
/// assert_eq!(top.snapshot()[0].score, 7);
/// # Ok::<(), letterpress_solver::SolverError>(())
/// ```
#[derive(Debug)]
pub struct Solver {
    index: WordIndex,
}

impl Solver {
    /// Wraps an index, collapsing it first if `form` is [`IndexForm::Radix`].
    pub fn new(mut index: WordIndex, form: IndexForm) -> Solver {
        if form == IndexForm::Radix && !index.is_collapsed() {
            index.collapse();
        }
        Solver { index }
    }

    /// Loads the dictionary at the given path. See [`WordIndex::from_path`].
    pub fn from_path<P: AsRef<Path>>(path: P, form: IndexForm) -> Result<Solver, SolverError> {
        Ok(Solver::new(WordIndex::from_path(path)?, form))
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Returns every dictionary word that can be spelled from the board, in no particular order.
    pub fn candidates(&self, board: &Board, enumeration: Enumeration) -> Vec<&str> {
        let mut letters = board.letter_counts();
        let candidates = match enumeration {
            Enumeration::Sequential => find_words(&mut letters, &self.index),
            Enumeration::Parallel => find_words_par(&letters, &self.index),
        };
        debug!("Found {} candidate words", candidates.len());
        candidates
    }

    /// Scores every word that can be spelled from the board and keeps the `top_n` best.
    pub fn solve(&self, board: &Board, top_n: usize, enumeration: Enumeration) -> TopWords {
        let candidates = self.candidates(board, enumeration);
        rank_words(candidates, &board.scorer(), top_n)
    }

    /// Drops the index. The solver finds no words afterwards.
    pub fn release(&mut self) {
        self.index.release();
    }
}

/// Scores each word and keeps the `top_n` highest-scoring ones.
pub fn rank_words<I, S>(words: I, scorer: &LetterpressScorer, top_n: usize) -> TopWords
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut top = TopWords::new(top_n);
    for word in words {
        let word = word.as_ref();
        let score = scorer.score_word(word);
        if top.offer(RankedEntry::new(word, score)) {
            trace!("Kept {} ({}), min required is now {}", word, score, top.min_required());
        }
    }
    top
}
