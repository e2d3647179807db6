#![cfg_attr(feature = "unstable", feature(test))]

//! Finds the best words to play in a game of Letterpress.
//!
//! The dictionary is loaded into a [`WordIndex`], a trie that can optionally be collapsed into
//! a radix tree. Words that can be spelled from the board's letters are found with
//! [`find_words`], scored with a [`LetterpressScorer`], and the best are kept in a
//! [`TopWords`]. [`Solver`] ties these steps together:
//!
//! ```no_run
//! use letterpress_solver::{Board, Enumeration, IndexForm, Solver};
//!
//! let solver = Solver::from_path("words.txt", IndexForm::Radix)?;
//! let board = Board::new("rtsle", "aoiunmp", "bcdfghjkvwxyz")?;
//! for (rank, entry) in solver.solve(&board, 25, Enumeration::Sequential).ranked() {
//!     println!("{}. {} - {}", rank, entry.word, entry.score);
//! }
//! # Ok::<(), letterpress_solver::SolverError>(())
//! ```

mod board;
mod finder;
mod letters;
mod ranking;
mod results;
mod scorer;
mod solver;
mod trie;

pub use board::*;
pub use finder::*;
pub use letters::LetterCounts;
pub use ranking::*;
pub use results::*;
pub use scorer::*;
pub use solver::*;
pub use trie::WordIndex;

/// Lower-level building blocks: alphabet helpers, loan guards and dictionary limits.
pub mod details {
    pub use crate::letters::letter_index;
    pub use crate::letters::Taken;
    pub use crate::letters::ALPHABET_SIZE;
    pub use crate::trie::normalize_entry;
    pub use crate::trie::MAX_WORD_LENGTH;
}
