use crate::letters::LetterCounts;
use crate::results::SolverError;
use crate::scorer::LetterpressScorer;
use std::fmt;
use std::result::Result;

/// The number of tiles on a Letterpress board.
pub const BOARD_SIZE: usize = 25;

/// The letters on the board, split by who holds each tile.
///
/// * `opponent`: tiles the opponent holds but that can still be taken back.
/// * `unclaimed`: tiles nobody holds.
/// * `blocked`: tiles that are locked by the opponent or already held by the player.
///
/// All three pools can be used to spell words, but only the first two add points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    opponent: String,
    unclaimed: String,
    blocked: String,
}

impl Board {
    /// Checks and normalizes the three letter pools.
    ///
    /// Together the pools must hold exactly [`BOARD_SIZE`] ASCII letters. Upper case is accepted
    /// and converted to lower case.
    ///
    /// ```
    /// use letterpress_solver::Board;
    ///
    /// let board = Board::new("MASON", "butts", "abcdefghijklmno")?;
    /// assert_eq!(board.opponent(), "mason");
    /// assert!(Board::new("mason", "butts", "abc").is_err());
    /// # Ok::<(), letterpress_solver::SolverError>(())
    /// ```
    pub fn new(opponent: &str, unclaimed: &str, blocked: &str) -> Result<Board, SolverError> {
        let pools = [opponent, unclaimed, blocked];
        let total: usize = pools.iter().map(|pool| pool.chars().count()).sum();
        if total != BOARD_SIZE {
            return Err(SolverError::InvalidLetterPool(format!(
                "expected a total of {} letters, got {}",
                BOARD_SIZE, total
            )));
        }
        if let Some(other) = pools
            .iter()
            .flat_map(|pool| pool.chars())
            .find(|letter| !letter.is_ascii_alphabetic())
        {
            return Err(SolverError::InvalidLetterPool(format!(
                "{:?} is not a letter",
                other
            )));
        }
        Ok(Board {
            opponent: opponent.to_ascii_lowercase(),
            unclaimed: unclaimed.to_ascii_lowercase(),
            blocked: blocked.to_ascii_lowercase(),
        })
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn unclaimed(&self) -> &str {
        &self.unclaimed
    }

    pub fn blocked(&self) -> &str {
        &self.blocked
    }

    /// Counts every letter on the board, regardless of who holds it.
    pub fn letter_counts(&self) -> LetterCounts {
        let mut counts = LetterCounts::from_letters(&self.opponent);
        counts.add_all(&self.unclaimed);
        counts.add_all(&self.blocked);
        counts
    }

    /// Returns a scorer for the opponent's and the unclaimed tiles.
    pub fn scorer(&self) -> LetterpressScorer {
        LetterpressScorer::new(&self.opponent, &self.unclaimed)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.opponent, self.unclaimed, self.blocked)
    }
}
