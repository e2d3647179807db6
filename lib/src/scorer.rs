use crate::letters::letter_index;
use crate::letters::LetterCounts;

/// Points for a letter taken back from the opponent: one gained, one taken away from them.
pub const OPPONENT_LETTER_POINTS: u32 = 2;
/// Points for a letter nobody has claimed yet.
pub const UNCLAIMED_LETTER_POINTS: u32 = 1;

/// Scores words by the board tiles they would claim.
///
/// Each letter of the word, left to right, uses up an opponent tile if one with that letter is
/// left, otherwise an unclaimed tile, otherwise scores nothing. A tile can only be used once per
/// word.
#[derive(Clone, Debug)]
pub struct LetterpressScorer {
    opponent: LetterCounts,
    unclaimed: LetterCounts,
}

impl LetterpressScorer {
    /// Constructs a scorer from the opponent's reclaimable letters and the unclaimed letters.
    pub fn new(opponent: &str, unclaimed: &str) -> LetterpressScorer {
        LetterpressScorer {
            opponent: LetterCounts::from_letters(opponent),
            unclaimed: LetterCounts::from_letters(unclaimed),
        }
    }

    /// Determines the score for the given word. The higher the score, the better the word.
    pub fn score_word(&self, word: &str) -> u32 {
        let mut opponent = self.opponent.to_array();
        let mut unclaimed = self.unclaimed.to_array();

        let mut score = 0;
        for index in word.bytes().filter_map(letter_index) {
            if opponent[index] > 0 {
                opponent[index] -= 1;
                score += OPPONENT_LETTER_POINTS;
            } else if unclaimed[index] > 0 {
                unclaimed[index] -= 1;
                score += UNCLAIMED_LETTER_POINTS;
            }
        }
        score
    }
}

/// Scores a single word against the opponent's and the unclaimed letters.
///
/// ```
/// use letterpress_solver::score_word;
///
/// // 2 for the first 'a', nothing for the second, 1 for the 'b'.
/// assert_eq!(score_word("aab", "a", "b"), 3);
/// ```
pub fn score_word(word: &str, opponent: &str, unclaimed: &str) -> u32 {
    LetterpressScorer::new(opponent, unclaimed).score_word(word)
}
