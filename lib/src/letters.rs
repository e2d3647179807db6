use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;

/// The number of letters in the supported alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

const LETTERS: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz";

/// Returns the zero-based alphabet index of the given lowercase ASCII letter, or `None` if the
/// byte is not in `a`-`z`.
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Returns the letter at the given alphabet index as a one-byte slice.
#[inline]
pub(crate) fn letter_at(index: usize) -> &'static [u8] {
    &LETTERS[index..=index]
}

/// Returns the letter at the given alphabet index.
#[inline]
pub(crate) fn letter_char(index: usize) -> char {
    LETTERS[index] as char
}

/// A multiset of letters: one counter per letter of the alphabet.
///
/// Letters are removed only through [`LetterCounts::take`], which hands back a guard that
/// returns them when dropped. This keeps every removal strictly nested, so a walk that takes
/// letters on the way down always ends with the counts it started with.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterCounts {
    /// Creates an empty multiset.
    pub fn new() -> LetterCounts {
        LetterCounts::default()
    }

    /// Counts every `a`-`z` letter in the given string. Other characters are ignored.
    ///
    /// ```
    /// use letterpress_solver::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters("banana");
    /// assert_eq!(counts.count(b'a'), 3);
    /// assert_eq!(counts.count(b'n'), 2);
    /// assert_eq!(counts.count(b'z'), 0);
    /// ```
    pub fn from_letters(letters: &str) -> LetterCounts {
        let mut counts = LetterCounts::new();
        counts.add_all(letters);
        counts
    }

    /// Adds one of the given letter. Non `a`-`z` bytes are ignored.
    pub fn add(&mut self, letter: u8) {
        if let Some(index) = letter_index(letter) {
            self.counts[index] += 1;
        }
    }

    /// Adds every `a`-`z` letter in the given string.
    pub fn add_all(&mut self, letters: &str) {
        letters.bytes().for_each(|letter| self.add(letter));
    }

    /// Returns how many of the given letter are available.
    pub fn count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |index| self.counts[index])
    }

    /// Returns the count at the given alphabet index.
    #[inline]
    pub fn count_at(&self, index: usize) -> u32 {
        self.counts[index]
    }

    pub(crate) fn to_array(&self) -> [u32; ALPHABET_SIZE] {
        self.counts
    }

    /// Returns the total number of letters in the multiset.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|count| *count as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Returns `true` iff every letter of `word` can be drawn from this multiset, counting
    /// repeats.
    ///
    /// ```
    /// use letterpress_solver::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters("masonx");
    /// assert!(counts.can_spell("mason"));
    /// assert!(!counts.can_spell("masons"));
    /// ```
    pub fn can_spell(&self, word: &str) -> bool {
        let needed = LetterCounts::from_letters(word);
        word.bytes().all(|letter| letter_index(letter).is_some())
            && needed
                .counts
                .iter()
                .zip(self.counts.iter())
                .all(|(need, have)| need <= have)
    }

    /// Removes all of the given letters, or none of them.
    ///
    /// Returns `None`, leaving the counts untouched, if any letter is unavailable (counting
    /// repeats) or is not in `a`-`z`. Otherwise the letters stay removed until the returned
    /// guard is dropped.
    pub fn take<'a, 'l>(&'a mut self, letters: &'l [u8]) -> Option<Taken<'a, 'l>> {
        for (num_taken, letter) in letters.iter().enumerate() {
            match letter_index(*letter) {
                Some(index) if self.counts[index] > 0 => self.counts[index] -= 1,
                _ => {
                    self.give_back(&letters[..num_taken]);
                    return None;
                }
            }
        }
        Some(Taken {
            counts: self,
            letters,
        })
    }

    fn give_back(&mut self, letters: &[u8]) {
        for letter in letters {
            if let Some(index) = letter_index(*letter) {
                self.counts[index] += 1;
            }
        }
    }
}

impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.counts
                    .iter()
                    .enumerate()
                    .filter(|(_, count)| **count > 0)
                    .map(|(index, count)| (LETTERS[index] as char, count)),
            )
            .finish()
    }
}

/// Letters on loan from a [`LetterCounts`]. Dropping the guard returns them.
///
/// The guard derefs to the remaining counts, so further letters can be taken from it while it
/// is alive.
pub struct Taken<'a, 'l> {
    counts: &'a mut LetterCounts,
    letters: &'l [u8],
}

impl<'a, 'l> Deref for Taken<'a, 'l> {
    type Target = LetterCounts;

    fn deref(&self) -> &LetterCounts {
        self.counts
    }
}

impl<'a, 'l> DerefMut for Taken<'a, 'l> {
    fn deref_mut(&mut self) -> &mut LetterCounts {
        self.counts
    }
}

impl<'a, 'l> Drop for Taken<'a, 'l> {
    fn drop(&mut self) {
        self.counts.give_back(self.letters);
    }
}
