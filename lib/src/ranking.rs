#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many words are kept by default: one per tile on the board.
pub const DEFAULT_CAPACITY: usize = 25;

/// A word along with its score.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedEntry {
    pub word: Box<str>,
    pub score: u32,
}

impl RankedEntry {
    pub fn new(word: &str, score: u32) -> RankedEntry {
        RankedEntry {
            word: Box::from(word),
            score,
        }
    }
}

/// Keeps the highest-scoring words offered to it, up to a fixed capacity.
///
/// Entries are held sorted by descending score. Among equal scores, the entry offered first
/// stays ahead. Once full, a new entry is only kept if it beats the current lowest score, which
/// then drops off the end.
///
/// ```
/// use letterpress_solver::{RankedEntry, TopWords};
///
/// let mut top = TopWords::new(2);
/// top.offer(RankedEntry::new("butts", 3));
/// top.offer(RankedEntry::new("mason", 7));
/// top.offer(RankedEntry::new("moan", 5));
///
/// let words: Vec<&str> = top.snapshot().iter().map(|entry| &*entry.word).collect();
/// assert_eq!(words, vec!["mason", "moan"]);
/// assert_eq!(top.min_required(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoredTopWords"))]
pub struct TopWords {
    capacity: usize,
    entries: Vec<RankedEntry>,
}

/// The serialized form of [`TopWords`], checked before it is accepted.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "TopWords")]
struct StoredTopWords {
    capacity: usize,
    entries: Vec<RankedEntry>,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredTopWords> for TopWords {
    type Error = String;

    fn try_from(stored: StoredTopWords) -> Result<TopWords, String> {
        if stored.entries.len() > stored.capacity {
            return Err(format!(
                "{} entries do not fit in a capacity of {}",
                stored.entries.len(),
                stored.capacity
            ));
        }
        if stored
            .entries
            .windows(2)
            .any(|pair| pair[0].score < pair[1].score)
        {
            return Err("entries are not sorted by descending score".to_string());
        }
        Ok(TopWords {
            capacity: stored.capacity,
            entries: stored.entries,
        })
    }
}

impl TopWords {
    /// Creates an empty selector that keeps at most `capacity` entries.
    pub fn new(capacity: usize) -> TopWords {
        TopWords {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Offers an entry. Returns `true` iff it was kept.
    pub fn offer(&mut self, entry: RankedEntry) -> bool {
        if self.capacity == 0 || (self.is_full() && entry.score <= self.min_required()) {
            return false;
        }
        let position = self
            .entries
            .partition_point(|existing| existing.score >= entry.score);
        self.entries.insert(position, entry);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
        true
    }

    /// The score an entry must beat to get in: the lowest kept score once full, otherwise 0.
    pub fn min_required(&self) -> u32 {
        if self.is_full() {
            self.entries.last().map_or(0, |entry| entry.score)
        } else {
            0
        }
    }

    /// The kept entries, highest score first.
    pub fn snapshot(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Iterates over the kept entries with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &RankedEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry))
    }

    /// Consumes the selector, returning the kept entries highest score first.
    pub fn into_vec(self) -> Vec<RankedEntry> {
        self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

impl Default for TopWords {
    fn default() -> TopWords {
        TopWords::new(DEFAULT_CAPACITY)
    }
}

impl Extend<RankedEntry> for TopWords {
    fn extend<I: IntoIterator<Item = RankedEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.offer(entry);
        }
    }
}
