use crate::letters::letter_char;
use crate::letters::letter_index;
use crate::letters::ALPHABET_SIZE;
use crate::results::SolverError;
use log::{debug, log_enabled, warn, Level};
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::result::Result;

/// Dictionary entries longer than this are skipped when loading.
pub const MAX_WORD_LENGTH: usize = 45;

/// A single node of the index.
///
/// `label` holds the letters consumed after entering this node and before reaching its word or
/// any of its children. It is only non-empty once the index has been collapsed.
#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) children: [Option<Box<Node>>; ALPHABET_SIZE],
    pub(crate) word: Option<Box<str>>,
    pub(crate) label: String,
}

impl Node {
    /// Returns the alphabet index of this node's child iff it has exactly one.
    fn only_child(&self) -> Option<usize> {
        let mut present = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_some())
            .map(|(index, _)| index);
        match (present.next(), present.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Iterates over the present children along with their alphabet index.
    pub(crate) fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| child.as_deref().map(|child| (index, child)))
    }

    fn count_nodes(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.count_nodes())
            .sum::<usize>()
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        if let Some(word) = self.word.as_deref() {
            words.push(word);
        }
        for (_, child) in self.children() {
            child.collect_words(words);
        }
    }

    /// Merges chains of word-less single-child nodes into this node's label.
    fn collapse(&mut self) {
        while self.word.is_none() {
            let index = match self.only_child() {
                Some(index) => index,
                None => break,
            };
            let child = match self.children[index].take() {
                Some(child) => *child,
                None => break,
            };
            let Node {
                children,
                word,
                label,
            } = child;
            self.label.push(letter_char(index));
            self.label.push_str(&label);
            self.children = children;
            self.word = word;
        }
        for child in self.children.iter_mut().flatten() {
            child.collapse();
        }
    }
}

/// The dictionary, stored as a prefix tree over the letters `a`-`z`.
///
/// The index starts out as a plain trie. Calling [`WordIndex::collapse`] turns it into a radix
/// tree, where chains of single-child nodes are merged into one node with a multi-letter label.
/// Lookups and word enumeration behave identically on both forms.
///
/// ```
/// use letterpress_solver::WordIndex;
///
/// let mut index = WordIndex::from_iterator(["mason", "masons", "butts"])?;
/// assert!(index.contains("mason"));
/// assert!(!index.contains("maso"));
///
/// index.collapse();
/// assert!(index.contains("masons"));
/// assert!(!index.contains("asdfgh"));
/// # Ok::<(), letterpress_solver::SolverError>(())
/// ```
#[derive(Debug, Default)]
pub struct WordIndex {
    root: Node,
    len: usize,
    collapsed: bool,
}

impl WordIndex {
    /// Creates an empty index.
    pub fn new() -> WordIndex {
        WordIndex::default()
    }

    /// Builds an index from the given words.
    ///
    /// Every word must consist only of the letters `a`-`z`. Empty words are ignored.
    pub fn from_iterator<I, S>(words: I) -> Result<WordIndex, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = WordIndex::new();
        index.build(words)?;
        Ok(index)
    }

    /// Constructs a new index by reading whitespace-separated words from the given reader.
    ///
    /// Each word is converted to lower case. Words that are longer than [`MAX_WORD_LENGTH`], that
    /// contain anything other than ASCII letters, or that are not valid UTF-8 are logged and
    /// skipped. Only I/O errors from the reader itself are returned.
    pub fn from_reader<R: BufRead>(word_reader: R) -> io::Result<WordIndex> {
        let mut index = WordIndex::new();
        let mut num_skipped = 0;
        for line in word_reader.split(b'\n') {
            let line = line?;
            for entry in line.split(u8::is_ascii_whitespace) {
                if entry.is_empty() {
                    continue;
                }
                match normalize_raw_entry(entry) {
                    Ok(word) => index.insert_unchecked(&word),
                    Err(err) => {
                        warn!("{}", err);
                        num_skipped += 1;
                    }
                }
            }
        }
        debug!(
            "Loaded {} words into the index, skipped {} entries",
            index.len, num_skipped
        );
        Ok(index)
    }

    /// Reads the dictionary file at the given path. See [`WordIndex::from_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<WordIndex, SolverError> {
        let path = path.as_ref();
        let unavailable = |source: io::Error| SolverError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        WordIndex::from_reader(BufReader::new(file)).map_err(unavailable)
    }

    /// Inserts each of the given words. See [`WordIndex::insert`].
    pub fn build<I, S>(&mut self, words: I) -> Result<(), SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Inserts a single word. Returns `true` iff the word was not already in the index.
    ///
    /// The word must consist only of the letters `a`-`z`; the empty word is never stored.
    pub fn insert(&mut self, word: &str) -> Result<bool, SolverError> {
        if self.collapsed {
            return Err(SolverError::IndexCollapsed);
        }
        if let Some(unsupported) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(SolverError::UnsupportedCharacter(unsupported));
        }
        if word.is_empty() {
            return Ok(false);
        }
        let len_before = self.len;
        self.insert_unchecked(word);
        Ok(self.len > len_before)
    }

    fn insert_unchecked(&mut self, word: &str) {
        let mut crawl = &mut self.root;
        for letter in word.bytes() {
            let index = (letter - b'a') as usize;
            crawl = crawl.children[index]
                .get_or_insert_with(Box::default)
                .as_mut();
        }
        if crawl.word.is_none() {
            crawl.word = Some(Box::from(word));
            self.len += 1;
        }
    }

    /// Returns `true` iff the exact query was inserted into the index.
    ///
    /// Prefixes of stored words are not matches unless they were inserted themselves.
    pub fn contains(&self, query: &str) -> bool {
        let bytes = query.as_bytes();
        let mut crawl = &self.root;
        let mut offset = 0;
        loop {
            // A collapsed node must match its whole label before going any further.
            if !bytes[offset..].starts_with(crawl.label.as_bytes()) {
                return false;
            }
            offset += crawl.label.len();
            if offset == bytes.len() {
                break;
            }
            let next = letter_index(bytes[offset])
                .and_then(|index| crawl.children[index].as_deref());
            match next {
                Some(child) => crawl = child,
                None => return false,
            }
            offset += 1;
        }
        crawl.word.as_deref() == Some(query)
    }

    /// Compresses the index into a radix tree.
    ///
    /// Every node that stores no word and has exactly one child absorbs that child, appending
    /// the connecting letter to its label. Lookups give the same answers afterwards. Collapsing
    /// an already collapsed index changes nothing.
    pub fn collapse(&mut self) {
        let nodes_before = if log_enabled!(Level::Debug) {
            self.node_count()
        } else {
            0
        };
        self.root.collapse();
        self.collapsed = true;
        if log_enabled!(Level::Debug) {
            debug!(
                "Collapsed index from {} to {} nodes",
                nodes_before,
                self.node_count()
            );
        }
    }

    /// Drops every node, leaving an empty index that accepts new words again.
    pub fn release(&mut self) {
        drop(std::mem::take(self));
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether [`WordIndex::collapse`] has been applied.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Returns every stored word, in alphabetical order.
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::with_capacity(self.len);
        self.root.collect_words(&mut words);
        words
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}

/// Checks a raw dictionary entry and converts it to lower case.
pub fn normalize_entry(entry: &str) -> Result<String, SolverError> {
    if entry.len() > MAX_WORD_LENGTH {
        return Err(SolverError::MalformedEntry {
            entry: entry.to_string(),
            reason: "longer than the maximum word length",
        });
    }
    if !entry.bytes().all(|letter| letter.is_ascii_alphabetic()) {
        return Err(SolverError::MalformedEntry {
            entry: entry.to_string(),
            reason: "contains non-alphabetic characters",
        });
    }
    Ok(entry.to_ascii_lowercase())
}

fn normalize_raw_entry(entry: &[u8]) -> Result<String, SolverError> {
    match std::str::from_utf8(entry) {
        Ok(entry) => normalize_entry(entry),
        Err(_) => Err(SolverError::MalformedEntry {
            entry: String::from_utf8_lossy(entry).into_owned(),
            reason: "not valid UTF-8",
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    #[test]
    fn contains_empty() {
        let index = WordIndex::new();

        assert!(!index.contains("key"));
        assert!(!index.contains(""));
        assert!(index.is_empty());
    }

    #[test]
    fn insert_and_contains() -> Result<(), SolverError> {
        let mut index = WordIndex::new();

        assert!(index.insert("ab")?);

        assert!(index.contains("ab"));
        assert!(!index.contains("other"));
        assert_eq!(index.len(), 1);
        Ok(())
    }

    #[test]
    fn insert_duplicate() -> Result<(), SolverError> {
        let mut index = WordIndex::new();

        assert!(index.insert("ab")?);
        assert!(!index.insert("ab")?);

        assert_eq!(index.len(), 1);
        Ok(())
    }

    #[test]
    fn insert_empty_word_is_ignored() -> Result<(), SolverError> {
        let mut index = WordIndex::new();

        assert!(!index.insert("")?);

        assert!(!index.contains(""));
        assert_eq!(index.node_count(), 1);
        Ok(())
    }

    #[test]
    fn insert_rejects_unsupported_characters() {
        let mut index = WordIndex::new();

        assert_matches!(
            index.insert("Ab"),
            Err(SolverError::UnsupportedCharacter('A'))
        );
        assert_matches!(
            index.insert("a b"),
            Err(SolverError::UnsupportedCharacter(' '))
        );
        assert!(index.is_empty());
    }

    #[test]
    fn contains_prefix_and_extension() -> Result<(), SolverError> {
        let index = WordIndex::from_iterator(["ab", "abcd"])?;

        assert!(index.contains("ab"));
        assert!(index.contains("abcd"));
        assert!(!index.contains("a"));
        assert!(!index.contains("abc"));
        assert!(!index.contains("abcde"));
        assert!(!index.contains("abd"));
        Ok(())
    }

    #[test]
    fn contains_unsupported_query() -> Result<(), SolverError> {
        let index = WordIndex::from_iterator(["ab"])?;

        assert!(!index.contains("AB"));
        assert!(!index.contains("a!"));
        Ok(())
    }

    #[test]
    fn collapse_merges_single_child_chains() -> Result<(), SolverError> {
        let mut index = WordIndex::from_iterator(["abcd", "abxy"])?;
        assert_eq!(index.node_count(), 7);

        index.collapse();

        // root ("ab") -> c ("d") and x ("y")
        assert_eq!(index.node_count(), 3);
        assert_eq!(index.root().label, "ab");
        assert!(index.contains("abcd"));
        assert!(index.contains("abxy"));
        assert!(!index.contains("ab"));
        assert!(!index.contains("abc"));
        assert!(!index.contains("abcy"));
        Ok(())
    }

    #[test]
    fn collapse_stops_at_stored_words() -> Result<(), SolverError> {
        let mut index = WordIndex::from_iterator(["a", "abc"])?;

        index.collapse();

        // The root absorbs "a", which stores a word, so "b" keeps its own node.
        let root = index.root();
        assert_eq!(root.label, "a");
        assert_eq!(root.word.as_deref(), Some("a"));
        let b = root.children[1].as_deref().unwrap();
        assert_eq!(b.label, "c");
        assert_eq!(b.word.as_deref(), Some("abc"));
        assert_eq!(index.node_count(), 2);
        assert!(index.contains("a"));
        assert!(index.contains("abc"));
        assert!(!index.contains("ab"));
        assert!(!index.contains(""));
        Ok(())
    }

    #[test]
    fn collapse_twice_is_unchanged() -> Result<(), SolverError> {
        let mut index = WordIndex::from_iterator(["mason", "masons", "butts"])?;

        index.collapse();
        let nodes = index.node_count();
        index.collapse();

        assert_eq!(index.node_count(), nodes);
        assert_eq!(index.words(), vec!["butts", "mason", "masons"]);
        Ok(())
    }

    #[test]
    fn insert_after_collapse_fails() -> Result<(), SolverError> {
        let mut index = WordIndex::from_iterator(["ab"])?;

        index.collapse();

        assert_matches!(index.insert("abc"), Err(SolverError::IndexCollapsed));
        Ok(())
    }

    #[test]
    fn release_empties_the_index() -> Result<(), SolverError> {
        let mut index = WordIndex::from_iterator(["mason", "butts"])?;
        index.collapse();

        index.release();

        assert!(index.is_empty());
        assert!(!index.is_collapsed());
        assert!(!index.contains("mason"));
        assert_eq!(index.node_count(), 1);
        index.release();
        assert!(index.insert("mason")?);
        Ok(())
    }

    #[test]
    fn from_reader_skips_malformed_entries() -> io::Result<()> {
        let long_word = "a".repeat(MAX_WORD_LENGTH + 1);
        let cursor = Cursor::new(format!(
            "Mason butts\n\n  don't {} x1\nZebra\n",
            long_word
        ));

        let index = WordIndex::from_reader(cursor)?;

        assert_eq!(index.words(), vec!["butts", "mason", "zebra"]);
        Ok(())
    }

    #[test]
    fn from_reader_skips_invalid_utf8() -> io::Result<()> {
        let cursor = Cursor::new(b"mason\ncaf\xe9\nbutts \xff\xfe moan\n".to_vec());

        let index = WordIndex::from_reader(cursor)?;

        assert_eq!(index.words(), vec!["butts", "mason", "moan"]);
        Ok(())
    }

    #[test]
    fn normalize_raw_entry_rejects_invalid_utf8() {
        assert_matches!(
            normalize_raw_entry(b"caf\xe9"),
            Err(SolverError::MalformedEntry { reason: "not valid UTF-8", .. })
        );
        assert_eq!(normalize_raw_entry(b"Mason").unwrap(), "mason");
    }

    #[test]
    fn from_path_missing_file() {
        assert_matches!(
            WordIndex::from_path("this/path/does/not/exist.txt"),
            Err(SolverError::DictionaryUnavailable { .. })
        );
    }

    #[test]
    fn normalize_entry_limits() {
        let longest = "z".repeat(MAX_WORD_LENGTH);

        assert_eq!(normalize_entry(&longest).unwrap(), longest);
        assert_eq!(normalize_entry("MiXeD").unwrap(), "mixed");
        assert_matches!(
            normalize_entry(&format!("{}z", longest)),
            Err(SolverError::MalformedEntry { .. })
        );
        assert_matches!(
            normalize_entry("café"),
            Err(SolverError::MalformedEntry { .. })
        );
    }
}
