use crate::letters::letter_at;
use crate::letters::LetterCounts;
use crate::trie::Node;
use crate::trie::WordIndex;
use rayon::prelude::*;

/// Finds every word in the index that can be spelled with the given letters.
///
/// A word is found iff, for every letter, it uses no more copies than `letters` holds. Each
/// matching word is returned exactly once, in no particular order. The walk borrows letters
/// from `letters` as it descends and gives them back on the way up, so the counts are unchanged
/// once this returns.
///
/// ```
/// use letterpress_solver::{find_words, LetterCounts, WordIndex};
///
/// let index = WordIndex::from_iterator(["mason", "moan", "moons", "butts"])?;
/// let mut letters = LetterCounts::from_letters("snoamx");
///
/// let mut words = find_words(&mut letters, &index);
/// words.sort();
/// assert_eq!(words, vec!["mason", "moan"]);
/// assert_eq!(letters, LetterCounts::from_letters("snoamx"));
/// # Ok::<(), letterpress_solver::SolverError>(())
/// ```
pub fn find_words<'a>(letters: &mut LetterCounts, index: &'a WordIndex) -> Vec<&'a str> {
    let mut found = Vec::new();
    visit(index.root(), letters, &mut |word| found.push(word));
    found
}

/// Same as [`find_words`], but explores each first letter on a separate rayon task.
///
/// Every task works on its own copy of the letter counts.
pub fn find_words_par<'a>(letters: &LetterCounts, index: &'a WordIndex) -> Vec<&'a str> {
    let root = index.root();
    let mut letters = letters.clone();
    let after_root = match letters.take(root.label.as_bytes()) {
        Some(remaining) => LetterCounts::clone(&remaining),
        None => return Vec::new(),
    };

    let mut found: Vec<&'a str> = root.word.as_deref().into_iter().collect();
    let branches: Vec<(usize, &'a Node)> = root.children().collect();
    found.par_extend(branches.par_iter().flat_map_iter(|(index, child)| {
        let mut letters = after_root.clone();
        let mut words = Vec::new();
        if let Some(mut remaining) = letters.take(letter_at(*index)) {
            visit(*child, &mut remaining, &mut |word| words.push(word));
        }
        words
    }));
    found
}

fn visit<'a, F>(node: &'a Node, letters: &mut LetterCounts, on_word: &mut F)
where
    F: FnMut(&'a str),
{
    // The whole label has to be spelled before anything below this node is reachable.
    let mut remaining = match letters.take(node.label.as_bytes()) {
        Some(remaining) => remaining,
        None => return,
    };
    if let Some(word) = node.word.as_deref() {
        on_word(word);
    }
    for (index, child) in node.children() {
        if let Some(mut below) = remaining.take(letter_at(index)) {
            visit(child, &mut below, on_word);
        }
    }
}
