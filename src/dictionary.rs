use std::collections::BTreeSet;
use trie_rs::inc_search::{Answer, IncSearch};
use trie_rs::{Trie, TrieBuilder};

/// the set of words a path may spell. words are stored uppercased in a trie so
/// that a search can stop extending a path once no word starts with it.
pub struct Dictionary {
    trie: Trie<char>,
    word_count: usize,
}

impl Dictionary {
    /// build a dictionary from raw words. surrounding whitespace is trimmed,
    /// blank entries are skipped and duplicates collapse.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: BTreeSet<String> = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        let mut builder: TrieBuilder<char> = TrieBuilder::new();
        for word in &normalized {
            builder.push(word.chars().collect::<Vec<char>>());
        }

        Self {
            trie: builder.build(),
            word_count: normalized.len(),
        }
    }

    /// case-insensitive exact membership
    pub fn contains(&self, word: &str) -> bool {
        let query: Vec<char> = normalize_word(word).chars().collect();
        !query.is_empty() && self.trie.exact_match(query)
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// an empty prefix, ready to be extended letter by letter
    pub fn cursor(&self) -> PrefixCursor<'_> {
        PrefixCursor {
            search: self.trie.inc_search(),
        }
    }
}

/// what a prefix extended by one more letter turned out to be
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrefixState {
    /// some longer word starts with it
    Prefix,
    /// it is a word and no longer word starts with it
    Word,
    /// it is a word and longer words start with it
    PrefixAndWord,
}

impl PrefixState {
    pub fn is_word(&self) -> bool {
        matches!(self, PrefixState::Word | PrefixState::PrefixAndWord)
    }

    pub fn has_extensions(&self) -> bool {
        matches!(self, PrefixState::Prefix | PrefixState::PrefixAndWord)
    }
}

/// incremental walk down the dictionary trie. clone it to branch.
#[derive(Clone)]
pub struct PrefixCursor<'a> {
    search: IncSearch<'a, char, ()>,
}

impl PrefixCursor<'_> {
    /// extend the prefix by one (already uppercased) letter. `None` means no
    /// dictionary word starts with the extended prefix; the cursor should then
    /// be discarded.
    #[inline(always)]
    pub fn advance(&mut self, letter: char) -> Option<PrefixState> {
        match self.search.query(&letter) {
            Some(Answer::Prefix) => Some(PrefixState::Prefix),
            Some(Answer::Match) => Some(PrefixState::Word),
            Some(Answer::PrefixAndMatch) => Some(PrefixState::PrefixAndWord),
            None => None,
        }
    }
}

/// the single case every dictionary entry and grid letter is compared in
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let dictionary = Dictionary::new(["ab", "Ac", " AD ", "", "ab"]);

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("AB"));
        assert!(dictionary.contains("ac"));
        assert!(dictionary.contains("AD"));
        assert!(!dictionary.contains("A"));
        assert!(!dictionary.contains("ABC"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::new(Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("A"));
        assert_eq!(dictionary.cursor().advance('A'), None);
    }

    #[test]
    fn test_cursor_states() {
        let dictionary = Dictionary::new(["CAR", "CART", "DOG"]);
        let mut cursor = dictionary.cursor();

        assert_eq!(cursor.advance('C'), Some(PrefixState::Prefix));
        let mut branch = cursor.clone();
        assert_eq!(cursor.advance('A'), Some(PrefixState::Prefix));
        assert_eq!(cursor.advance('R'), Some(PrefixState::PrefixAndWord));
        assert_eq!(cursor.advance('T'), Some(PrefixState::Word));
        assert!(PrefixState::Word.is_word());
        assert!(!PrefixState::Word.has_extensions());

        // the cloned branch is unaffected by the original's progress
        assert_eq!(branch.advance('O'), None);
    }
}
