use serde::{Deserialize, Serialize};
use std::collections::btree_set::{self, BTreeSet};

/// the words found by one search task. each task owns its own set and hands it
/// to whoever forked it; sets are only ever combined by `union`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundWords {
    words: BTreeSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// returns whether the word was new
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// words in ascending order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }

    /// merge two results. commutative, associative, and idempotent.
    pub fn union(self, other: FoundWords) -> FoundWords {
        // move the smaller set into the larger one
        let (mut larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        larger.words.extend(smaller.words);
        larger
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}

impl FromIterator<String> for FoundWords {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: BTreeSet::from_iter(iter),
        }
    }
}

impl Extend<String> for FoundWords {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.words.extend(iter)
    }
}

impl IntoIterator for FoundWords {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;
    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a FoundWords {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
