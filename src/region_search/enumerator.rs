use super::found_words::FoundWords;
use crate::dictionary::{Dictionary, PrefixCursor, PrefixState};
use crate::grid::{Grid, Position};
use crate::path::Path;

/// depth-first search over every simple path of exactly `word_length` cells
/// that starts at a given cell
pub struct PathEnumerator<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    word_length: usize,
    prune_prefixes: bool,
}

impl<'a> PathEnumerator<'a> {
    pub fn new(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        word_length: usize,
        prune_prefixes: bool,
    ) -> Self {
        Self {
            grid,
            dictionary,
            word_length,
            prune_prefixes,
        }
    }

    /// all dictionary words of the target length spelled by a path from `start`.
    /// blocked or off-grid starts find nothing.
    pub fn enumerate_from(&self, start: Position) -> FoundWords {
        let mut found = FoundWords::new();
        if self.word_length == 0 || self.word_length > self.grid.cell_count() {
            return found;
        }

        let mut path = Path::new(self.grid);
        if self.grid.is_valid(start, &path) {
            let cursor = self.prune_prefixes.then(|| self.dictionary.cursor());
            self.extend(&mut path, start, cursor, &mut found);
        }
        found
    }

    /// choose `position`, explore from it, and un-choose it when the guard drops
    fn extend(
        &self,
        path: &mut Path,
        position: Position,
        cursor: Option<PrefixCursor<'a>>,
        found: &mut FoundWords,
    ) {
        let letter = self.grid[position];

        // a dead prefix can never grow into a word
        let cursor: Option<(PrefixCursor<'a>, PrefixState)> = match cursor {
            Some(mut cursor) => match cursor.advance(letter) {
                Some(state) => Some((cursor, state)),
                None => return,
            },
            None => None,
        };

        let mut path = path.push(position, letter);

        if path.len() == self.word_length {
            let is_word = match &cursor {
                Some((_, state)) => state.is_word(),
                None => self.dictionary.contains(path.word()),
            };
            if is_word {
                found.insert(path.word().to_owned());
            }
            return;
        }

        if let Some((_, state)) = &cursor {
            if !state.has_extensions() {
                return;
            }
        }

        for neighbor in self.grid.neighbors(position) {
            if self.grid.is_valid(neighbor, &path) {
                let branch = cursor.as_ref().map(|(cursor, _)| cursor.clone());
                self.extend(&mut path, neighbor, branch, found);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::test_utilities::{dictionary_from, grid_from_rows, words};

    #[test]
    fn test_two_letter_words_from_corner() {
        // A B
        // C D
        let grid = grid_from_rows(&["AB", "CD"]);
        let dictionary = dictionary_from(&["AB", "AC", "AD", "BD", "XY", "BA"]);

        for prune in [true, false] {
            let from_a = PathEnumerator::new(&grid, &dictionary, 2, prune)
                .enumerate_from(Position::new(0, 0));
            assert_eq!(from_a, words(&["AB", "AC", "AD"]));

            let from_b = PathEnumerator::new(&grid, &dictionary, 2, prune)
                .enumerate_from(Position::new(0, 1));
            assert_eq!(from_b, words(&["BA", "BD"]));
        }
    }

    #[test]
    fn test_paths_never_reuse_a_cell() {
        let grid = grid_from_rows(&["AB", "CD"]);
        let dictionary = dictionary_from(&["ABA", "ABD", "ACA", "ABDC"]);

        for prune in [true, false] {
            let found = PathEnumerator::new(&grid, &dictionary, 3, prune)
                .enumerate_from(Position::new(0, 0));
            assert_eq!(found, words(&["ABD"]));

            let found = PathEnumerator::new(&grid, &dictionary, 4, prune)
                .enumerate_from(Position::new(0, 0));
            assert_eq!(found, words(&["ABDC"]));
        }
    }

    #[test]
    fn test_blocked_start_finds_nothing() {
        let grid = grid_from_rows(&["A-", "CD"]);
        let dictionary = dictionary_from(&["-A", "-D"]);

        let found = PathEnumerator::new(&grid, &dictionary, 2, false)
            .enumerate_from(Position::new(0, 1));
        assert!(found.is_empty());
    }

    #[test]
    fn test_blocked_cells_are_never_traversed() {
        // A - B
        // - - -
        // C - D
        let grid = grid_from_rows(&["A-B", "---", "C-D"]);
        let dictionary = dictionary_from(&["AB", "AC", "AD"]);

        for prune in [true, false] {
            let found = PathEnumerator::new(&grid, &dictionary, 2, prune)
                .enumerate_from(Position::new(0, 0));
            assert!(found.is_empty());
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        let grid = grid_from_rows(&["AB", "CD"]);
        let dictionary = dictionary_from(&["A", "ABDC"]);

        assert!(PathEnumerator::new(&grid, &dictionary, 0, true)
            .enumerate_from(Position::new(0, 0))
            .is_empty());
        assert!(PathEnumerator::new(&grid, &dictionary, 5, false)
            .enumerate_from(Position::new(0, 0))
            .is_empty());
        assert_eq!(
            PathEnumerator::new(&grid, &dictionary, 1, true).enumerate_from(Position::new(0, 0)),
            words(&["A"])
        );
        assert!(PathEnumerator::new(&grid, &dictionary, 1, true)
            .enumerate_from(Position::new(4, 4))
            .is_empty());
    }

    #[test]
    fn test_unreachable_length_exhausts_quietly() {
        // only A and B are open, so no 3-cell path exists from A
        let grid = grid_from_rows(&["AB", "--"]);
        let dictionary = dictionary_from(&["ABA", "AB"]);
        assert!(PathEnumerator::new(&grid, &dictionary, 3, false)
            .enumerate_from(Position::new(0, 0))
            .is_empty());
    }
}
