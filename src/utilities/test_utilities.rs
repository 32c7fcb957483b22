use crate::dictionary::{normalize_word, Dictionary};
use crate::grid::{Grid, Position, BLOCKED};
use crate::region_search::FoundWords;
use rand::Rng;
use std::collections::HashSet;

/// letters drawn for random grids - few enough that real paths repeat often
pub const RANDOM_GRID_LETTERS: [char; 8] = ['A', 'E', 'S', 'T', 'R', 'N', 'O', 'L'];

/// build a grid from literal rows, panicking on malformed input
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let rows: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(e) => panic!("invalid test grid: {e}"),
    }
}

pub fn dictionary_from(words: &[&str]) -> Dictionary {
    Dictionary::new(words.iter().copied())
}

pub fn words(list: &[&str]) -> FoundWords {
    list.iter().map(|word| normalize_word(word)).collect()
}

/// a grid of random letters with roughly `blocked_ratio` of its cells blocked
pub fn random_grid<R: Rng>(rows: usize, cols: usize, blocked_ratio: f64, rng: &mut R) -> Grid {
    let rows: Vec<Vec<char>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(blocked_ratio) {
                        BLOCKED
                    } else {
                        RANDOM_GRID_LETTERS[rng.random_range(0..RANDOM_GRID_LETTERS.len())]
                    }
                })
                .collect()
        })
        .collect();
    match Grid::from_rows(rows) {
        Ok(grid) => grid,
        Err(e) => panic!("random grid generation failed: {e}"),
    }
}

/// words spelled by random walks through the grid (so they can be found) mixed
/// with random strings (which mostly cannot)
pub fn sample_words<R: Rng>(grid: &Grid, count: usize, max_length: usize, rng: &mut R) -> Vec<String> {
    let open: Vec<Position> = grid.positions().filter(|p| !grid.is_blocked(*p)).collect();
    let mut words = Vec::with_capacity(count);
    if open.is_empty() || max_length == 0 {
        return words;
    }

    for n in 0..count {
        let target = rng.random_range(1..=max_length);
        if n % 3 == 0 {
            let noise: String = (0..target)
                .map(|_| RANDOM_GRID_LETTERS[rng.random_range(0..RANDOM_GRID_LETTERS.len())])
                .collect();
            words.push(noise);
            continue;
        }

        let mut position = open[rng.random_range(0..open.len())];
        let mut visited = HashSet::from([position]);
        let mut word = String::from(grid[position]);
        while word.chars().count() < target {
            let next: Vec<Position> = grid
                .neighbors(position)
                .filter(|p| !grid.is_blocked(*p) && !visited.contains(p))
                .collect();
            if next.is_empty() {
                break;
            }
            position = next[rng.random_range(0..next.len())];
            visited.insert(position);
            word.push(grid[position]);
        }
        words.push(word);
    }
    words
}

/// find some simple path spelling `word`, without going through the search code.
/// used as an oracle for what a search should find.
pub fn trace_path(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    fn walk(grid: &Grid, letters: &[char], path: &mut Vec<Position>) -> bool {
        let Some((letter, rest)) = letters.split_first() else {
            return true;
        };
        let candidates: Vec<Position> = match path.last() {
            None => grid.positions().collect(),
            Some(last) => grid.neighbors(*last).collect(),
        };
        for candidate in candidates {
            if grid[candidate] == BLOCKED || grid[candidate] != *letter || path.contains(&candidate) {
                continue;
            }
            path.push(candidate);
            if walk(grid, rest, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let letters: Vec<char> = normalize_word(word).chars().collect();
    if letters.is_empty() {
        return None;
    }
    let mut path = Vec::new();
    walk(grid, &letters, &mut path).then_some(path)
}

/// every word of exactly `length` letters that can be traced in the grid
pub fn brute_force_words(grid: &Grid, words: &[String], length: usize) -> FoundWords {
    words
        .iter()
        .map(|word| normalize_word(word))
        .filter(|word| word.chars().count() == length)
        .filter(|word| trace_path(grid, word).is_some())
        .collect()
}
