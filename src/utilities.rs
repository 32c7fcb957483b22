use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::grid::Grid;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;

pub mod test_utilities;

/// a single grid cell written as its own token: one letter or the sentinel
static CELL_TOKEN: Lazy<Regex> = Lazy::new(|| match Regex::new(r"^(?:\p{Alphabetic}|-)$") {
    Ok(regex) => regex,
    Err(e) => panic!("failed to create cell token regex due to error: {e}"),
});

/// read a word list with one word per line into a dictionary
pub fn load_dictionary<P: AsRef<Path>>(word_list_file_path: P) -> Result<Dictionary, SolverError> {
    let path = word_list_file_path.as_ref();
    let read_error = |source: io::Error| SolverError::DictionaryRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let lines = io::BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, io::Error>>()
        .map_err(read_error)?;
    Ok(Dictionary::new(lines))
}

/// read a grid file, see `parse_grid` for the format
pub fn load_grid<P: AsRef<Path>>(grid_file_path: P) -> Result<Grid, SolverError> {
    let path = grid_file_path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SolverError::GridRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grid(&text)
}

/// one row per line. a row is either written out contiguously (`AB-D`) or as
/// whitespace separated single-cell tokens (`A B - D`). blank lines are skipped.
pub fn parse_grid(text: &str) -> Result<Grid, SolverError> {
    let mut rows = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let row_idx = rows.len();
        let row: Vec<char> = if line.contains(char::is_whitespace) {
            line.split_whitespace()
                .enumerate()
                .map(|(col, token)| parse_cell(token, row_idx, col))
                .collect::<Result<_, _>>()?
        } else {
            line.chars()
                .enumerate()
                .map(|(col, c)| parse_cell(c.encode_utf8(&mut [0; 4]), row_idx, col))
                .collect::<Result<_, _>>()?
        };
        rows.push(row);
    }
    Grid::from_rows(rows)
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<char, SolverError> {
    match token.chars().next() {
        Some(c) if CELL_TOKEN.is_match(token) => Ok(c),
        _ => Err(SolverError::InvalidGridCell {
            row,
            col,
            token: token.to_string(),
        }),
    }
}

/// parse word lengths given as separate arguments or comma separated lists.
/// negative lengths are well-formed, they just never match anything.
pub fn parse_word_lengths<I, S>(inputs: I) -> Result<Vec<i32>, SolverError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lengths = Vec::new();
    for input in inputs {
        for piece in input.as_ref().split(',').map(str::trim) {
            if piece.is_empty() {
                continue;
            }
            let length = piece
                .parse::<i32>()
                .map_err(|_| SolverError::InvalidWordLength {
                    input: piece.to_string(),
                })?;
            lengths.push(length);
        }
    }
    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    const WORDLIST_FILE_PATH: &str = "tests/wordlist.txt";
    const GRID_FILE_PATH: &str = "tests/grid.txt";
    const DNE_FILE_PATH: &str = "tests/DNE";

    #[test]
    fn test_load_dictionary() {
        let dictionary = load_dictionary(WORDLIST_FILE_PATH).unwrap();

        // hardcode expected contents - there is a risk of erroneous divergence
        // here, but we avoid the risk of replicating errors in I/O.
        assert_eq!(dictionary.len(), 8);
        for word in ["DOG", "cat", "Cats", "DOGS", "GOD", "TOAD", "ACT", "STAG"] {
            assert!(dictionary.contains(word), "{} missing", word);
        }
        assert!(!dictionary.contains("DO"));
    }

    #[test]
    fn test_load_dictionary_file_dne() {
        assert!(matches!(
            load_dictionary(DNE_FILE_PATH),
            Err(SolverError::DictionaryRead { .. })
        ));
    }

    #[test]
    fn test_load_grid() {
        let grid = load_grid(GRID_FILE_PATH).unwrap();
        assert_eq!(grid.to_string(), "CATS\nDOG-\nTOAD\nSTAG");
        assert!(grid.is_blocked(Position::new(1, 3)));
    }

    #[test]
    fn test_load_grid_file_dne() {
        assert!(matches!(
            load_grid(DNE_FILE_PATH),
            Err(SolverError::GridRead { .. })
        ));
    }

    #[test]
    fn test_parse_grid_formats_agree() {
        let contiguous = parse_grid("ab\n\nc-\n").unwrap();
        let tokens = parse_grid("  a  b \n c - ").unwrap();
        assert_eq!(contiguous, tokens);
        assert_eq!(contiguous.to_string(), "AB\nC-");
    }

    #[test]
    fn test_parse_grid_errors() {
        assert!(matches!(parse_grid(""), Err(SolverError::EmptyGrid)));
        assert!(matches!(
            parse_grid("AB\nC"),
            Err(SolverError::RaggedGrid { row: 1, .. })
        ));
        match parse_grid("A B\nC DE") {
            Err(SolverError::InvalidGridCell { row, col, token }) => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(token, "DE");
            }
            other => panic!("expected an invalid cell, got {:?}", other),
        }
        assert!(matches!(
            parse_grid("A1"),
            Err(SolverError::InvalidGridCell { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_parse_word_lengths() {
        assert_eq!(
            parse_word_lengths(["3", "4,5", " 6 , -1", ""]).unwrap(),
            vec![3, 4, 5, 6, -1]
        );
        assert!(matches!(
            parse_word_lengths(["3", "four"]),
            Err(SolverError::InvalidWordLength { input }) if input == "four"
        ));
    }
}
