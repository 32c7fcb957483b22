//! Finds every word of a requested length that can be traced through a grid
//! of letters by moving between adjacent cells (including diagonals) without
//! reusing a cell.
//!
//! ```
//! use wordbrain_solver::dictionary::Dictionary;
//! use wordbrain_solver::region_search::{find_words, SearchPool};
//! use wordbrain_solver::utilities::parse_grid;
//!
//! let grid = parse_grid("AB\nCD").unwrap();
//! let dictionary = Dictionary::new(["ab", "ad", "bd", "xy"]);
//! let pool = SearchPool::new(2).unwrap();
//!
//! let found = find_words(&grid, &dictionary, 2, &pool);
//! assert_eq!(found.into_sorted_vec(), vec!["AB", "AD", "BD"]);
//! ```

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod grid;
pub mod log;
pub mod path;
pub mod region;
pub mod region_search;
pub mod session;
pub mod utilities;
