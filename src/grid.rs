use crate::errors::SolverError;
use crate::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// marks a cell that can never be part of a path
pub const BLOCKED: char = '-';

/// (row delta, column delta) for every neighbour, searched in this order:
/// N, S, E, W, NE, NW, SE, SW
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// the position one step away in the given direction, if it has no negative
    /// coordinate. upper bounds are the grid's business.
    #[inline(always)]
    pub fn step(self, (row_delta, col_delta): (isize, isize)) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// an immutable grid of letters. (0, 0) is the top left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// cells are read from left to right, top to bottom
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// build a grid from its rows. letters are uppercased, `BLOCKED` is kept as is.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, SolverError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(SolverError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SolverError::RaggedGrid {
                    row: row_idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|c| normalize_cell(*c)));
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// total number of cells, blocked or not
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    #[inline(always)]
    pub fn get(&self, position: Position) -> Option<char> {
        if self.in_bounds(position) {
            Some(self.cells[self.index_of(position)])
        } else {
            None
        }
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.get(position) == Some(BLOCKED)
    }

    /// a position may extend a path if it is on the grid, not blocked, and not
    /// already on the path
    #[inline(always)]
    pub fn is_valid(&self, position: Position, path: &Path) -> bool {
        match self.get(position) {
            Some(BLOCKED) | None => false,
            Some(_) => !path.contains(position),
        }
    }

    /// on-grid neighbours in `DIRECTIONS` order. blocked cells are included;
    /// diagonal steps are allowed regardless of the two cells sharing the corner.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |delta| position.step(*delta))
            .filter(move |p| self.in_bounds(*p))
    }

    /// every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// row-major index of an on-grid position
    #[inline(always)]
    pub(crate) fn index_of(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }
}

impl Index<Position> for Grid {
    type Output = char;
    fn index(&self, position: Position) -> &Self::Output {
        if !self.in_bounds(position) {
            panic!(
                "Position {} is outside the {}x{} grid!",
                position, self.rows, self.cols
            )
        }
        &self.cells[self.index_of(position)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(self.cols).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn normalize_cell(c: char) -> char {
    if c == BLOCKED {
        BLOCKED
    } else {
        c.to_uppercase().next().unwrap_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::test_utilities::grid_from_rows;

    // E D H N
    // L E R O
    // B A R R
    // C O T T
    const BOARD: [&str; 4] = ["EDHN", "LERO", "BARR", "COTT"];

    #[test]
    fn test_is_valid() {
        let grid = grid_from_rows(&BOARD);
        let mut path = Path::new(&grid);
        let used = Position::new(1, 2);

        assert!(grid.is_valid(used, &path));
        let guard = path.push(used, grid[used]);
        assert!(!grid.is_valid(used, &guard));
        assert!(grid.is_valid(Position::new(1, 1), &guard));
    }

    #[test]
    fn test_is_valid_bounds_and_sentinel() {
        let grid = grid_from_rows(&["A-", "CD"]);
        let path = Path::new(&grid);

        assert!(grid.is_valid(Position::new(0, 0), &path));
        assert!(!grid.is_valid(Position::new(0, 1), &path));
        assert!(!grid.is_valid(Position::new(2, 0), &path));
        assert!(!grid.is_valid(Position::new(0, 2), &path));
        assert_eq!(Position::new(0, 0).step((-1, 0)), None);
        assert_eq!(Position::new(0, 0).step((0, -1)), None);
    }

    #[test]
    fn test_neighbors_order() {
        let grid = grid_from_rows(&BOARD);
        let center: Vec<Position> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(1, 0),
                Position::new(0, 2),
                Position::new(0, 0),
                Position::new(2, 2),
                Position::new(2, 0),
            ]
        );

        // corners only see three neighbours
        let corner: Vec<Position> = grid.neighbors(Position::new(3, 3)).collect();
        assert_eq!(
            corner,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_from_rows_normalizes_and_validates() {
        let grid = Grid::from_rows(vec![vec!['a', '-'], vec!['c', 'D']]).unwrap();
        assert_eq!(grid.to_string(), "A-\nCD");
        assert!(grid.is_blocked(Position::new(0, 1)));
        assert_eq!(grid.cell_count(), 4);

        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(SolverError::EmptyGrid)
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec!['A', 'B'], vec!['C']]),
            Err(SolverError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_positions_row_major() {
        let grid = grid_from_rows(&["AB", "CD", "EF"]);
        let letters: String = grid.positions().map(|p| grid[p]).collect();
        assert_eq!(letters, "ABCDEF");
    }

    #[test]
    #[should_panic(expected = "Position (2, 0) is outside the 2x2 grid!")]
    fn test_index_out_of_range() {
        let grid = grid_from_rows(&["AB", "CD"]);
        let _ = grid[Position::new(2, 0)];
    }
}
