use crate::grid::{Grid, Position};
use std::fmt;

/// an inclusive rectangle of grid cells that a search task may start paths from.
/// paths themselves are free to leave it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

impl Region {
    /// panics if the corners are out of order
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        if start_row > end_row || start_col > end_col {
            panic!(
                "Region ({}, {})..=({}, {}) has its corners out of order!",
                start_row, start_col, end_row, end_col
            )
        }
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// the region spanning every cell of the grid
    pub fn covering(grid: &Grid) -> Self {
        // grids always have at least one cell
        Self::new(0, 0, grid.rows() - 1, grid.cols() - 1)
    }

    pub fn start_row(&self) -> usize {
        self.start_row
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn end_row(&self) -> usize {
        self.end_row
    }

    pub fn end_col(&self) -> usize {
        self.end_col
    }

    pub fn height(&self) -> usize {
        self.end_row + 1 - self.start_row
    }

    pub fn width(&self) -> usize {
        self.end_col + 1 - self.start_col
    }

    /// number of cells in the region
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.start_row..=self.end_row).contains(&position.row)
            && (self.start_col..=self.end_col).contains(&position.col)
    }

    /// whether every cell of the region lies on the grid
    pub fn fits(&self, grid: &Grid) -> bool {
        self.end_row < grid.rows() && self.end_col < grid.cols()
    }

    /// row-major cells of the region
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (start_col, end_col) = (self.start_col, self.end_col);
        (self.start_row..=self.end_row)
            .flat_map(move |row| (start_col..=end_col).map(move |col| Position::new(row, col)))
    }

    /// bisect into two disjoint halves that together cover this region exactly.
    /// rows are halved while there is more than one; a single row is halved by
    /// columns instead. a single cell cannot be split.
    pub fn split(&self) -> Option<(Region, Region)> {
        if self.start_row < self.end_row {
            let mid = self.start_row + (self.end_row - self.start_row) / 2;
            Some((
                Region::new(self.start_row, self.start_col, mid, self.end_col),
                Region::new(mid + 1, self.start_col, self.end_row, self.end_col),
            ))
        } else if self.start_col < self.end_col {
            let mid = self.start_col + (self.end_col - self.start_col) / 2;
            Some((
                Region::new(self.start_row, self.start_col, self.end_row, mid),
                Region::new(self.start_row, mid + 1, self.end_row, self.end_col),
            ))
        } else {
            None
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={} cols {}..={}",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}
