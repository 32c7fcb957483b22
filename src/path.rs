use crate::grid::{Grid, Position};
use std::ops::{Deref, DerefMut};

/// the cells visited by one exploration branch, together with the letters they
/// spell. only ever lives on the recursion stack of a single search.
#[derive(Debug)]
pub struct Path {
    positions: Vec<Position>,
    word: String,
    /// row-major visited flags so membership checks don't scan the stack
    visited: Vec<bool>,
    cols: usize,
}

impl Path {
    pub fn new(grid: &Grid) -> Self {
        Self {
            positions: Vec::new(),
            word: String::new(),
            visited: vec![false; grid.cell_count()],
            cols: grid.cols(),
        }
    }

    /// extend the path by one cell. the cell is removed again when the returned
    /// guard goes out of scope.
    pub fn push(&mut self, position: Position, letter: char) -> PathGuard<'_> {
        let idx = self.index_of(position);
        assert!(
            !self.visited[idx],
            "position {} pushed twice onto the same path",
            position
        );
        self.visited[idx] = true;
        self.positions.push(position);
        self.word.push(letter);
        PathGuard { path: self }
    }

    #[inline(always)]
    pub fn contains(&self, position: Position) -> bool {
        position.col < self.cols
            && self
                .visited
                .get(self.index_of(position))
                .copied()
                .unwrap_or(false)
    }

    /// number of cells on the path
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    fn pop(&mut self) {
        if let Some(position) = self.positions.pop() {
            let idx = self.index_of(position);
            self.visited[idx] = false;
            self.word.pop();
        }
    }

    #[inline(always)]
    fn index_of(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }
}

/// pops the most recent cell off its path when dropped
pub struct PathGuard<'a> {
    path: &'a mut Path,
}

impl Deref for PathGuard<'_> {
    type Target = Path;
    fn deref(&self) -> &Self::Target {
        self.path
    }
}

impl DerefMut for PathGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.path
    }
}

impl Drop for PathGuard<'_> {
    fn drop(&mut self) {
        self.path.pop();
    }
}
