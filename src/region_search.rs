use crate::config::{Execution, SearchConfig, SplitPolicy};
use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::grid::Grid;
use crate::region::Region;

use enumerator::PathEnumerator;
use log::{debug, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;

pub mod enumerator;
pub mod found_words;

pub use found_words::FoundWords;

/// a caller-owned, bounded pool of worker threads that region tasks fork onto.
/// there is no process-wide pool.
pub struct SearchPool {
    pool: ThreadPool,
}

impl SearchPool {
    pub fn new(num_threads: usize) -> Result<Self, SolverError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("region-search-{}", idx))
            .build()?;
        debug!("built search pool with {} threads", pool.current_num_threads());
        Ok(Self { pool })
    }

    /// size the pool to the machine's available parallelism
    pub fn with_available_parallelism() -> Result<Self, SolverError> {
        Self::new(available_parallelism())
    }

    /// honour `num_threads` from the configuration, falling back to the
    /// available parallelism
    pub fn from_config(config: &SearchConfig) -> Result<Self, SolverError> {
        Self::new(config.num_threads.unwrap_or_else(available_parallelism))
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// run `op` inside the pool so that any `rayon::join` it makes forks onto
    /// this pool's workers
    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

pub(crate) fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// everything a region task needs besides its region. shared read-only by
/// every task of one request.
struct SearchContext<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    word_length: usize,
    split_policy: SplitPolicy,
    execution: Execution,
    prune_prefixes: bool,
}

/// finds the words whose paths start inside `region`, either by scanning the
/// region directly or by splitting it in two and merging the halves
pub struct RegionSearchTask<'a> {
    context: &'a SearchContext<'a>,
    region: Region,
}

impl<'a> RegionSearchTask<'a> {
    fn new(context: &'a SearchContext<'a>, region: Region) -> Self {
        Self { context, region }
    }

    pub fn compute(&self) -> FoundWords {
        let context = self.context;
        let split = if context
            .split_policy
            .is_leaf(self.region.area(), context.word_length)
        {
            None
        } else {
            self.region.split()
        };

        let Some((first, second)) = split else {
            return self.compute_directly();
        };

        trace!("splitting {} into {} and {}", self.region, first, second);
        let first = RegionSearchTask::new(context, first);
        let second = RegionSearchTask::new(context, second);

        // each half owns its result; they only meet here, after both returned
        let (first_words, second_words) = match context.execution {
            Execution::Parallel => rayon::join(|| first.compute(), || second.compute()),
            Execution::Sequential => (first.compute(), second.compute()),
        };
        first_words.union(second_words)
    }

    /// run the path enumerator from every open cell of the region
    fn compute_directly(&self) -> FoundWords {
        let context = self.context;
        let enumerator = PathEnumerator::new(
            context.grid,
            context.dictionary,
            context.word_length,
            context.prune_prefixes,
        );

        let found = self
            .region
            .positions()
            .filter(|position| !context.grid.is_blocked(*position))
            .map(|position| enumerator.enumerate_from(position))
            .fold(FoundWords::new(), FoundWords::union);

        trace!("leaf {} found {} words", self.region, found.len());
        found
    }
}

/// every dictionary word of `length` letters traced by a path of adjacent,
/// non-repeating, unblocked cells. negative lengths and lengths longer than
/// the grid has cells give an empty set.
pub fn find_words(
    grid: &Grid,
    dictionary: &Dictionary,
    length: i32,
    pool: &SearchPool,
) -> FoundWords {
    find_words_with_config(grid, dictionary, length, pool, &SearchConfig::default())
}

pub fn find_words_with_config(
    grid: &Grid,
    dictionary: &Dictionary,
    length: i32,
    pool: &SearchPool,
    config: &SearchConfig,
) -> FoundWords {
    let word_length = match usize::try_from(length) {
        Ok(word_length) if word_length <= grid.cell_count() => word_length,
        _ => {
            warn!(
                "invalid word length {} for a grid of {} cells",
                length,
                grid.cell_count()
            );
            return FoundWords::new();
        }
    };

    let context = SearchContext {
        grid,
        dictionary,
        word_length,
        split_policy: config.split_policy,
        execution: config.execution,
        prune_prefixes: config.prune_prefixes,
    };
    let root = RegionSearchTask::new(&context, Region::covering(grid));

    let found = match config.execution {
        Execution::Parallel => pool.install(|| root.compute()),
        Execution::Sequential => root.compute(),
    };
    debug!("found {} words of length {}", found.len(), word_length);
    found
}
