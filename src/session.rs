use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::region_search::{available_parallelism, FoundWords, SearchPool};

use crossbeam::thread::ScopedJoinHandle;
use crossbeam_deque::{Injector, Stealer, Worker};
use crossbeam_utils::thread as crossbeam_thread;
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use worker::RequestWorker;

mod worker;

/// one puzzle: a grid and a dictionary that many word-length requests are
/// answered against. requests run concurrently and share the search pool.
pub struct Session<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    pool: &'a SearchPool,
    config: SearchConfig,
}

impl<'a> Session<'a> {
    pub fn new(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        pool: &'a SearchPool,
        config: SearchConfig,
    ) -> Self {
        Self {
            grid,
            dictionary,
            pool,
            config,
        }
    }

    /// the words found for every requested length. repeated lengths are
    /// answered once; invalid lengths map to an empty set.
    pub fn find_words_by_length(&self, lengths: &[i32]) -> BTreeMap<i32, FoundWords> {
        let requested: BTreeSet<i32> = lengths.iter().copied().collect();
        let mut results = BTreeMap::new();
        if requested.is_empty() {
            return results;
        }

        let num_workers = self
            .config
            .request_workers
            .unwrap_or_else(available_parallelism)
            .clamp(1, requested.len());
        info!(
            "searching {} word length(s) with {} request worker(s)",
            requested.len(),
            num_workers
        );

        let global = Injector::new();
        for length in &requested {
            global.push(*length);
        }

        let mut workers: Vec<Worker<i32>> = Vec::new();
        let mut stealers: Vec<Stealer<i32>> = Vec::new();
        for _ in 0..num_workers {
            let w = Worker::new_fifo();
            stealers.push(w.stealer());
            workers.push(w);
        }

        crossbeam_thread::scope(|s| {
            let mut worker_threads: Vec<ScopedJoinHandle<'_, Vec<(i32, FoundWords)>>> =
                Vec::new();
            for (thread_num, local) in workers.into_iter().enumerate() {
                let request_worker = RequestWorker::new(
                    self.grid,
                    self.dictionary,
                    self.pool,
                    &self.config,
                    local,
                    &global,
                    &stealers,
                );
                let handle = s
                    .builder()
                    .name(format!("request-{}", thread_num))
                    .spawn(move |_| request_worker.run())
                    .unwrap();
                worker_threads.push(handle);
            }

            // every worker has handed back its own results before any merging
            for worker_thread_handle in worker_threads {
                match worker_thread_handle.join() {
                    Ok(completed) => results.extend(completed),
                    Err(_) => panic!("Request worker thread paniced!"),
                }
            }
        })
        .unwrap(); // unwrap as we would just panic anyways

        results
    }

    /// union of the words found for every requested length
    pub fn find_all_words(&self, lengths: &[i32]) -> FoundWords {
        self.find_words_by_length(lengths)
            .into_values()
            .fold(FoundWords::new(), FoundWords::union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Execution, SplitPolicy};
    use crate::region_search::find_words;
    use crate::utilities::test_utilities::{dictionary_from, grid_from_rows, words};

    // C A T S
    // O R E D
    // D O G S
    // - A N T
    const BOARD: [&str; 4] = ["CATS", "ORED", "DOGS", "-ANT"];
    const WORDS: [&str; 12] = [
        "CAT", "CATS", "COD", "CART", "DOG", "DOGS", "ANT", "ANTS", "RED", "TEA", "CORD", "ZZZ",
    ];

    #[test]
    fn test_lengths_are_answered_independently() {
        let grid = grid_from_rows(&BOARD);
        let dictionary = dictionary_from(&WORDS);
        let pool = SearchPool::new(2).unwrap();
        let session = Session::new(&grid, &dictionary, &pool, SearchConfig::default());

        let by_length = session.find_words_by_length(&[4, 3, -1, 3, 17]);
        assert_eq!(
            by_length.keys().copied().collect::<Vec<i32>>(),
            vec![-1, 3, 4, 17]
        );
        for (length, found) in &by_length {
            assert_eq!(found, &find_words(&grid, &dictionary, *length, &pool));
            assert!(found.iter().all(|w| w.chars().count() as i32 == *length));
        }
        assert!(by_length[&-1].is_empty());
        assert!(by_length[&17].is_empty());
        assert!(by_length[&4].contains("CORD"));
        assert!(by_length[&4].contains("ANTS"));
        assert_eq!(by_length[&3], words(&["ANT", "CAT", "COD", "DOG", "RED", "TEA"]));
    }

    #[test]
    fn test_find_all_words_is_union() {
        let grid = grid_from_rows(&BOARD);
        let dictionary = dictionary_from(&WORDS);
        let pool = SearchPool::new(2).unwrap();
        let session = Session::new(&grid, &dictionary, &pool, SearchConfig::default());

        let all = session.find_all_words(&[3, 4]);
        let expected = find_words(&grid, &dictionary, 3, &pool)
            .union(find_words(&grid, &dictionary, 4, &pool));
        assert_eq!(all, expected);
        assert!(!all.contains("ZZZ"));
        assert!(session.find_all_words(&[]).is_empty());
    }

    #[test]
    fn test_single_request_worker_sequential() {
        let grid = grid_from_rows(&BOARD);
        let dictionary = dictionary_from(&WORDS);
        let pool = SearchPool::new(1).unwrap();
        let sequential = Session::new(
            &grid,
            &dictionary,
            &pool,
            SearchConfig {
                split_policy: SplitPolicy::never_split(),
                execution: Execution::Sequential,
                request_workers: Some(1),
                ..SearchConfig::default()
            },
        );
        let parallel = Session::new(&grid, &dictionary, &pool, SearchConfig::default());

        let lengths = [2, 3, 4, 5];
        assert_eq!(
            sequential.find_words_by_length(&lengths),
            parallel.find_words_by_length(&lengths)
        );
    }
}
