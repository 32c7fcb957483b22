use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::region_search::{find_words_with_config, FoundWords, SearchPool};
use std::{iter, thread};

use crossbeam_deque::{Injector, Stealer, Worker};
use log::debug;

/// requests are coarse, so a worker only ever pulls one at a time from the
/// global queue
const PULL_LIMIT: usize = 1;

/// what one request worker thread is handed to process word-length requests
pub struct RequestWorker<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    pool: &'a SearchPool,
    config: &'a SearchConfig,
    /// queue accessors
    local: Worker<i32>,
    global: &'a Injector<i32>,
    stealers: &'a [Stealer<i32>],
}

impl<'a> RequestWorker<'a> {
    pub fn new(
        grid: &'a Grid,
        dictionary: &'a Dictionary,
        pool: &'a SearchPool,
        config: &'a SearchConfig,
        local: Worker<i32>,
        global: &'a Injector<i32>,
        stealers: &'a [Stealer<i32>],
    ) -> Self {
        Self {
            grid,
            dictionary,
            pool,
            config,
            local,
            global,
            stealers,
        }
    }

    /// answer requests until every queue is dry. every request is queued before
    /// the workers start, so an empty steal means there is nothing left.
    pub fn run(self) -> Vec<(i32, FoundWords)> {
        let mut completed = Vec::new();

        while let Some(length) = self.next_request() {
            let found =
                find_words_with_config(self.grid, self.dictionary, length, self.pool, self.config);
            debug!(
                "request worker {} found {} words of length {}",
                thread::current().name().unwrap_or("unnamed"),
                found.len(),
                length
            );
            completed.push((length, found));
        }

        if !self.local.is_empty() {
            panic!(
                "Local queue on request worker {} was not empty ({} request(s)) at exit.",
                thread::current().name().unwrap_or("unnamed"),
                self.local.len()
            )
        }
        completed
    }

    fn next_request(&self) -> Option<i32> {
        // modified from crossbeam::deque docs
        // pop a task from the local queue, if not empty.
        self.local.pop().or_else(|| {
            // otherwise, we need to look for a task elsewhere.
            iter::repeat_with(|| {
                // try stealing from the global queue.
                self.global
                    .steal_batch_with_limit_and_pop(&self.local, PULL_LIMIT)
                    // or try stealing a task from one of the other threads.
                    .or_else(|| self.stealers.iter().map(|s| s.steal()).collect())
            })
            // loop while no task was stolen and any steal operation needs to be retried.
            .find(|s| !s.is_retry())
            // extract the stolen task, if there is one.
            .and_then(|s| s.success())
        })
    }
}
