//! Configuration for partitioned search execution.

use crate::search::Algorithm;
use std::time::Duration;

/// Configuration for partitioned search execution.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads, one per partition.
    pub num_workers: usize,
    /// Upper bound on waiting for results and for workers to terminate.
    pub timeout: Duration,
    /// How often the coordinator re-checks workers that have not terminated.
    pub poll_interval: Duration,
    /// Reject unsorted input before partitioning.
    pub require_sorted: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(100),
            require_sorted: true,
        }
    }
}

impl ParallelConfig {
    /// Configuration suited to running `algorithm` on every partition.
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        Self::default().with_require_sorted(algorithm.requires_sorted())
    }

    /// Set the number of workers. Zero is rejected when the search runs.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the number of workers from an Option, keeping the current value on None.
    pub fn with_workers_option(mut self, num_workers: Option<usize>) -> Self {
        if let Some(num_workers) = num_workers {
            self.num_workers = num_workers;
        }
        self
    }

    /// Set the bound on result collection and worker termination.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout from an Option, keeping the current value on None.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_require_sorted(mut self, require_sorted: bool) -> Self {
        self.require_sorted = require_sorted;
        self
    }
}
