//! Error types for search primitives and the partitioned harness

use thiserror::Error;

/// Errors raised by search primitives and the partitioned search harness.
///
/// A value that is simply not in the sequence is never an error; it is
/// reported as [`SearchOutcome::Absent`](crate::search::SearchOutcome::Absent).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A precondition on the input was violated
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Interpolation endpoints are equal over a range of more than one element
    #[error("Degenerate interpolation range [{low}, {high}]: endpoint values are equal")]
    DegenerateRange {
        /// Lower bound of the range
        low: usize,
        /// Upper bound of the range
        high: usize,
    },

    /// One or more harness workers did not produce a result
    #[error("{} of {total} workers failed: {}", failures.len(), summarize(failures))]
    WorkerFailure {
        /// Every fault, in worker id order
        failures: Vec<WorkerFault>,
        /// Number of workers the harness launched or tried to launch
        total: usize,
    },
}

impl SearchError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SearchError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// A single worker that failed to deliver a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("worker {worker_id}: {reason}")]
pub struct WorkerFault {
    pub worker_id: usize,
    pub reason: FaultReason,
}

/// Why a worker failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaultReason {
    /// The search function panicked
    #[error("panicked: {0}")]
    Panicked(String),
    /// No result arrived, or the worker did not terminate, before the deadline
    #[error("no response before deadline")]
    NoResponse,
    /// The search function returned an error for its partition
    #[error("search failed: {0}")]
    Search(Box<SearchError>),
    /// The worker thread could not be started
    #[error("spawn failed: {0}")]
    Spawn(String),
}

fn summarize(failures: &[WorkerFault]) -> String {
    failures
        .iter()
        .map(|fault| fault.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
