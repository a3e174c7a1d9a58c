//! Partitioned search coordinator that manages worker threads.

use crate::search::parallel::channel::{
    CoordinatorChannels, CoordinatorMessage, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::partition::{Partition, partition_ranges};
use crate::search::{FaultReason, SearchError, SearchKey, SearchOutcome, WorkerFault};
use crate::validation::ensure_ascending;
use crossbeam_channel::RecvTimeoutError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What one worker reported for its partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutcome {
    pub worker_id: usize,
    pub partition: Partition,
    /// Outcome local to the partition.
    pub outcome: SearchOutcome,
    /// Time the worker spent inside the search function.
    pub elapsed: Duration,
}

impl PartitionOutcome {
    /// The outcome mapped back onto the full sequence.
    pub fn global_outcome(&self) -> SearchOutcome {
        self.outcome.offset_by(self.partition.offset)
    }
}

/// Result from a partitioned search run.
#[derive(Debug, Clone)]
pub struct PartitionedResult {
    /// One entry per worker, in the order results arrived.
    pub outcomes: Vec<PartitionOutcome>,
    /// Wall-clock time from validation to the last join.
    pub elapsed: Duration,
}

impl PartitionedResult {
    /// Lowest global position reported by any partition, or `Absent`.
    pub fn global_outcome(&self) -> SearchOutcome {
        self.outcomes
            .iter()
            .filter_map(|o| o.global_outcome().position())
            .min()
            .into()
    }

    /// Number of partitions that reported a match.
    pub fn found_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_found()).count()
    }

    /// Outcomes sorted by partition index.
    pub fn by_partition(&self) -> Vec<&PartitionOutcome> {
        let mut sorted: Vec<_> = self.outcomes.iter().collect();
        sorted.sort_by_key(|o| o.partition.index);
        sorted
    }
}

/// Search `sequence` for `value` by running `search_fn` on contiguous
/// partitions in parallel, one worker thread per partition.
///
/// Each worker searches a private copy of its partition and reports exactly
/// once over the shared result channel. Workers are not cancelled early when
/// another partition finds the value. Waiting for results and for worker
/// termination is bounded by `config.timeout`. Worker faults are returned
/// only after every worker has been joined or has missed the deadline.
pub fn partitioned_search<T, F>(
    search_fn: F,
    sequence: &[T],
    value: &T,
    config: &ParallelConfig,
) -> Result<PartitionedResult, SearchError>
where
    T: SearchKey,
    F: Fn(&[T], &T) -> Result<SearchOutcome, SearchError> + Send + Sync + 'static,
{
    let start_time = Instant::now();

    if config.require_sorted {
        ensure_ascending(sequence)?;
    }
    let partitions = partition_ranges(sequence.len(), config.num_workers)?;
    let total_workers = partitions.len();

    let (coordinator_channels, worker_channels) = create_channels(total_workers);
    let search_fn = Arc::new(search_fn);

    // Spawn every worker before any of them starts searching
    let mut worker_handles: Vec<(usize, JoinHandle<()>)> = Vec::with_capacity(total_workers);
    let mut spawn_fault = None;

    for (partition, channels) in partitions.iter().zip(worker_channels) {
        let worker_id = partition.index;
        let chunk = partition.slice(sequence).to_vec();
        let value = *value;
        let search_fn = Arc::clone(&search_fn);

        let spawned = thread::Builder::new()
            .name(format!("search-worker-{}", worker_id))
            .spawn(move || run_worker(worker_id, &chunk, &value, search_fn.as_ref(), channels));

        match spawned {
            Ok(handle) => {
                debug!(worker_id, partition = %partition, "spawned search worker");
                worker_handles.push((worker_id, handle));
            }
            Err(err) => {
                spawn_fault = Some(WorkerFault {
                    worker_id,
                    reason: FaultReason::Spawn(err.to_string()),
                });
                break;
            }
        }
    }

    if let Some(fault) = spawn_fault {
        warn!(%fault, "aborting partitioned search");
        coordinator_channels.broadcast(CoordinatorMessage::Stop);
        let deadline = Instant::now() + config.timeout;
        let stuck = join_workers(worker_handles, deadline, config.poll_interval);
        if !stuck.is_empty() {
            warn!(?stuck, "workers did not exit after stop");
        }
        return Err(SearchError::WorkerFailure {
            failures: vec![fault],
            total: total_workers,
        });
    }

    coordinator_channels.broadcast(CoordinatorMessage::Start);
    let deadline = Instant::now() + config.timeout;

    let collected = run_coordinator(&partitions, &coordinator_channels, deadline);

    // Workers send their result as their last action, so one poll interval
    // past the read deadline is enough for responsive workers to exit.
    let join_deadline = deadline.max(Instant::now() + config.poll_interval);
    let unterminated = join_workers(worker_handles, join_deadline, config.poll_interval);

    let mut failures = collected.failures;
    for worker_id in unterminated {
        if collected.responded[worker_id] {
            warn!(worker_id, "worker reported but did not terminate; detaching");
        }
    }
    for (worker_id, responded) in collected.responded.iter().enumerate() {
        if !responded {
            failures.push(WorkerFault {
                worker_id,
                reason: FaultReason::NoResponse,
            });
        }
    }

    let elapsed = start_time.elapsed();

    if !failures.is_empty() {
        failures.sort_by_key(|fault| fault.worker_id);
        warn!(
            failed = failures.len(),
            total = total_workers,
            "partitioned search finished with worker faults"
        );
        return Err(SearchError::WorkerFailure {
            failures,
            total: total_workers,
        });
    }

    let result = PartitionedResult {
        outcomes: collected.outcomes,
        elapsed,
    };
    info!(
        workers = total_workers,
        found = result.found_count(),
        elapsed = ?elapsed,
        "partitioned search complete"
    );
    Ok(result)
}

/// Messages gathered by the coordinator before the deadline.
struct Collected {
    outcomes: Vec<PartitionOutcome>,
    failures: Vec<WorkerFault>,
    /// Indexed by worker id.
    responded: Vec<bool>,
}

/// Read one message per worker from the result channel, stopping at the
/// deadline or when every worker has hung up.
fn run_coordinator(
    partitions: &[Partition],
    channels: &CoordinatorChannels,
    deadline: Instant,
) -> Collected {
    let total_workers = partitions.len();
    let mut collected = Collected {
        outcomes: Vec::with_capacity(total_workers),
        failures: Vec::new(),
        responded: vec![false; total_workers],
    };
    let mut received = 0;

    while received < total_workers {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match channels.from_workers.recv_timeout(remaining) {
            Ok(msg) => {
                let worker_id = msg.worker_id();
                if worker_id >= total_workers || collected.responded[worker_id] {
                    warn!(worker_id, "ignoring unexpected worker message");
                    continue;
                }
                collected.responded[worker_id] = true;
                received += 1;

                match msg {
                    WorkerMessage::Finished {
                        worker_id,
                        outcome,
                        elapsed,
                    } => {
                        debug!(worker_id, %outcome, ?elapsed, "worker finished");
                        collected.outcomes.push(PartitionOutcome {
                            worker_id,
                            partition: partitions[worker_id],
                            outcome,
                            elapsed,
                        });
                    }
                    WorkerMessage::Failed { worker_id, error } => {
                        warn!(worker_id, %error, "worker search failed");
                        collected.failures.push(WorkerFault {
                            worker_id,
                            reason: FaultReason::Search(Box::new(error)),
                        });
                    }
                    WorkerMessage::Panicked { worker_id, message } => {
                        warn!(worker_id, %message, "worker panicked");
                        collected.failures.push(WorkerFault {
                            worker_id,
                            reason: FaultReason::Panicked(message),
                        });
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    missing = total_workers - received,
                    "timed out waiting for worker results"
                );
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                // Every worker exited; whoever has not reported never will
                break;
            }
        }
    }

    collected
}

/// Join workers as they terminate, up to `deadline`.
///
/// Returns the ids of workers still running at the deadline. Their handles are
/// dropped, which detaches the threads.
fn join_workers(
    handles: Vec<(usize, JoinHandle<()>)>,
    deadline: Instant,
    poll_interval: Duration,
) -> Vec<usize> {
    let mut pending = handles;

    loop {
        let (finished, running): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|(_, handle)| handle.is_finished());

        for (worker_id, handle) in finished {
            // Panics are caught inside the worker, so this only fails if the
            // result send itself panicked.
            if handle.join().is_err() {
                warn!(worker_id, "worker thread exited by panic");
            }
        }

        if running.is_empty() {
            return Vec::new();
        }

        let now = Instant::now();
        if now >= deadline {
            let stuck: Vec<usize> = running.iter().map(|(id, _)| *id).collect();
            warn!(?stuck, "workers still running at deadline");
            return stuck;
        }

        thread::sleep(poll_interval.min(deadline - now));
        pending = running;
    }
}

/// Worker body: wait for the start signal, run one search, report once.
fn run_worker<T, F>(
    worker_id: usize,
    partition: &[T],
    value: &T,
    search_fn: &F,
    channels: WorkerChannels,
) where
    T: SearchKey,
    F: Fn(&[T], &T) -> Result<SearchOutcome, SearchError>,
{
    match channels.from_coordinator.recv() {
        Ok(CoordinatorMessage::Start) => {}
        Ok(CoordinatorMessage::Stop) | Err(_) => {
            debug!(worker_id, "worker stopped before start");
            return;
        }
    }

    let started = Instant::now();
    let message = match panic::catch_unwind(AssertUnwindSafe(|| search_fn(partition, value))) {
        Ok(Ok(outcome)) => WorkerMessage::Finished {
            worker_id,
            outcome,
            elapsed: started.elapsed(),
        },
        Ok(Err(error)) => WorkerMessage::Failed { worker_id, error },
        Err(payload) => WorkerMessage::Panicked {
            worker_id,
            message: panic_message(payload.as_ref()),
        },
    };

    // The coordinator may have given up already
    let _ = channels.to_coordinator.send(message);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
