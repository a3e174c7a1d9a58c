//! Result and control channels between the coordinator and search workers.

use crate::search::{SearchError, SearchOutcome};
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::time::Duration;

/// Message sent from a worker to the coordinator. Each worker sends exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// The search over the worker's partition completed.
    Finished {
        worker_id: usize,
        /// Position local to the partition.
        outcome: SearchOutcome,
        elapsed: Duration,
    },
    /// The search function rejected the partition.
    Failed { worker_id: usize, error: SearchError },
    /// The search function panicked.
    Panicked { worker_id: usize, message: String },
}

impl WorkerMessage {
    pub fn worker_id(&self) -> usize {
        match self {
            WorkerMessage::Finished { worker_id, .. }
            | WorkerMessage::Failed { worker_id, .. }
            | WorkerMessage::Panicked { worker_id, .. } => *worker_id,
        }
    }
}

/// Message sent from coordinator to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorMessage {
    /// Every worker has been spawned; begin searching.
    Start,
    /// Exit without searching.
    Stop,
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Producer handle on the shared result channel.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Control messages from the coordinator.
    pub from_coordinator: Receiver<CoordinatorMessage>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Sole consumer of the result channel.
    pub from_workers: Receiver<WorkerMessage>,
    /// One control sender per worker, indexed by worker id.
    pub to_workers: Vec<Sender<CoordinatorMessage>>,
}

impl CoordinatorChannels {
    /// Send `message` to every worker that is still listening.
    pub fn broadcast(&self, message: CoordinatorMessage) {
        for tx in &self.to_workers {
            let _ = tx.send(message);
        }
    }
}

/// Create channels for a harness run with the given number of workers.
///
/// The coordinator keeps no sender of its own on the result channel, so the
/// receiver disconnects once every worker has exited.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    // Unbounded so a finishing worker never blocks on send
    let (worker_tx, coordinator_rx) = unbounded();

    let mut to_workers = Vec::with_capacity(num_workers);
    let mut worker_channels = Vec::with_capacity(num_workers);

    for _ in 0..num_workers {
        // Only Start or Stop is ever sent, once
        let (coord_tx, worker_rx) = bounded(1);
        to_workers.push(coord_tx);
        worker_channels.push(WorkerChannels {
            to_coordinator: worker_tx.clone(),
            from_coordinator: worker_rx,
        });
    }

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        to_workers,
    };

    (coordinator, worker_channels)
}
