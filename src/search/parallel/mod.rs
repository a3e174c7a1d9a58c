//! Partitioned search across worker threads.
//!
//! The harness splits an ordered sequence into contiguous partitions, runs
//! one search primitive per partition on its own worker, and gathers one
//! result per worker over a shared result channel.
//!
//! # Architecture
//!
//! - A **partitioner** that computes one contiguous range per worker
//! - A **coordinator** that spawns workers, starts them together, reads
//!   results with a bounded wait and joins every worker
//! - **Workers** that each own a copy of their partition and report once
//! - A **channel system**: one shared result channel (many producers, one
//!   consumer) and a private control channel per worker
//!
//! # Example
//!
//! ```ignore
//! use seqsearch::search::{binary_search, parallel::{ParallelConfig, partitioned_search}};
//!
//! let config = ParallelConfig::default()
//!     .with_workers(4)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let result = partitioned_search(binary_search, &sequence, &target, &config)?;
//! println!("{}", result.global_outcome());
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod partition;

pub use config::ParallelConfig;
pub use coordinator::{PartitionOutcome, PartitionedResult, partitioned_search};
pub use partition::{Partition, partition_ranges};
