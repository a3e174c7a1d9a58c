//! Sequence search algorithms with timing, profiling and a partitioned
//! multi-worker search harness.

pub mod instrument;
pub mod search;
pub mod validation;
pub mod workload;
