//! Instrumentation wrappers for search primitives
//!
//! Both wrappers take a search function and return one with the same shape.
//! They never change the wrapped function's result.
//! - Timing: reports lookup value, outcome and elapsed time per call
//! - Profiling: aggregates call counts and timings per name in a [`Profiler`]

pub mod profile;
pub mod timing;

pub use profile::{
    CallOutcome, ProfileEntry, ProfileGuard, ProfileReport, Profiler, with_profiling,
};
pub use timing::{Timed, log_timed, time_search, with_timing};
