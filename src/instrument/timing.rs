//! Execution-time reporting around a single search call

use crate::search::{SearchError, SearchOutcome};
use std::fmt::Debug;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A value together with the wall-clock time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<R> {
    pub result: R,
    pub elapsed: Duration,
}

impl Timed<Result<SearchOutcome, SearchError>> {
    /// One-line report for a successful lookup, `None` otherwise.
    pub fn summary<V: Debug>(&self, value: &V) -> Option<String> {
        match self.result {
            Ok(SearchOutcome::Found(position)) => Some(format!(
                "{:?} found at position {}, took {:.2?}",
                value, position, self.elapsed
            )),
            _ => None,
        }
    }
}

/// Run `search_fn` once and measure it.
pub fn time_search<T, F>(
    search_fn: F,
    sequence: &[T],
    value: &T,
) -> Timed<Result<SearchOutcome, SearchError>>
where
    F: Fn(&[T], &T) -> Result<SearchOutcome, SearchError>,
{
    let start = Instant::now();
    let result = search_fn(sequence, value);
    Timed {
        result,
        elapsed: start.elapsed(),
    }
}

/// Wrap `search_fn` so every call is timed and reported through `tracing`.
///
/// The wrapped function's result is returned unchanged.
pub fn with_timing<T, F>(
    name: impl Into<String>,
    search_fn: F,
) -> impl Fn(&[T], &T) -> Result<SearchOutcome, SearchError>
where
    T: Debug,
    F: Fn(&[T], &T) -> Result<SearchOutcome, SearchError>,
{
    let name = name.into();
    move |sequence: &[T], value: &T| {
        let timed = time_search(&search_fn, sequence, value);
        log_timed(&name, value, &timed);
        timed.result
    }
}

/// Report one measured call: found values at info level, absent values at
/// debug level and errors at warn level.
pub fn log_timed<V: Debug>(
    name: &str,
    value: &V,
    timed: &Timed<Result<SearchOutcome, SearchError>>,
) {
    match &timed.result {
        Ok(SearchOutcome::Found(position)) => info!(
            search = %name,
            value = ?value,
            position,
            elapsed = ?timed.elapsed,
            "value found"
        ),
        Ok(SearchOutcome::Absent) => debug!(
            search = %name,
            value = ?value,
            elapsed = ?timed.elapsed,
            "value absent"
        ),
        Err(error) => warn!(
            search = %name,
            value = ?value,
            elapsed = ?timed.elapsed,
            %error,
            "search failed"
        ),
    }
}
