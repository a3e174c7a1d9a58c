//! Call-count and timing profiler for search functions
//!
//! A [`ProfileGuard`] is held for exactly the duration of one call and
//! records its sample when dropped, so calls that unwind are still counted.

use crate::search::{SearchError, SearchOutcome};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

/// How a profiled call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Found,
    Absent,
    Error,
    /// The call unwound before reporting a result.
    Panicked,
}

impl CallOutcome {
    pub fn of(result: &Result<SearchOutcome, SearchError>) -> Self {
        match result {
            Ok(SearchOutcome::Found(_)) => CallOutcome::Found,
            Ok(SearchOutcome::Absent) => CallOutcome::Absent,
            Err(_) => CallOutcome::Error,
        }
    }
}

/// Aggregated samples for one profiled name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEntry {
    pub name: String,
    pub calls: u64,
    pub found: u64,
    pub absent: u64,
    pub errors: u64,
    pub panics: u64,
    pub total_time: Duration,
    pub min_time: Option<Duration>,
    pub max_time: Duration,
}

impl ProfileEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn record(&mut self, elapsed: Duration, outcome: CallOutcome) {
        self.calls += 1;
        self.total_time += elapsed;
        self.max_time = self.max_time.max(elapsed);
        self.min_time = Some(self.min_time.map_or(elapsed, |min| min.min(elapsed)));
        match outcome {
            CallOutcome::Found => self.found += 1,
            CallOutcome::Absent => self.absent += 1,
            CallOutcome::Error => self.errors += 1,
            CallOutcome::Panicked => self.panics += 1,
        }
    }

    /// Mean time per call
    pub fn mean_time(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total_time / self.calls as u32
        }
    }
}

/// Shared collector of profile samples. Clones record into the same table.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    entries: Arc<Mutex<BTreeMap<String, ProfileEntry>>>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start profiling one call under `name`.
    pub fn enter(&self, name: impl Into<String>) -> ProfileGuard {
        ProfileGuard {
            profiler: self.clone(),
            name: name.into(),
            start: Instant::now(),
            outcome: None,
        }
    }

    fn record(&self, name: &str, elapsed: Duration, outcome: CallOutcome) {
        let mut entries = self.entries.lock();
        entries
            .entry(name.to_string())
            .or_insert_with(|| ProfileEntry::new(name))
            .record(elapsed, outcome);
    }

    pub fn entry(&self, name: &str) -> Option<ProfileEntry> {
        self.entries.lock().get(name).cloned()
    }

    /// Snapshot of every entry, ordered by name.
    pub fn report(&self) -> ProfileReport {
        ProfileReport {
            entries: self.entries.lock().values().cloned().collect(),
        }
    }
}

/// Scoped acquisition of the profiler for one call.
///
/// The sample is recorded on drop. A guard dropped without an outcome, which
/// only happens when the call unwinds, counts as [`CallOutcome::Panicked`].
#[must_use = "dropping the guard immediately records an empty sample"]
pub struct ProfileGuard {
    profiler: Profiler,
    name: String,
    start: Instant,
    outcome: Option<CallOutcome>,
}

impl ProfileGuard {
    pub fn set_outcome(&mut self, outcome: CallOutcome) {
        self.outcome = Some(outcome);
    }
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let outcome = self.outcome.unwrap_or(CallOutcome::Panicked);
        trace!(name = %self.name, ?elapsed, ?outcome, "profile sample");
        self.profiler.record(&self.name, elapsed, outcome);
    }
}

/// Wrap `search_fn` so every call is recorded in `profiler` under `name`.
pub fn with_profiling<T, F>(
    profiler: &Profiler,
    name: impl Into<String>,
    search_fn: F,
) -> impl Fn(&[T], &T) -> Result<SearchOutcome, SearchError>
where
    F: Fn(&[T], &T) -> Result<SearchOutcome, SearchError>,
{
    let profiler = profiler.clone();
    let name = name.into();
    move |sequence: &[T], value: &T| {
        let mut guard = profiler.enter(name.as_str());
        let result = search_fn(sequence, value);
        guard.set_outcome(CallOutcome::of(&result));
        result
    }
}

/// Point-in-time copy of a profiler's entries.
#[derive(Debug, Clone, Default)]
pub struct ProfileReport {
    pub entries: Vec<ProfileEntry>,
}

impl ProfileReport {
    pub fn total_calls(&self) -> u64 {
        self.entries.iter().map(|e| e.calls).sum()
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} {:>6} {:>6} {:>6} {:>6} {:>6} {:>12} {:>12} {:>12} {:>12}",
            "name", "calls", "found", "absent", "errors", "panics", "total", "mean", "min", "max"
        )?;
        for entry in &self.entries {
            let min = entry.min_time.unwrap_or_default();
            writeln!(
                f,
                "{:<16} {:>6} {:>6} {:>6} {:>6} {:>6} {:>12} {:>12} {:>12} {:>12}",
                entry.name,
                entry.calls,
                entry.found,
                entry.absent,
                entry.errors,
                entry.panics,
                format!("{:.2?}", entry.total_time),
                format!("{:.2?}", entry.mean_time()),
                format!("{:.2?}", min),
                format!("{:.2?}", entry.max_time),
            )?;
        }
        Ok(())
    }
}
