//! Splitting a sequence into contiguous per-worker partitions.

use crate::search::SearchError;
use std::fmt;
use std::ops::Range;

/// A contiguous sub-range of the sequence assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Partition number, also the id of the worker that searches it.
    pub index: usize,
    /// Global position of the partition's first element.
    pub offset: usize,
    pub len: usize,
}

impl Partition {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn slice<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        &sequence[self.range()]
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.offset, self.end())
    }
}

/// Split `len` elements into `num_workers` contiguous partitions.
///
/// Every partition gets `len / num_workers` elements; the last one also takes
/// the `len % num_workers` leftover elements so the whole sequence is covered.
pub fn partition_ranges(len: usize, num_workers: usize) -> Result<Vec<Partition>, SearchError> {
    if len == 0 {
        return Err(SearchError::invalid_input(
            "cannot partition an empty sequence",
        ));
    }
    if num_workers == 0 {
        return Err(SearchError::invalid_input(
            "worker count must be at least 1",
        ));
    }
    if num_workers > len {
        return Err(SearchError::invalid_input(format!(
            "worker count {} exceeds sequence length {}",
            num_workers, len
        )));
    }

    let chunk_size = len / num_workers;
    let remainder = len % num_workers;

    let partitions = (0..len - remainder)
        .step_by(chunk_size)
        .enumerate()
        .map(|(index, offset)| {
            let extra = if index + 1 == num_workers { remainder } else { 0 };
            Partition {
                index,
                offset,
                len: chunk_size + extra,
            }
        })
        .collect();

    Ok(partitions)
}
