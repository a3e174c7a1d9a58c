//! Linear scan

use crate::search::{SearchError, SearchKey, SearchOutcome};

/// Scan `sequence` left to right and return the first position holding
/// `value`.
///
/// Works on any sequence, sorted or not.
pub fn linear_search<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    Ok(sequence.iter().position(|item| item == value).into())
}
