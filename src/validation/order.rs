//! Ordering preconditions for the sorted-only search primitives

use crate::search::SearchError;

/// Check that `sequence` is in ascending (non-decreasing) order.
///
/// Binary, bisect and interpolation search silently return wrong answers on
/// unsorted input, so they call this before probing.
pub fn ensure_ascending<T: Ord>(sequence: &[T]) -> Result<(), SearchError> {
    match sequence.windows(2).position(|pair| pair[0] > pair[1]) {
        None => Ok(()),
        Some(index) => Err(SearchError::invalid_input(format!(
            "sequence is not sorted ascending (element {} is greater than element {})",
            index,
            index + 1
        ))),
    }
}

/// Check that inclusive bounds `[left, right]` lie inside a sequence of `len`
/// elements.
pub fn ensure_bounds(len: usize, left: usize, right: usize) -> Result<(), SearchError> {
    if right >= len {
        return Err(SearchError::invalid_input(format!(
            "right bound {} is out of range for a sequence of {} elements",
            right, len
        )));
    }
    if left > right.saturating_add(1) {
        return Err(SearchError::invalid_input(format!(
            "left bound {} is past right bound {}",
            left, right
        )));
    }
    Ok(())
}
