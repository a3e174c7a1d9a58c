//! Binary search: iterative, recursive and insertion-point variants
//!
//! All three require an ascending sequence and check it before probing.

use crate::search::{SearchError, SearchKey, SearchOutcome};
use crate::validation::{ensure_ascending, ensure_bounds};
use std::cmp::Ordering;

/// Iterative binary search over inclusive bounds `[first, last]`.
pub fn binary_search<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    ensure_ascending(sequence)?;
    if sequence.is_empty() {
        return Ok(SearchOutcome::Absent);
    }

    let mut first = 0;
    let mut last = sequence.len() - 1;

    while first <= last {
        let middle = first + (last - first) / 2;
        match sequence[middle].cmp(value) {
            Ordering::Equal => return Ok(SearchOutcome::Found(middle)),
            Ordering::Greater => {
                if middle == 0 {
                    break;
                }
                last = middle - 1;
            }
            Ordering::Less => first = middle + 1,
        }
    }

    Ok(SearchOutcome::Absent)
}

/// Recursive binary search over the whole sequence.
pub fn binary_search_recursive<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    if sequence.is_empty() {
        return Ok(SearchOutcome::Absent);
    }
    binary_search_by_recursion(sequence, value, 0, sequence.len() - 1)
}

/// Recursive binary search restricted to the inclusive range `[left, right]`.
///
/// `right` must be a valid index; the first call over a whole sequence uses
/// `left = 0` and `right = len - 1`.
pub fn binary_search_by_recursion<T: SearchKey>(
    sequence: &[T],
    value: &T,
    left: usize,
    right: usize,
) -> Result<SearchOutcome, SearchError> {
    ensure_ascending(sequence)?;
    ensure_bounds(sequence.len(), left, right)?;
    Ok(recurse(sequence, value, left, right))
}

fn recurse<T: Ord>(sequence: &[T], value: &T, left: usize, right: usize) -> SearchOutcome {
    if right < left {
        return SearchOutcome::Absent;
    }

    let midpoint = left + (right - left) / 2;

    match sequence[midpoint].cmp(value) {
        Ordering::Equal => SearchOutcome::Found(midpoint),
        Ordering::Greater if midpoint == 0 => SearchOutcome::Absent,
        Ordering::Greater => recurse(sequence, value, left, midpoint - 1),
        Ordering::Less => recurse(sequence, value, midpoint + 1, right),
    }
}

/// Binary search built on the standard library's insertion point lookup.
///
/// Finds the left insertion point for `value` and confirms the element there
/// is equal to it.
pub fn binary_search_std_lib<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    ensure_ascending(sequence)?;
    let index = sequence.partition_point(|item| item < value);
    if index != sequence.len() && sequence[index] == *value {
        Ok(SearchOutcome::Found(index))
    } else {
        Ok(SearchOutcome::Absent)
    }
}
