//! Set-membership lookup

use crate::search::{SearchError, SearchKey, SearchOutcome};
use std::collections::{BTreeSet, HashMap};

/// Look `value` up through a hashed set built from `sequence`.
///
/// The set maps each distinct value to its first position so membership can
/// be reported as a position like every other primitive. No ordering is
/// required.
pub fn find_by_set<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    let mut members: HashMap<T, usize> = HashMap::with_capacity(sequence.len());
    for (position, item) in sequence.iter().enumerate() {
        members.entry(*item).or_insert(position);
    }
    Ok(members.get(value).copied().into())
}

/// Intersect the set of values in `sequence` with `{value}`.
///
/// The result has zero or one element and carries no position.
pub fn set_intersection<T: SearchKey>(sequence: &[T], value: &T) -> BTreeSet<T> {
    let members: BTreeSet<T> = sequence.iter().copied().collect();
    let probe = BTreeSet::from([*value]);
    members.intersection(&probe).copied().collect()
}
