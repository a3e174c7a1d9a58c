//! Interpolation search

use crate::search::{SearchError, SearchKey, SearchOutcome};
use crate::validation::ensure_ascending;
use std::cmp::Ordering;

/// Interpolation search over an ascending sequence.
///
/// Each probe is placed proportionally between the bracketing endpoints:
/// `low + floor((high - low) * (value - seq[low]) / (seq[high] - seq[low]))`.
/// The estimate is computed on exact integer ordinals. A singleton range is
/// probed directly; equal endpoint values over a wider range have no defined
/// probe and yield [`SearchError::DegenerateRange`].
pub fn interpolation_search<T: SearchKey>(
    sequence: &[T],
    value: &T,
) -> Result<SearchOutcome, SearchError> {
    ensure_ascending(sequence)?;
    if sequence.is_empty() {
        return Ok(SearchOutcome::Absent);
    }

    let mut low = 0;
    let mut high = sequence.len() - 1;

    while low <= high && sequence[low] <= *value && *value <= sequence[high] {
        if low == high {
            return Ok(if sequence[low] == *value {
                SearchOutcome::Found(low)
            } else {
                SearchOutcome::Absent
            });
        }

        let span = sequence[high].ordinal() - sequence[low].ordinal();
        if span == 0 {
            return Err(SearchError::DegenerateRange { low, high });
        }
        let rise = value.ordinal() - sequence[low].ordinal();
        let index = low + probe_offset(high - low, rise, span);

        match sequence[index].cmp(value) {
            Ordering::Equal => return Ok(SearchOutcome::Found(index)),
            Ordering::Less => low = index + 1,
            Ordering::Greater => {
                if index == 0 {
                    break;
                }
                high = index - 1;
            }
        }
    }

    Ok(SearchOutcome::Absent)
}

/// Offset of the probe from `low`. Requires `0 <= rise <= span` and `span > 0`,
/// so the result never exceeds `width`.
fn probe_offset(width: usize, rise: i128, span: i128) -> usize {
    // Slice lengths fit in isize and key ordinals in 65 bits, so the product
    // fits in u128.
    let scaled = width as u128 * rise as u128;
    (scaled / span as u128) as usize
}
