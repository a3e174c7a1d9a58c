//! Search algorithms over ordered in-memory sequences
//!
//! This module provides the search primitives and the harness that runs them
//! across partitions:
//! - Linear: left-to-right scan, no ordering required
//! - Binary: iterative, recursive and insertion-point variants
//! - Interpolation: proportional probing on ascending integer keys
//! - Set: hashed membership lookup
//! - Parallel: partitioned multi-worker search with a shared result channel
//!
//! Every primitive has the shape `fn(&[T], &T) -> Result<SearchOutcome, SearchError>`.
//! A missing value is `Ok(SearchOutcome::Absent)`; errors are reserved for
//! violated preconditions.

pub mod binary;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod key;
pub mod linear;
pub mod membership;
pub mod parallel;
pub mod result;

pub use binary::{
    binary_search, binary_search_by_recursion, binary_search_recursive, binary_search_std_lib,
};
pub use config::{Algorithm, SearchFn};
pub use error::{FaultReason, SearchError, WorkerFault};
pub use interpolation::interpolation_search;
pub use key::SearchKey;
pub use linear::linear_search;
pub use membership::{find_by_set, set_intersection};
pub use result::SearchOutcome;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Ascending sequences of unique values.
    fn unique_sorted() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::btree_set(-10_000i64..10_000, 0..200)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_every_primitive_finds_present_values(
            seq in unique_sorted().prop_filter("non-empty", |s| !s.is_empty()),
            pick in any::<prop::sample::Index>(),
        ) {
            let value = seq[pick.index(seq.len())];
            for algorithm in Algorithm::ALL {
                let outcome = algorithm.search(&seq, &value).unwrap();
                let index = outcome.position().expect("present value must be found");
                prop_assert_eq!(seq[index], value, "{}", algorithm);
            }
        }

        #[test]
        fn prop_every_primitive_reports_missing_values_absent(
            seq in unique_sorted(),
            value in -12_000i64..12_000,
        ) {
            prop_assume!(!seq.contains(&value));
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(
                    algorithm.search(&seq, &value),
                    Ok(SearchOutcome::Absent),
                    "{}",
                    algorithm
                );
            }
        }

        #[test]
        fn prop_primitives_are_idempotent(seq in unique_sorted(), value in -10_000i64..10_000) {
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(algorithm.search(&seq, &value), algorithm.search(&seq, &value));
            }
        }

        #[test]
        fn prop_set_intersection_agrees_with_membership(
            seq in unique_sorted(),
            value in -10_000i64..10_000,
        ) {
            let hit = set_intersection(&seq, &value);
            let found = find_by_set(&seq, &value).unwrap().is_found();
            prop_assert_eq!(hit == BTreeSet::from([value]), found);
        }
    }

    #[test]
    fn test_empty_sequence_is_absent_everywhere() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.search::<u32>(&[], &3),
                Ok(SearchOutcome::Absent),
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn test_single_element_sequence() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.search(&[9u8], &9), Ok(SearchOutcome::Found(0)));
            assert_eq!(algorithm.search(&[9u8], &4), Ok(SearchOutcome::Absent));
        }
    }

    #[test]
    fn test_known_scenarios() {
        assert_eq!(
            binary_search(&[0, 15, 17, 20, 25], &20),
            Ok(SearchOutcome::Found(3))
        );
        assert_eq!(binary_search(&[0, 1, 2, 3, 4], &6), Ok(SearchOutcome::Absent));
        assert_eq!(
            interpolation_search(&[0, 5, 7, 10, 15], &6),
            Ok(SearchOutcome::Absent)
        );
    }

    #[test]
    fn test_sorted_only_primitives_reject_unsorted() {
        let seq = [10, 2, 33, 4];
        for algorithm in Algorithm::ALL {
            let result = algorithm.search(&seq, &33);
            if algorithm.requires_sorted() {
                assert!(
                    matches!(result, Err(SearchError::InvalidInput { .. })),
                    "{} accepted unsorted input",
                    algorithm
                );
            } else {
                assert_eq!(result, Ok(SearchOutcome::Found(2)));
            }
        }
    }
}
