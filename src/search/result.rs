//! Search outcome types

use std::fmt;

/// Outcome of a single search over a sequence.
///
/// Every primitive reports through this type, so "not found" is always
/// `Absent` and never a sentinel position or an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchOutcome {
    /// Zero-based position of a matching element.
    Found(usize),
    /// The lookup value is not in the sequence.
    #[default]
    Absent,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(*index),
            SearchOutcome::Absent => None,
        }
    }

    /// Shift a found position by `offset`, e.g. to map a partition-local
    /// index back onto the full sequence.
    pub fn offset_by(self, offset: usize) -> Self {
        match self {
            SearchOutcome::Found(index) => SearchOutcome::Found(offset + index),
            SearchOutcome::Absent => SearchOutcome::Absent,
        }
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(position: Option<usize>) -> Self {
        position.map_or(SearchOutcome::Absent, SearchOutcome::Found)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(index) => write!(f, "found at position {}", index),
            SearchOutcome::Absent => write!(f, "not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_position() {
        assert_eq!(SearchOutcome::Found(3).position(), Some(3));
        assert_eq!(SearchOutcome::Absent.position(), None);
        assert!(SearchOutcome::Found(0).is_found());
        assert!(!SearchOutcome::Absent.is_found());
    }

    #[test]
    fn test_outcome_offset() {
        assert_eq!(SearchOutcome::Found(2).offset_by(25), SearchOutcome::Found(27));
        assert_eq!(SearchOutcome::Absent.offset_by(25), SearchOutcome::Absent);
    }

    #[test]
    fn test_outcome_from_option() {
        assert_eq!(SearchOutcome::from(Some(7)), SearchOutcome::Found(7));
        assert_eq!(SearchOutcome::from(None), SearchOutcome::Absent);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", SearchOutcome::Found(4)), "found at position 4");
        assert_eq!(format!("{}", SearchOutcome::Absent), "not found");
    }
}
