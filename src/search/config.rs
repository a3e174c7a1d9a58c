//! Algorithm selection

use crate::search::{
    SearchError, SearchKey, SearchOutcome, binary_search, binary_search_recursive,
    binary_search_std_lib, find_by_set, interpolation_search, linear_search,
};

/// Function pointer shape shared by every search primitive.
pub type SearchFn<T> = fn(&[T], &T) -> Result<SearchOutcome, SearchError>;

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Left-to-right scan
    Linear,
    /// Iterative binary search
    #[default]
    Binary,
    /// Recursive binary search
    Recursive,
    /// Insertion point lookup followed by an equality check
    Bisect,
    /// Proportional probing between bracketing endpoints
    Interpolation,
    /// Hashed set membership
    Set,
}

impl Algorithm {
    /// Every algorithm, in the order the demo runs them.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Bisect,
        Algorithm::Interpolation,
        Algorithm::Set,
        Algorithm::Recursive,
    ];

    /// Whether the algorithm only gives correct answers on ascending input.
    pub fn requires_sorted(&self) -> bool {
        match self {
            Algorithm::Linear | Algorithm::Set => false,
            Algorithm::Binary
            | Algorithm::Recursive
            | Algorithm::Bisect
            | Algorithm::Interpolation => true,
        }
    }

    /// The primitive implementing this algorithm.
    pub fn search_fn<T: SearchKey>(&self) -> SearchFn<T> {
        match self {
            Algorithm::Linear => linear_search::<T>,
            Algorithm::Binary => binary_search::<T>,
            Algorithm::Recursive => binary_search_recursive::<T>,
            Algorithm::Bisect => binary_search_std_lib::<T>,
            Algorithm::Interpolation => interpolation_search::<T>,
            Algorithm::Set => find_by_set::<T>,
        }
    }

    /// Run this algorithm directly on `sequence`.
    pub fn search<T: SearchKey>(
        &self,
        sequence: &[T],
        value: &T,
    ) -> Result<SearchOutcome, SearchError> {
        (self.search_fn::<T>())(sequence, value)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Linear => write!(f, "linear"),
            Algorithm::Binary => write!(f, "binary"),
            Algorithm::Recursive => write!(f, "recursive"),
            Algorithm::Bisect => write!(f, "bisect"),
            Algorithm::Interpolation => write!(f, "interpolation"),
            Algorithm::Set => write!(f, "set"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "linear" | "scan" => Ok(Algorithm::Linear),
            "binary" | "iterative" => Ok(Algorithm::Binary),
            "recursive" | "binary-recursive" => Ok(Algorithm::Recursive),
            "bisect" | "std-lib" | "stdlib" => Ok(Algorithm::Bisect),
            "interpolation" | "interp" => Ok(Algorithm::Interpolation),
            "set" | "sets" | "membership" => Ok(Algorithm::Set),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: linear, binary, recursive, bisect, \
                 interpolation, set",
                s
            )),
        }
    }
}
