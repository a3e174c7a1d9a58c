//! Key types accepted by the search primitives

use std::fmt::Debug;
use std::hash::Hash;

/// A value that can be stored in an ordered sequence and looked up by every
/// search primitive.
///
/// `ordinal` projects the key onto an exact integer line. Interpolation search
/// uses it to estimate probe positions without floating point rounding.
pub trait SearchKey: Ord + Hash + Copy + Debug + Send + Sync + 'static {
    fn ordinal(self) -> i128;
}

macro_rules! impl_search_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SearchKey for $ty {
                #[inline]
                fn ordinal(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_search_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
