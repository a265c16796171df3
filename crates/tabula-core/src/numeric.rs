//! Numeric trait hierarchy for type-safe tabulation
//!
//! Two families of types flow through the counting engine:
//!
//! - **Levels** ([`Level`]): integer codes that index a dense table. Offsets are
//!   computed in a widened integer so the full domain of narrow types can be
//!   tabulated without overflow.
//! - **Counts and weights** ([`Numeric`]): the values that are accumulated. The
//!   zero used for an unseen key or a fresh table comes from the type itself,
//!   so integer weights accumulate into integer tables and real weights into
//!   real tables.

use num_traits::Num;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::AddAssign;

/// Base trait for values that can be accumulated as counts or weights
pub trait Numeric: Num + Copy + Debug + Send + Sync + AddAssign {
    /// Convert to f64 for normalization
    fn as_f64(&self) -> f64;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for f64 {
    #[inline]
    fn as_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    #[inline]
    fn as_f64(&self) -> f64 {
        *self as f64
    }
}

/// Integer codes usable as dense-table levels
pub trait Level: Copy + Ord + Hash + Debug + Send + Sync {
    /// Lossless widening used for offset arithmetic
    fn widen(self) -> i128;

    /// Narrow a widened value back, if it fits
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_level {
    ($($t:ty),*) => {
        $(
            impl Level for $t {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_level!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Sum a slice of counts or weights in its own type
pub fn total<C: Numeric>(values: &[C]) -> C {
    let mut acc = C::zero();
    for &v in values {
        acc += v;
    }
    acc
}
