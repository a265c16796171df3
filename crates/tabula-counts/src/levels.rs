//! Level ranges: the integer domains of dense tabulation

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tabula_core::{Error, Level, Result};
use tracing::debug;

/// A contiguous inclusive interval of integer levels
///
/// Slot `i` of a dense table built over this range counts the level
/// `low + i`. Values outside `[low, high]` are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<L>",
    into = "RawRange<L>",
    bound(serialize = "L: Level + Serialize", deserialize = "L: Level + Deserialize<'de>")
)]
pub struct LevelRange<L> {
    low: L,
    high: L,
}

impl<L: Level> LevelRange<L> {
    /// Create the range `[low, high]`
    ///
    /// Fails if `low > high` or if the range has more levels than a table
    /// can address.
    pub fn new(low: L, high: L) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidParameter(format!(
                "level range low {low:?} exceeds high {high:?}"
            )));
        }
        let size = (high.widen() - low.widen()) as u128 + 1;
        if size > usize::MAX as u128 {
            return Err(Error::InvalidParameter(format!(
                "level range {low:?}..={high:?} has {size} levels, more than a table can hold"
            )));
        }
        Ok(Self { low, high })
    }

    /// The range `[1, k]`
    pub fn one_to(k: L) -> Result<Self> {
        let one = L::narrow(1).ok_or_else(|| {
            Error::InvalidParameter(format!("level type of {k:?} cannot represent 1"))
        })?;
        if k < one {
            return Err(Error::InvalidParameter(format!(
                "level count must be at least 1, got {k:?}"
            )));
        }
        Self::new(one, k)
    }

    /// The exact min–max span of `data`
    pub fn span(data: &[L]) -> Result<Self> {
        let (&first, rest) = data
            .split_first()
            .ok_or_else(|| Error::empty_input("span inference"))?;
        let (low, high) = rest.iter().fold((first, first), |(lo, hi), &v| {
            (if v < lo { v } else { lo }, if v > hi { v } else { hi })
        });
        debug!("Inferred level span {:?}..={:?} from {} values", low, high, data.len());
        Self::new(low, high)
    }

    /// Lowest level (inclusive)
    pub fn low(&self) -> L {
        self.low
    }

    /// Highest level (inclusive)
    pub fn high(&self) -> L {
        self.high
    }

    /// Number of levels, i.e. the length of a dense table over this range
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.high.widen() - self.low.widen()) as usize + 1
    }

    /// Check if a value lies within the range
    #[inline]
    pub fn contains(&self, value: L) -> bool {
        self.low <= value && value <= self.high
    }

    /// Table offset of `value`, or `None` when it lies outside the range
    #[inline]
    pub fn offset(&self, value: L) -> Option<usize> {
        if self.contains(value) {
            Some((value.widen() - self.low.widen()) as usize)
        } else {
            None
        }
    }

    /// Bounds as a `(low, high)` pair
    pub fn bounds(&self) -> (L, L) {
        (self.low, self.high)
    }

    /// Level stored at a table offset
    pub fn level_at(&self, offset: usize) -> Option<L> {
        if offset >= self.len() {
            return None;
        }
        L::narrow(self.low.widen() + offset as i128)
    }

    /// Iterate over every level in ascending order
    pub fn iter(&self) -> impl Iterator<Item = L> + '_ {
        (0..self.len()).filter_map(move |i| self.level_at(i))
    }

    /// Every level in ascending order
    pub fn levels(&self) -> Vec<L> {
        self.iter().collect()
    }
}

/// Unvalidated serde form of a level range
#[derive(Serialize, Deserialize)]
struct RawRange<L> {
    low: L,
    high: L,
}

impl<L: Level> TryFrom<RawRange<L>> for LevelRange<L> {
    type Error = Error;

    fn try_from(raw: RawRange<L>) -> Result<Self> {
        Self::new(raw.low, raw.high)
    }
}

impl<L> From<LevelRange<L>> for RawRange<L> {
    fn from(range: LevelRange<L>) -> Self {
        RawRange {
            low: range.low,
            high: range.high,
        }
    }
}

impl<L: Level> TryFrom<RangeInclusive<L>> for LevelRange<L> {
    type Error = Error;

    fn try_from(range: RangeInclusive<L>) -> Result<Self> {
        let (low, high) = range.into_inner();
        Self::new(low, high)
    }
}

impl<L: fmt::Display> fmt::Display for LevelRange<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}

/// How the domain of a one-dimensional dense tabulation is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Levels<L> {
    /// An explicit range
    Range(LevelRange<L>),
    /// `[1, k]`
    OneTo(L),
    /// The min–max span of the data
    Span,
}

impl<L: Level> Levels<L> {
    /// Resolve to a concrete range for `data`
    pub fn resolve(self, data: &[L]) -> Result<LevelRange<L>> {
        match self {
            Levels::Range(range) => Ok(range),
            Levels::OneTo(k) => LevelRange::one_to(k),
            Levels::Span => LevelRange::span(data),
        }
    }
}

impl<L> From<LevelRange<L>> for Levels<L> {
    fn from(range: LevelRange<L>) -> Self {
        Levels::Range(range)
    }
}

/// How the domain of a joint (two-dimensional) dense tabulation is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointLevels<L> {
    /// One range per axis
    Ranges(LevelRange<L>, LevelRange<L>),
    /// The same range on both axes
    Square(LevelRange<L>),
    /// `[1, kx] × [1, ky]`
    OneTo(L, L),
    /// `[1, k] × [1, k]`
    SquareOneTo(L),
    /// Each axis spans its own data
    Span,
}

impl<L: Level> JointLevels<L> {
    /// Resolve to concrete `(x, y)` ranges for the paired data
    pub fn resolve(self, x: &[L], y: &[L]) -> Result<(LevelRange<L>, LevelRange<L>)> {
        match self {
            JointLevels::Ranges(rx, ry) => Ok((rx, ry)),
            JointLevels::Square(r) => Ok((r, r)),
            JointLevels::OneTo(kx, ky) => Ok((LevelRange::one_to(kx)?, LevelRange::one_to(ky)?)),
            JointLevels::SquareOneTo(k) => {
                let r = LevelRange::one_to(k)?;
                Ok((r, r))
            }
            JointLevels::Span => Ok((LevelRange::span(x)?, LevelRange::span(y)?)),
        }
    }
}

impl<L> From<(LevelRange<L>, LevelRange<L>)> for JointLevels<L> {
    fn from((rx, ry): (LevelRange<L>, LevelRange<L>)) -> Self {
        JointLevels::Ranges(rx, ry)
    }
}

impl<L> From<LevelRange<L>> for JointLevels<L> {
    fn from(range: LevelRange<L>) -> Self {
        JointLevels::Square(range)
    }
}
