//! Types for use as [crate::Read::Cfg].

use core::ops::{Bound, RangeBounds};

/// Limits the range of a decoded value.
///
/// Used to bound the length of strings, byte arrays and sequences read from untrusted input,
/// so a hostile count prefix cannot force an oversized allocation.
///
/// # Examples
///
/// ```
/// use objwire_codec::RangeCfg;
///
/// let cfg = RangeCfg::new(0..=1024);
/// assert!(cfg.contains(&500));
/// assert!(!cfg.contains(&2000));
///
/// let cfg: RangeCfg<usize> = (..).into();
/// assert!(cfg.contains(&usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd> {
    start: Bound<T>,
    end: Bound<T>,
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl<T: Copy + PartialOrd> From<$range> for RangeCfg<T> {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<T>,
    core::ops::RangeInclusive<T>,
    core::ops::RangeFrom<T>,
    core::ops::RangeTo<T>,
    core::ops::RangeToInclusive<T>
);

impl<T: Copy + PartialOrd> From<core::ops::RangeFull> for RangeCfg<T> {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        RangeCfg {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Included(s) => value >= s,
            Bound::Excluded(s) => value > s,
            Bound::Unbounded => true,
        };
        let below_end = match &self.end {
            Bound::Included(e) => value <= e,
            Bound::Excluded(e) => value < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_cfg_contains() {
        let unbounded: RangeCfg<usize> = (..).into();
        assert!(unbounded.contains(&0));
        assert!(unbounded.contains(&usize::MAX));

        let half_open: RangeCfg<usize> = (5..10).into();
        assert!(!half_open.contains(&4));
        assert!(half_open.contains(&5));
        assert!(half_open.contains(&9));
        assert!(!half_open.contains(&10));

        let inclusive: RangeCfg<usize> = (..=10).into();
        assert!(inclusive.contains(&10));
        assert!(!inclusive.contains(&11));

        let from: RangeCfg<u32> = (1..).into();
        assert!(!from.contains(&0));
        assert!(from.contains(&u32::MAX));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_range_cfg_empty() {
        let empty: RangeCfg<usize> = (5..5).into();
        assert!(!empty.contains(&5));
        let reversed: RangeCfg<usize> = (6..=5).into();
        assert!(!reversed.contains(&5));
        assert!(!reversed.contains(&6));
    }
}
