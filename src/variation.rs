//! Variation selector
//!
//! Every recipe accepts any integer as its variation. Out-of-range values
//! wrap into an existing style instead of failing, so callers never need to
//! validate a selector before rendering.

use std::fmt;

/// Wrapping style selector. The documented range is 1..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variation(u32);

impl Variation {
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Palette-list index: `n % len`.
    ///
    /// Used where colors rotate through a fixed list, e.g. plank rows
    /// picking `PLANKS[(row + n) % 3]`.
    pub fn index(self, len: usize) -> usize {
        debug_assert!(len > 0, "palette must not be empty");
        self.0 as usize % len
    }

    /// Style bucket for recipes with `count` qualitatively different looks.
    ///
    /// Variation 1 maps to bucket 0, 2 to bucket 1 and so on; the value 0
    /// lands in the last bucket and `count + 1` wraps back to bucket 0.
    pub fn bucket(self, count: u32) -> u32 {
        debug_assert!(count > 0, "bucket count must not be zero");
        (self.0 % count + count - 1) % count
    }

    /// Shift by a fixed catalog offset (e.g. the "fancy" sofa renders `v + 1`).
    pub const fn offset(self, by: u32) -> Self {
        Self(self.0.wrapping_add(by))
    }
}

impl From<u32> for Variation {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_documented_range_and_wrap() {
        let buckets: Vec<u32> = (0..=7).map(|n| Variation::new(n).bucket(3)).collect();
        assert_eq!(buckets, vec![2, 0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn bucket_handles_extreme_values() {
        assert_eq!(Variation::new(u32::MAX).bucket(3), (u32::MAX % 3 + 2) % 3);
        assert_eq!(Variation::new(9).bucket(1), 0);
    }

    #[test]
    fn index_is_plain_modulo() {
        assert_eq!(Variation::new(1).index(3), 1);
        assert_eq!(Variation::new(3).index(3), 0);
        assert_eq!(Variation::new(5).index(4), 1);
        assert_eq!(Variation::new(0).index(4), 0);
    }

    #[test]
    fn offset_and_display() {
        let v = Variation::new(3).offset(1);
        assert_eq!(v.get(), 4);
        assert_eq!(v.to_string(), "v4");
        assert_eq!(v.bucket(3), 0);
    }
}
