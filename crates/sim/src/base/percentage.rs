use std::fmt;

use serde::{Deserialize, Serialize};

/// A whole-number percentage in `0..=100`.
///
/// Ratios are rounded to the nearest integer with halves rounding up, so
/// 59.5% becomes 60%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    /// Build from a whole number, returning `None` above 100.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Round `part / whole` to the nearest whole percent.
    ///
    /// `whole` of zero yields 0%. `part` is clamped to `whole`.
    pub fn round_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole) as u128;
        let whole = whole as u128;
        // (200p + w) / 2w == floor(100p/w + 1/2)
        let rounded = (200 * part + whole) / (2 * whole);
        Self(rounded as u8)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ratio_exact() {
        assert_eq!(Percentage::round_ratio(15, 15), Percentage::FULL);
        assert_eq!(Percentage::round_ratio(0, 15), Percentage::ZERO);
        assert_eq!(Percentage::round_ratio(9, 15).value(), 60);
        assert_eq!(Percentage::round_ratio(1, 4).value(), 25);
    }

    #[test]
    fn test_round_ratio_rounds_to_nearest() {
        // 8/15 = 53.33%
        assert_eq!(Percentage::round_ratio(8, 15).value(), 53);
        // 2/3 = 66.67%
        assert_eq!(Percentage::round_ratio(2, 3).value(), 67);
        // 119/200 = 59.5%, halves round up
        assert_eq!(Percentage::round_ratio(119, 200).value(), 60);
        // 1192/2000 = 59.6%
        assert_eq!(Percentage::round_ratio(1192, 2000).value(), 60);
        // 1189/2000 = 59.45%
        assert_eq!(Percentage::round_ratio(1189, 2000).value(), 59);
    }

    #[test]
    fn test_round_ratio_degenerate() {
        assert_eq!(Percentage::round_ratio(3, 0), Percentage::ZERO);
        assert_eq!(Percentage::round_ratio(7, 5), Percentage::FULL);
    }

    #[test]
    fn test_new_bounds() {
        assert_eq!(Percentage::new(100), Some(Percentage::FULL));
        assert_eq!(Percentage::new(101), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percentage::round_ratio(9, 15).to_string(), "60%");
    }
}
