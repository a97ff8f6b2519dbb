//! The closed interval a digit lives in, and the wraparound rule that maps an
//! arbitrary raw value back into it.
use std::fmt;
use std::ops::RangeInclusive;

use crate::DigitError;

/// Smallest recommended lower bound. Keeping `min` at or above this means
/// `min - 1` and interval sums cannot overflow an `i64`.
pub const MIN_SAFE: i64 = (i64::MIN + 1) / 2;

/// Largest recommended upper bound, the mirror of [MIN_SAFE].
pub const MAX_SAFE: i64 = (i64::MAX - 1) / 2;

/// An inclusive `[min, max]` interval with `max >= min`.
///
/// These are plain numbers; nothing stops you from using bounds outside
/// [MIN_SAFE]..=[MAX_SAFE], they are only the defaults used by
/// [crate::Digit::unbounded].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Bounds {
    min: i64,
    max: i64,
}

/// The outcome of settling one raw value into a [Bounds].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Settlement {
    /// The wrapped value.
    pub value: i64,
    /// Signed number of ranges crossed. Positive when the raw value was above
    /// `max`, negative when it was below `min`, zero when it was in range.
    pub carry: i64,
}

impl Settlement {
    #[inline]
    pub fn wrapped(&self) -> bool {
        self.carry != 0
    }
}

impl Bounds {
    pub const SAFE: Self = Self {
        min: MIN_SAFE,
        max: MAX_SAFE,
    };

    pub fn new(min: i64, max: i64) -> Result<Self, DigitError> {
        if max < min {
            return Err(DigitError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of distinct values, `max - min + 1`. Never zero.
    ///
    /// A `u64` because `[i64::MIN, i64::MAX]` has `2^64` values, one too many
    /// for a `u64` as well; that single case saturates at `u64::MAX`.
    #[inline]
    pub fn range(&self) -> u64 {
        u64::try_from(self.range_wide()).unwrap_or(u64::MAX)
    }

    #[inline]
    fn range_wide(&self) -> i128 {
        i128::from(self.max) - i128::from(self.min) + 1
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Wraps `raw` into these bounds.
    ///
    /// Below `min`, with `interval = min - raw` and `R` the range:
    ///
    /// - `interval <= R` settles at `max - interval + 1` with carry `-1`;
    /// - otherwise at `(max + 1) - (R % interval)` with carry `-(interval / R)`.
    ///
    /// Above `max`, with `interval = raw - max`:
    ///
    /// - `interval <= R` settles at `min + interval - 1` with carry `1`;
    /// - otherwise at `(min + interval % R) - 1` with carry `raw / R`.
    ///
    /// The two multi-range branches are deliberately not mirror images of each
    /// other. In particular, an `interval` that is an exact multiple of `R`
    /// above `max` settles at `min - 1`:
    ///
    /// ```
    /// use carry_digit::Bounds;
    ///
    /// let bits = Bounds::new(0, 1).unwrap();
    /// let s = bits.settle(5);
    /// assert_eq!((s.value, s.carry), (-1, 2));
    /// ```
    pub fn settle(&self, raw: i64) -> Settlement {
        self.settle_wide(i128::from(raw))
    }

    /// [Bounds::settle] for a raw value that may already have left `i64`, such
    /// as `value + amount` or a product of two digits.
    pub(crate) fn settle_wide(&self, raw: i128) -> Settlement {
        let min = i128::from(self.min);
        let max = i128::from(self.max);
        if min <= raw && raw <= max {
            return Settlement {
                value: saturate(raw),
                carry: 0,
            };
        }

        let range = self.range_wide();

        let (value, carry) = if raw < min {
            let interval = min - raw;
            if interval <= range {
                (max - interval + 1, -1)
            } else {
                ((max + 1) - (range % interval), -(interval / range))
            }
        } else {
            let interval = raw - max;
            if interval <= range {
                (min + interval - 1, 1)
            } else {
                ((min + interval % range) - 1, raw / range)
            }
        };

        // `value` always lies within [min - 1, max], so it only leaves i64 when
        // min is i64::MIN, and the carry only when the range is small and the
        // interval enormous. Both saturate.
        Settlement {
            value: saturate(value),
            carry: saturate(carry),
        }
    }
}

fn saturate(x: i128) -> i64 {
    i64::try_from(x).unwrap_or(if x < 0 { i64::MIN } else { i64::MAX })
}

impl TryFrom<RangeInclusive<i64>> for Bounds {
    type Error = DigitError;
    fn try_from(range: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

impl From<Bounds> for RangeInclusive<i64> {
    fn from(bounds: Bounds) -> Self {
        bounds.min..=bounds.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::SAFE
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
