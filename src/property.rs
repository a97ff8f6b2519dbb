use std::fmt;

use crate::{Bounds, Digit, DigitError};

/// A plain wrapping number, for struct fields that should behave like an
/// integer with a fixed range and nothing more.
///
/// Reads give the settled value; writes wrap. There is no way to see the
/// bounds or the carry through this type, and no way to link it. If it was
/// built from a digit that already had a neighbour, writes still carry into
/// that neighbour.
///
/// ```
/// use carry_digit::DigitProperty;
///
/// let mut hue = DigitProperty::new(350, 0, 359).unwrap();
/// hue.set(hue.get() + 20);
/// assert_eq!(hue.get(), 10);
/// ```
pub struct DigitProperty {
    digit: Digit,
}

impl DigitProperty {
    pub fn new(value: i64, min: i64, max: i64) -> Result<Self, DigitError> {
        Digit::new(value, min, max).map(Self::from)
    }

    pub fn with_bounds(value: i64, bounds: Bounds) -> Self {
        Self::from(Digit::with_bounds(value, bounds))
    }

    #[inline]
    pub fn get(&self) -> i64 {
        self.digit.value()
    }

    #[inline]
    pub fn set(&mut self, value: i64) {
        self.digit.set_value(value)
    }
}

impl From<Digit> for DigitProperty {
    fn from(digit: Digit) -> Self {
        Self { digit }
    }
}

impl fmt::Debug for DigitProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigitProperty").field(&self.get()).finish()
    }
}
