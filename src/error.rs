use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum DigitError {
    /// A digit was constructed with `max < min`.
    InvalidBounds { min: i64, max: i64 },
    DivisionByZero,
    /// A `DigitKey` that is not (or no longer) in its `DigitTable`.
    UnknownDigit,
}

impl Display for DigitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBounds { min, max } => write!(
                f,
                "invalid digit bounds: max ({max}) is less than min ({min})"
            ),
            Self::DivisionByZero => write!(f, "attempted to divide a digit by zero"),
            Self::UnknownDigit => write!(f, "no digit with that key in the table"),
        }
    }
}
impl std::error::Error for DigitError {}
