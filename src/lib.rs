#![doc = include_str!("../README.md")]

mod bounds;
mod digit;
mod error;
mod property;
mod syntax;
#[cfg(feature = "slotmap")]
pub mod table;

pub use bounds::{Bounds, Settlement, MAX_SAFE, MIN_SAFE};
pub use digit::{Digit, WeakDigit};
pub use error::DigitError;
pub use property::DigitProperty;
#[cfg(feature = "slotmap")]
pub use table::{DigitKey, DigitTable, TableDigit};
