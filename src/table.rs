//! Digits stored by value in a slot map, linked by key instead of by [WeakDigit].
//!
//! Same settlement and carry rules as [Digit], but the table owns every digit,
//! so it has no `Rc` in it and can be sent to (or shared between, behind your
//! own lock) other threads.
//!
//! [WeakDigit]: crate::WeakDigit
//! [Digit]: crate::Digit
use slotmap::SlotMap;

use crate::bounds::{Bounds, Settlement};
use crate::DigitError;

slotmap::new_key_type! {
    /// Identifies a digit within one [DigitTable].
    pub struct DigitKey;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDigit {
    bounds: Bounds,
    value: i64,
    carry: i64,
    neighbor: Option<DigitKey>,
}

impl TableDigit {
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
    #[inline]
    pub fn carry(&self) -> i64 {
        self.carry
    }
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    #[inline]
    pub fn lower(&self) -> i64 {
        self.bounds.min()
    }
    #[inline]
    pub fn upper(&self) -> i64 {
        self.bounds.max()
    }
    #[inline]
    pub fn range(&self) -> u64 {
        self.bounds.range()
    }
    /// The key this digit carries into. It may since have been removed.
    #[inline]
    pub fn neighbor(&self) -> Option<DigitKey> {
        self.neighbor
    }
}

#[derive(Debug, Clone)]
pub struct DigitTable {
    digits: SlotMap<DigitKey, TableDigit>,
}

impl Default for DigitTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitTable {
    pub fn new() -> Self {
        Self {
            digits: SlotMap::with_key(),
        }
    }

    /// Adds a digit settled from `raw`. As with [crate::Digit::new], the
    /// initial carry is recorded but not forwarded.
    pub fn insert(&mut self, raw: i64, min: i64, max: i64) -> Result<DigitKey, DigitError> {
        Ok(self.insert_with_bounds(raw, Bounds::new(min, max)?))
    }

    pub fn insert_with_bounds(&mut self, raw: i64, bounds: Bounds) -> DigitKey {
        let Settlement { value, carry } = bounds.settle(raw);
        self.digits.insert(TableDigit {
            bounds,
            value,
            carry,
            neighbor: None,
        })
    }

    /// Removes a digit. Digits that were linked to it stop carrying.
    pub fn remove(&mut self, key: DigitKey) -> Option<TableDigit> {
        self.digits.remove(key)
    }

    pub fn get(&self, key: DigitKey) -> Option<&TableDigit> {
        self.digits.get(key)
    }

    pub fn contains(&self, key: DigitKey) -> bool {
        self.digits.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Makes `neighbor` receive `key`'s carries, returning the previous link.
    /// Cycles are not rejected; a wrap inside one never terminates.
    pub fn link(
        &mut self,
        key: DigitKey,
        neighbor: DigitKey,
    ) -> Result<Option<DigitKey>, DigitError> {
        if !self.digits.contains_key(neighbor) {
            return Err(DigitError::UnknownDigit);
        }
        let digit = self.digit_mut(key)?;
        Ok(digit.neighbor.replace(neighbor))
    }

    pub fn unlink(&mut self, key: DigitKey) -> Result<Option<DigitKey>, DigitError> {
        Ok(self.digit_mut(key)?.neighbor.take())
    }

    /// Settles `raw` into the digit at `key`, then walks the chain of
    /// neighbours for as long as each settlement produces a carry.
    pub fn set_value(&mut self, key: DigitKey, raw: i64) -> Result<(), DigitError> {
        self.digit(key)?;
        self.ripple(key, i128::from(raw));
        Ok(())
    }

    pub fn accept_carry(&mut self, key: DigitKey, amount: i64) -> Result<(), DigitError> {
        let value = self.digit(key)?.value;
        self.ripple(key, i128::from(value) + i128::from(amount));
        Ok(())
    }

    pub fn increment(&mut self, key: DigitKey) -> Result<(), DigitError> {
        self.accept_carry(key, 1)
    }

    pub fn decrement(&mut self, key: DigitKey) -> Result<(), DigitError> {
        self.accept_carry(key, -1)
    }

    fn ripple(&mut self, mut key: DigitKey, mut raw: i128) {
        loop {
            let Some(digit) = self.digits.get_mut(key) else {
                return;
            };
            let Settlement { value, carry } = digit.bounds.settle_wide(raw);
            digit.value = value;
            digit.carry = carry;
            if carry == 0 {
                return;
            }
            tracing::trace!(?key, %raw, value, carry, "table digit wrapped");
            let Some(next) = digit.neighbor else {
                return;
            };
            let Some(neighbor) = self.digits.get(next) else {
                tracing::debug!(?key, carry, "neighbour was removed, discarding carry");
                return;
            };
            raw = i128::from(neighbor.value) + i128::from(carry);
            key = next;
        }
    }

    fn digit(&self, key: DigitKey) -> Result<&TableDigit, DigitError> {
        self.digits.get(key).ok_or(DigitError::UnknownDigit)
    }

    fn digit_mut(&mut self, key: DigitKey) -> Result<&mut TableDigit, DigitError> {
        self.digits.get_mut(key).ok_or(DigitError::UnknownDigit)
    }
}
