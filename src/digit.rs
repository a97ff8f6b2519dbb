use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::rc::{Rc, Weak};

use crate::bounds::{Bounds, Settlement};
use crate::DigitError;


struct DigitInner {
    bounds: Bounds,
    value: Cell<i64>,
    carry: Cell<i64>,
    neighbor: RefCell<Option<WeakDigit>>,
}

/// A bounded integer that wraps at `min`/`max` and carries into a neighbour.
///
/// `Digit` is a handle. Cloning it gives you another handle to the *same*
/// digit, which is how one digit can be the neighbour of several others and
/// still be driven by its owner. All mutation goes through `&self`.
///
/// Equality, ordering and hashing look at the current value only. A digit
/// bounded `[0, 10]` holding `5` is equal to one bounded `[0, 1000]` holding
/// `5`. Use [Digit::ptr_eq] if you want identity.
///
/// Digits are not `Send`; share one across threads only by putting it behind
/// something that is.
#[derive(Clone)]
pub struct Digit {
    inner: Rc<DigitInner>,
}

/// A non-owning link to a [Digit]. This is what a digit holds for its
/// neighbour, so linking `a -> b -> a` does not leak.
#[derive(Clone)]
pub struct WeakDigit(Weak<DigitInner>);

impl WeakDigit {
    pub fn upgrade(&self) -> Option<Digit> {
        self.0.upgrade().map(|inner| Digit { inner })
    }
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
    pub fn strong_count(&self) -> usize {
        self.0.strong_count()
    }
}

impl fmt::Debug for WeakDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(digit) => write!(f, "WeakDigit({})", digit.value()),
            None => write!(f, "WeakDigit(dropped)"),
        }
    }
}

impl Digit {
    /// Settles `raw` into `[min, max]`.
    ///
    /// The settlement's carry is kept (see [Digit::carry]) but not forwarded
    /// anywhere, since nothing can be linked to a digit that does not exist yet.
    pub fn new(raw: i64, min: i64, max: i64) -> Result<Self, DigitError> {
        Ok(Self::with_bounds(raw, Bounds::new(min, max)?))
    }

    pub fn with_bounds(raw: i64, bounds: Bounds) -> Self {
        Self::settled(bounds, bounds.settle(raw))
    }

    fn settled(bounds: Bounds, Settlement { value, carry }: Settlement) -> Self {
        Self {
            inner: Rc::new(DigitInner {
                bounds,
                value: Cell::new(value),
                carry: Cell::new(carry),
                neighbor: RefCell::new(None),
            }),
        }
    }

    /// Bounds `[min, max]`, starting at `value`.
    pub fn from_value(min: i64, max: i64, value: i64) -> Result<Self, DigitError> {
        Self::new(value, min, max)
    }

    /// [Digit::from_value] starting at `min`.
    pub fn at_min(min: i64, max: i64) -> Result<Self, DigitError> {
        Self::new(min, min, max)
    }

    pub fn from_value_and_range(
        value: i64,
        range: RangeInclusive<i64>,
    ) -> Result<Self, DigitError> {
        Ok(Self::with_bounds(value, Bounds::try_from(range)?))
    }

    /// A digit covering `range`, starting at its low end.
    pub fn from_range(range: RangeInclusive<i64>) -> Result<Self, DigitError> {
        let start = *range.start();
        Self::from_value_and_range(start, range)
    }

    pub fn from_range_at(range: RangeInclusive<i64>, value: i64) -> Result<Self, DigitError> {
        Self::from_value_and_range(value, range)
    }

    /// A digit bounded by [Bounds::SAFE], for the most significant end of a
    /// chain where you don't want any wrapping in practice.
    pub fn unbounded(value: i64) -> Self {
        Self::with_bounds(value, Bounds::SAFE)
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.inner.value.get()
    }

    /// Carry produced by the most recent assignment (or by construction, if
    /// nothing has been assigned since). Not cumulative.
    #[inline]
    pub fn carry(&self) -> i64 {
        self.inner.carry.get()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.inner.bounds
    }

    /// The lower bound. Not called `min`, which `Ord` already claims.
    #[inline]
    pub fn lower(&self) -> i64 {
        self.inner.bounds.min()
    }

    #[inline]
    pub fn upper(&self) -> i64 {
        self.inner.bounds.max()
    }

    #[inline]
    pub fn range(&self) -> u64 {
        self.inner.bounds.range()
    }

    pub fn weak(&self) -> WeakDigit {
        WeakDigit(Rc::downgrade(&self.inner))
    }

    /// Whether both handles refer to the same digit.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Makes `neighbor` the digit that receives this digit's carries,
    /// returning whatever was linked before.
    ///
    /// Linking into a cycle is allowed, but the first wrap will then recurse
    /// until the stack runs out.
    pub fn link(&self, neighbor: &Digit) -> Option<WeakDigit> {
        self.link_weak(neighbor.weak())
    }

    pub fn link_weak(&self, neighbor: WeakDigit) -> Option<WeakDigit> {
        self.inner.neighbor.replace(Some(neighbor))
    }

    pub fn unlink(&self) -> Option<WeakDigit> {
        self.inner.neighbor.take()
    }

    /// The linked neighbour, if there is one and it is still alive.
    pub fn neighbor(&self) -> Option<Digit> {
        self.inner.neighbor.borrow().as_ref()?.upgrade()
    }

    pub fn is_linked(&self) -> bool {
        self.neighbor().is_some()
    }

    /// Settles `raw` and, if that wrapped, hands the carry to the neighbour
    /// via [Digit::accept_carry].
    pub fn set_value(&self, raw: i64) {
        self.assign(i128::from(raw));
    }

    // Arithmetic lands here unrounded, so a sum past i64::MAX still settles
    // with a positive carry.
    fn assign(&self, raw: i128) {
        let settlement = self.inner.bounds.settle_wide(raw);
        let Settlement { value, carry } = settlement;
        self.inner.value.set(value);
        self.inner.carry.set(carry);
        if !settlement.wrapped() {
            return;
        }
        tracing::trace!(%raw, value, carry, bounds = %self.inner.bounds, "digit wrapped");

        // Don't hold the borrow while the neighbour settles; it may relink us.
        let Some(link) = self.inner.neighbor.borrow().clone() else {
            return;
        };
        match link.upgrade() {
            Some(neighbor) => {
                tracing::trace!(carry, to = neighbor.value(), "forwarding carry");
                neighbor.accept_carry(carry);
            }
            None => {
                tracing::debug!(carry, "neighbour has been dropped, discarding carry");
            }
        }
    }

    /// The entry point a neighbour calls with its carry. Equivalent to
    /// `set_value(value + amount)`, so it may carry further along the chain.
    pub fn accept_carry(&self, amount: i64) {
        self.assign(self.wide() + i128::from(amount));
    }

    pub fn increment(&self) -> &Self {
        self.accept_carry(1);
        self
    }

    pub fn decrement(&self) -> &Self {
        self.accept_carry(-1);
        self
    }

    #[inline]
    fn wide(&self) -> i128 {
        i128::from(self.value())
    }

    fn derive(&self, raw: i128) -> Digit {
        let bounds = self.inner.bounds;
        Self::settled(bounds, bounds.settle_wide(raw))
    }

    // Pure arithmetic, computed in i128 before settling. `rhs` is a plain
    // integer or another digit (its current value). These produce a fresh,
    // unlinked digit with self's bounds; its carry is visible on the result
    // but goes nowhere.

    pub fn plus(&self, rhs: impl Into<i64>) -> Digit {
        self.derive(self.wide() + operand(rhs))
    }

    pub fn minus(&self, rhs: impl Into<i64>) -> Digit {
        self.derive(self.wide() - operand(rhs))
    }

    pub fn times(&self, rhs: impl Into<i64>) -> Digit {
        self.derive(self.wide() * operand(rhs))
    }

    pub fn divided_by(&self, rhs: impl Into<i64>) -> Result<Digit, DigitError> {
        let quotient = checked_quotient(self.value(), rhs.into())?;
        Ok(self.derive(quotient))
    }

    // In-place arithmetic. Carries are forwarded as with set_value.

    pub fn add_value(&self, rhs: impl Into<i64>) -> &Self {
        self.assign(self.wide() + operand(rhs));
        self
    }

    pub fn sub_value(&self, rhs: impl Into<i64>) -> &Self {
        self.assign(self.wide() - operand(rhs));
        self
    }

    pub fn mul_value(&self, rhs: impl Into<i64>) -> &Self {
        self.assign(self.wide() * operand(rhs));
        self
    }

    /// Divides in place. On `DivisionByZero` the digit is left untouched.
    pub fn div_value(&self, rhs: impl Into<i64>) -> Result<&Self, DigitError> {
        let quotient = checked_quotient(self.value(), rhs.into())?;
        self.assign(quotient);
        Ok(self)
    }
}

fn operand(rhs: impl Into<i64>) -> i128 {
    let rhs: i64 = rhs.into();
    i128::from(rhs)
}

fn checked_quotient(lhs: i64, rhs: i64) -> Result<i128, DigitError> {
    if rhs == 0 {
        return Err(DigitError::DivisionByZero);
    }
    // i64::MIN / -1 is one past i64::MAX, which settles like any other raw value.
    Ok(i128::from(lhs) / i128::from(rhs))
}

impl TryFrom<RangeInclusive<i64>> for Digit {
    type Error = DigitError;
    fn try_from(range: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::from_range(range)
    }
}

impl From<&Digit> for i64 {
    fn from(digit: &Digit) -> Self {
        digit.value()
    }
}

impl From<Digit> for i64 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl PartialEq for Digit {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Digit {}

impl PartialEq<i64> for Digit {
    fn eq(&self, other: &i64) -> bool {
        self.value() == *other
    }
}

impl PartialOrd for Digit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd<i64> for Digit {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.value().cmp(other))
    }
}

impl Hash for Digit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digit")
            .field("value", &self.value())
            .field("min", &self.lower())
            .field("max", &self.upper())
            .field("range", &self.range())
            .field("carry", &self.carry())
            .field("linked", &self.is_linked())
            .finish()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Digit(value={}, min={}, max={}, range={}, carry={})",
            self.value(),
            self.lower(),
            self.upper(),
            self.range(),
            self.carry()
        )
    }
}
