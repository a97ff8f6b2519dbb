//! Operator sugar over the named arithmetic on [Digit].
//!
//! `+`, `-`, `*` and `/` are the pure family: they build a new, unlinked digit
//! with the left operand's bounds. `/` yields a `Result` because the divisor
//! may be zero. `+=`, `-=` and `*=` are the mutating family and forward carry
//! to the left operand's neighbour. There is no `/=`; use [Digit::div_value].
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign};

use crate::{Digit, DigitError};

macro_rules! impl_pure_op {
    ($op:ident::$method:ident => $named:ident) => {
        impl $op<i64> for &Digit {
            type Output = Digit;
            #[inline]
            fn $method(self, rhs: i64) -> Digit {
                self.$named(rhs)
            }
        }
        impl $op<&Digit> for &Digit {
            type Output = Digit;
            #[inline]
            fn $method(self, rhs: &Digit) -> Digit {
                self.$named(rhs)
            }
        }
        impl $op<i64> for Digit {
            type Output = Digit;
            #[inline]
            fn $method(self, rhs: i64) -> Digit {
                self.$named(rhs)
            }
        }
        impl $op<&Digit> for Digit {
            type Output = Digit;
            #[inline]
            fn $method(self, rhs: &Digit) -> Digit {
                self.$named(rhs)
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($op:ident::$method:ident => $named:ident) => {
        impl $op<i64> for Digit {
            #[inline]
            fn $method(&mut self, rhs: i64) {
                self.$named(rhs);
            }
        }
        impl $op<&Digit> for Digit {
            #[inline]
            fn $method(&mut self, rhs: &Digit) {
                self.$named(rhs);
            }
        }
    };
}

impl_pure_op!(Add::add => plus);
impl_pure_op!(Sub::sub => minus);
impl_pure_op!(Mul::mul => times);

impl_assign_op!(AddAssign::add_assign => add_value);
impl_assign_op!(SubAssign::sub_assign => sub_value);
impl_assign_op!(MulAssign::mul_assign => mul_value);

impl Div<i64> for &Digit {
    type Output = Result<Digit, DigitError>;
    #[inline]
    fn div(self, rhs: i64) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl Div<&Digit> for &Digit {
    type Output = Result<Digit, DigitError>;
    #[inline]
    fn div(self, rhs: &Digit) -> Self::Output {
        self.divided_by(rhs)
    }
}

#[test]
fn test_syntax() {
    let a = Digit::new(7, 0, 9).unwrap();
    let b = Digit::new(5, 0, 99).unwrap();

    let sum = &a + &b;
    assert_eq!(sum, 2);
    assert_eq!(sum.carry(), 1);
    assert_eq!(sum.bounds(), a.bounds());
    assert_eq!(a, 7, "operands are untouched");

    assert_eq!(&a - 8, 9);
    assert_eq!(&a * 3, 1);
    assert_eq!((&b / 2).unwrap(), 2);
    assert_eq!(&b / 0, Err(DigitError::DivisionByZero));

    let mut c = a.clone();
    c += 4;
    assert_eq!(a, 1, "assignment mutates every handle to the digit");
    c -= &b;
    assert_eq!(c, 6);
    c *= 2;
    assert_eq!(c, 2);
    assert_eq!(c.carry(), 1);
}
