//! Scalar arithmetic on [`Mic`].
//!
//! Operands are projected to their magnitude first, so the result is a plain
//! number and any comparator is dropped.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::mic::Mic;

macro_rules! impl_projected_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Mic {
            type Output = f64;

            fn $method(self, rhs: Mic) -> f64 {
                self.magnitude() $op rhs.magnitude()
            }
        }

        impl $trait<f64> for Mic {
            type Output = f64;

            fn $method(self, rhs: f64) -> f64 {
                self.magnitude() $op rhs
            }
        }

        impl $trait<Mic> for f64 {
            type Output = f64;

            fn $method(self, rhs: Mic) -> f64 {
                self $op rhs.magnitude()
            }
        }
    };
}

impl_projected_op!(Add, add, +);
impl_projected_op!(Sub, sub, -);
impl_projected_op!(Mul, mul, *);
impl_projected_op!(Div, div, /);

impl Neg for Mic {
    type Output = f64;

    fn neg(self) -> f64 {
        -self.magnitude()
    }
}
