//! Element-wise arithmetic and relational operators.
//!
//! Every operator projects its operands to plain numbers first and returns
//! plain numbers (or booleans). The MIC type never survives arithmetic and
//! comparators never bias a result. Scalar `+ - * /` on a single [`Mic`]
//! are implemented in `mic_model`.

use mic_model::{Mic, MicError, Result};

use crate::vector::MicVector;

/// Anything that projects to a sequence of optional numbers.
pub trait NumericOperand {
    fn project(&self) -> Vec<Option<f64>>;
}

impl NumericOperand for MicVector {
    fn project(&self) -> Vec<Option<f64>> {
        self.to_f64()
    }
}

impl NumericOperand for Mic {
    fn project(&self) -> Vec<Option<f64>> {
        vec![Some(self.magnitude())]
    }
}

impl NumericOperand for f64 {
    fn project(&self) -> Vec<Option<f64>> {
        vec![Some(*self)]
    }
}

impl NumericOperand for [f64] {
    fn project(&self) -> Vec<Option<f64>> {
        self.iter().copied().map(Some).collect()
    }
}

impl NumericOperand for Vec<f64> {
    fn project(&self) -> Vec<Option<f64>> {
        self.as_slice().project()
    }
}

impl NumericOperand for [Option<f64>] {
    fn project(&self) -> Vec<Option<f64>> {
        self.to_vec()
    }
}

impl NumericOperand for Vec<Option<f64>> {
    fn project(&self) -> Vec<Option<f64>> {
        self.clone()
    }
}

/// Pair up two projections, recycling a length-1 side.
fn broadcast<A, B, R>(lhs: &A, rhs: &B, op: impl Fn(f64, f64) -> R) -> Result<Vec<Option<R>>>
where
    A: NumericOperand + ?Sized,
    B: NumericOperand + ?Sized,
{
    let lhs = lhs.project();
    let rhs = rhs.project();
    let len = match (lhs.len(), rhs.len()) {
        (a, b) if a == b => a,
        (1, b) => b,
        (a, 1) => a,
        (a, b) => {
            return Err(MicError::InvalidArgument(format!(
                "operand lengths {a} and {b} are incompatible"
            )));
        }
    };
    fn pick(side: &[Option<f64>], index: usize) -> Option<f64> {
        if side.len() == 1 { side[0] } else { side[index] }
    }
    Ok((0..len)
        .map(|index| match (pick(&lhs, index), pick(&rhs, index)) {
            (Some(a), Some(b)) => Some(op(a, b)),
            _ => None,
        })
        .collect())
}

macro_rules! binary_fn {
    ($(#[$meta:meta])* $name:ident, $out:ty, |$a:ident, $b:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $name<A, B>(lhs: &A, rhs: &B) -> Result<Vec<Option<$out>>>
        where
            A: NumericOperand + ?Sized,
            B: NumericOperand + ?Sized,
        {
            broadcast(lhs, rhs, |$a, $b| $body)
        }
    };
}

binary_fn!(
    /// Element-wise sum of projections.
    add, f64, |a, b| a + b
);
binary_fn!(sub, f64, |a, b| a - b);
binary_fn!(mul, f64, |a, b| a * b);
binary_fn!(div, f64, |a, b| a / b);
binary_fn!(pow, f64, |a, b| a.powf(b));
binary_fn!(
    /// Numeric equality; `">=8"` equals `"8"`.
    eq_numeric, bool, |a, b| a == b
);
binary_fn!(lt, bool, |a, b| a < b);
binary_fn!(le, bool, |a, b| a <= b);
binary_fn!(gt, bool, |a, b| a > b);
binary_fn!(ge, bool, |a, b| a >= b);

/// Apply an element-wise function to the projections.
pub fn transform<A>(values: &A, f: impl Fn(f64) -> f64) -> Vec<Option<f64>>
where
    A: NumericOperand + ?Sized,
{
    values
        .project()
        .into_iter()
        .map(|value| value.map(&f))
        .collect()
}

/// Base-2 logarithm, the natural scale of dilution series.
pub fn log2<A>(values: &A) -> Vec<Option<f64>>
where
    A: NumericOperand + ?Sized,
{
    transform(values, f64::log2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::as_mic;

    #[test]
    fn vectors_broadcast_single_values() {
        let values = as_mic(["1", ">=8", ""]);
        assert_eq!(
            mul(&values, &2.0).unwrap(),
            [Some(2.0), Some(16.0), None]
        );
        assert_eq!(
            gt(&values, &4.0).unwrap(),
            [Some(false), Some(true), None]
        );
        assert!(add(&values, &vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn comparisons_ignore_comparators() {
        let values = as_mic([">=128", "128", "<128"]);
        let plain: Mic = "128".parse().unwrap();
        assert_eq!(
            eq_numeric(&values, &plain).unwrap(),
            [Some(true), Some(true), Some(true)]
        );
    }

    #[test]
    fn transforms_project_first() {
        let values = as_mic(["0.25", "<=4", ""]);
        assert_eq!(log2(&values), [Some(-2.0), Some(2.0), None]);
        assert_eq!(
            transform(&values, f64::sqrt),
            [Some(0.5), Some(2.0), None]
        );
    }
}
