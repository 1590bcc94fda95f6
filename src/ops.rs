/*!
Elementwise arithmetic and logical operators over series.

Binary operators require operands of equal length, or one operand of length one which is broadcast
against the other. The result type is the promotion of the operand types (string over float over
integer); string series only support `+` (concatenation) and boolean series only take part in
logical operators. A position where either operand is NA is NA in the result.

Integer `+`, `-` and `*` wrap on overflow; integer `/` and `%` produce NA on division by zero or
overflow. Floating-point operators follow IEEE-754, with `NaN` results stored as NA.
*/

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Rem, Sub};

use num_traits::{CheckedDiv, CheckedRem, WrappingAdd, WrappingMul, WrappingSub};

use element::{Coerce, DType, Element};
use error::*;
use series::{Series, SeriesData};
use value::Value;

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// Addition (concatenation for strings).
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Remainder.
    Rem,
}
impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        };
        write!(f, "{}", s)
    }
}

fn broadcast_len(left: &Series, right: &Series) -> Result<usize> {
    match (left.len(), right.len()) {
        (l, r) if l == r => Ok(l),
        (1, r) => Ok(r),
        (l, 1) => Ok(l),
        (l, r) => Err(TabulaError::DimensionMismatch(format!(
            "operands have lengths {} and {}",
            l, r
        ))),
    }
}

fn operand(series: &Series, index: usize) -> Element {
    let index = if series.len() == 1 { 0 } else { index };
    series.elem(index)
}

fn int_op(op: ArithOp, left: i64, right: i64) -> Option<i64> {
    match op {
        ArithOp::Add => Some(WrappingAdd::wrapping_add(&left, &right)),
        ArithOp::Sub => Some(WrappingSub::wrapping_sub(&left, &right)),
        ArithOp::Mul => Some(WrappingMul::wrapping_mul(&left, &right)),
        ArithOp::Div => CheckedDiv::checked_div(&left, &right),
        ArithOp::Rem => CheckedRem::checked_rem(&left, &right),
    }
}

fn float_op(op: ArithOp, left: f64, right: f64) -> f64 {
    match op {
        ArithOp::Add => left + right,
        ArithOp::Sub => left - right,
        ArithOp::Mul => left * right,
        ArithOp::Div => left / right,
        ArithOp::Rem => left % right,
    }
}

impl Series {
    /// Applies arithmetic operator `op` elementwise. The result keeps this series' name.
    pub fn arith(&self, op: ArithOp, rhs: &Series) -> Series {
        match self.try_arith(op, rhs) {
            Ok(series) => series,
            Err(err) => self.errored(err),
        }
    }

    fn try_arith(&self, op: ArithOp, rhs: &Series) -> Result<Series> {
        if let Some(err) = self.err().or_else(|| rhs.err()) {
            return Err(err.clone());
        }
        let len = broadcast_len(self, rhs)?;
        if self.dtype() == DType::Bool || rhs.dtype() == DType::Bool {
            return Err(TabulaError::TypeConversion(format!(
                "operator {} not supported on bool series",
                op
            )));
        }
        let dtype = self.dtype().promote(rhs.dtype());
        let mut data = SeriesData::with_capacity(dtype, len);
        for i in 0..len {
            let (left, right) = (operand(self, i), operand(rhs, i));
            match dtype {
                DType::Str => {
                    if op != ArithOp::Add {
                        return Err(TabulaError::TypeConversion(format!(
                            "operator {} not supported on string series",
                            op
                        )));
                    }
                    let value = match (left.to_str_value(), right.to_str_value()) {
                        (Value::Exists(l), Value::Exists(r)) => Value::Exists(l + &r),
                        _ => Value::Na,
                    };
                    data.push(&value);
                }
                DType::Int => {
                    let value = match (left.to_int_value(), right.to_int_value()) {
                        (Value::Exists(l), Value::Exists(r)) => int_op(op, l, r).into(),
                        _ => Value::Na,
                    };
                    data.push(&value);
                }
                _ => {
                    let value = match (left.to_float_value(), right.to_float_value()) {
                        (Value::Exists(l), Value::Exists(r)) => Value::Exists(float_op(op, l, r)),
                        _ => Value::Na,
                    };
                    data.push(&value);
                }
            }
        }
        Ok(Series::from_data(data, self.name()))
    }

    fn logical<F>(&self, rhs: &Series, f: F) -> Series
    where
        F: Fn(bool, bool) -> bool,
    {
        if let Some(err) = self.err().or_else(|| rhs.err()) {
            return self.errored(err.clone());
        }
        if self.dtype() != DType::Bool || rhs.dtype() != DType::Bool {
            return self.errored(TabulaError::TypeConversion(
                "logical operators require bool series".to_string(),
            ));
        }
        let len = match broadcast_len(self, rhs) {
            Ok(len) => len,
            Err(err) => return self.errored(err),
        };
        let values = (0..len)
            .map(|i| match (operand(self, i).bool_value(), operand(rhs, i).bool_value()) {
                (Value::Exists(l), Value::Exists(r)) => Value::Exists(f(l, r)),
                _ => Value::Na,
            })
            .collect::<Vec<_>>();
        Series::new(&values, DType::Bool, self.name())
    }
    /// Elementwise logical conjunction of two bool series.
    pub fn and(&self, rhs: &Series) -> Series {
        self.logical(rhs, |l, r| l && r)
    }
    /// Elementwise logical disjunction of two bool series.
    pub fn or(&self, rhs: &Series) -> Series {
        self.logical(rhs, |l, r| l || r)
    }
    /// Elementwise logical negation of a bool series.
    pub fn not(&self) -> Series {
        if self.err().is_some() {
            return self.clone();
        }
        if self.dtype() != DType::Bool {
            return self.errored(TabulaError::TypeConversion(
                "logical operators require bool series".to_string(),
            ));
        }
        let values = self
            .elements()
            .iter()
            .map(|elem| elem.bool_value().map(|b| !b))
            .collect::<Vec<_>>();
        Series::new(&values, DType::Bool, self.name())
    }
}

macro_rules! impl_arith_op {
    ($($tr:ident $method:ident => $op:expr;)*) => {$(
        impl<'a, 'b> $tr<&'b Series> for &'a Series {
            type Output = Series;
            fn $method(self, rhs: &'b Series) -> Series {
                self.arith($op, rhs)
            }
        }
    )*}
}
impl_arith_op![
    Add add => ArithOp::Add;
    Sub sub => ArithOp::Sub;
    Mul mul => ArithOp::Mul;
    Div div => ArithOp::Div;
    Rem rem => ArithOp::Rem;
];

impl<'a, 'b> BitAnd<&'b Series> for &'a Series {
    type Output = Series;
    fn bitand(self, rhs: &'b Series) -> Series {
        self.and(rhs)
    }
}
impl<'a, 'b> BitOr<&'b Series> for &'a Series {
    type Output = Series;
    fn bitor(self, rhs: &'b Series) -> Series {
        self.or(rhs)
    }
}
impl<'a> Not for &'a Series {
    type Output = Series;
    fn not(self) -> Series {
        Series::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic() {
        let a = Series::ints(&[Some(7), Some(9), None, Some(4)]);
        let b = Series::ints(&[2, 0, 1, -3]);
        assert_eq!((&a + &b).records(), vec!["9", "9", "NaN", "1"]);
        assert_eq!((&a - &b).records(), vec!["5", "9", "NaN", "7"]);
        assert_eq!((&a * &b).records(), vec!["14", "0", "NaN", "-12"]);
        assert_eq!((&a / &b).records(), vec!["3", "NaN", "NaN", "-1"]);
        assert_eq!((&a % &b).records(), vec!["1", "NaN", "NaN", "1"]);
        assert_eq!((&a / &b).dtype(), DType::Int);

        let max = Series::ints(&[::std::i64::MAX]);
        assert_eq!((&max + &Series::ints(&[1])).int().unwrap(), vec![::std::i64::MIN]);
    }

    #[test]
    fn float_promotion_and_broadcast() {
        let a = Series::ints(&[1, 2, 3]);
        let b = Series::floats(&[0.5]);
        let sum = &a + &b;
        assert_eq!(sum.dtype(), DType::Float);
        assert_eq!(sum.float(), vec![1.5, 2.5, 3.5]);

        let zero = Series::floats(&[0.0]);
        let div = &Series::floats(&[1.0, 0.0]) / &zero;
        assert_eq!(div.float()[0], ::std::f64::INFINITY);
        // 0.0 / 0.0 is NaN, stored as NA
        assert!(div.elem(1).is_na());
    }

    #[test]
    fn string_concatenation() {
        let a = Series::strings(&["a", "b"]);
        let b = Series::ints(&[1, 2]);
        assert_eq!((&a + &b).records(), vec!["a1", "b2"]);
        assert!((&a - &b).err().is_some());
    }

    #[test]
    fn operand_errors() {
        let a = Series::ints(&[1, 2, 3]);
        match (&a + &Series::ints(&[1, 2])).err() {
            Some(&TabulaError::DimensionMismatch(_)) => {}
            e => panic!("expected DimensionMismatch, received {:?}", e),
        }
        match (&a + &Series::bools(&[true])).err() {
            Some(&TabulaError::TypeConversion(_)) => {}
            e => panic!("expected TypeConversion, received {:?}", e),
        }
    }

    #[test]
    fn logical() {
        let a = Series::bools(&[Some(true), Some(true), Some(false), None]);
        let b = Series::bools(&[true, false, false, true]);
        assert_eq!((&a & &b).records(), vec!["true", "false", "false", "NaN"]);
        assert_eq!((&a | &b).records(), vec!["true", "true", "false", "NaN"]);
        assert_eq!((!&a).records(), vec!["false", "false", "true", "NaN"]);
        assert!(Series::ints(&[1]).not().err().is_some());
    }
}
