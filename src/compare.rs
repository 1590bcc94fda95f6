//! Elementwise comparison of a series against values.

use std::fmt;

use element::{DType, Element};
use error::*;
use series::{IntoValues, Series};
use value::Value;

/// Comparison operators usable in [compare](../series/struct.Series.html#method.compare) and
/// frame filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Equal to.
    Eq,
    /// Not equal to.
    Neq,
    /// Strictly greater than.
    Greater,
    /// Greater than or equal to.
    GreaterEq,
    /// Strictly less than.
    Less,
    /// Less than or equal to.
    LessEq,
    /// Equal to any of the values.
    In,
}
impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Comparator::Eq => "==",
            Comparator::Neq => "!=",
            Comparator::Greater => ">",
            Comparator::GreaterEq => ">=",
            Comparator::Less => "<",
            Comparator::LessEq => "<=",
            Comparator::In => "in",
        };
        write!(f, "{}", s)
    }
}
impl Comparator {
    fn test(self, left: &Element, right: &Element) -> bool {
        match self {
            Comparator::Eq | Comparator::In => left.eq(right),
            Comparator::Neq => left.neq(right),
            Comparator::Greater => left.gt(right),
            Comparator::GreaterEq => left.ge(right),
            Comparator::Less => left.lt(right),
            Comparator::LessEq => left.le(right),
        }
    }
}

impl Series {
    /// Compares each value of this series with `rhs`, producing a boolean series of the same
    /// length. `rhs` is converted to this series' type; a single value is compared with every
    /// position, otherwise lengths must match. With `Comparator::In`, position `i` is `true` if the
    /// value equals any of the values in `rhs`. Comparisons involving NA are `false`.
    pub fn compare<V: IntoValues + ?Sized>(&self, comparator: Comparator, rhs: &V) -> Series {
        if self.err().is_some() {
            return self.clone();
        }
        let dtype = self.dtype();
        let rhs = rhs
            .elements()
            .into_iter()
            .map(|elem| elem.as_type(dtype))
            .collect::<Vec<_>>();
        let lhs = self.elements();

        let results: Vec<bool> = match comparator {
            Comparator::In => lhs
                .iter()
                .map(|left| rhs.iter().any(|right| comparator.test(left, right)))
                .collect(),
            _ if rhs.len() == 1 => lhs
                .iter()
                .map(|left| comparator.test(left, &rhs[0]))
                .collect(),
            _ if rhs.len() == lhs.len() => lhs
                .iter()
                .zip(rhs.iter())
                .map(|(left, right)| comparator.test(left, right))
                .collect(),
            _ => {
                return Series::from_error(TabulaError::DimensionMismatch(format!(
                    "can't compare series of length {} with {} values",
                    lhs.len(),
                    rhs.len()
                )))
            }
        };
        Series::new(&results, DType::Bool, self.name())
    }

    /// Applies the predicate `f` to each element, producing a boolean series. NA elements are
    /// passed to `f` as well.
    pub fn compare_with<F>(&self, f: F) -> Series
    where
        F: Fn(&Element) -> bool,
    {
        if self.err().is_some() {
            return self.clone();
        }
        let results = self
            .elements()
            .iter()
            .map(|elem| Value::Exists(f(elem)))
            .collect::<Vec<_>>();
        Series::new(&results, DType::Bool, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use element::DType;

    #[test]
    fn broadcast() {
        let s = Series::ints(&[Some(1), Some(4), None, Some(7)]);
        assert_eq!(
            s.compare(Comparator::Greater, &3).bool().unwrap(),
            vec![false, true, false, true]
        );
        assert_eq!(
            s.compare(Comparator::LessEq, "4").bool().unwrap(),
            vec![true, true, false, false]
        );
        // rhs converted to int
        assert_eq!(
            s.compare(Comparator::Eq, &4.9).bool().unwrap(),
            vec![false, true, false, false]
        );
        assert_eq!(
            s.compare(Comparator::Neq, &None::<i64>).bool().unwrap(),
            vec![false, false, false, false]
        );
        assert_eq!(s.compare(Comparator::Eq, &1).dtype(), DType::Bool);
    }

    #[test]
    fn elementwise() {
        let s = Series::strings(&["a", "b", "c"]);
        assert_eq!(
            s.compare(Comparator::Eq, &["a", "x", "c"]).bool().unwrap(),
            vec![true, false, true]
        );
        match s.compare(Comparator::Eq, &["a", "b"]).err() {
            Some(&TabulaError::DimensionMismatch(_)) => {}
            e => panic!("expected DimensionMismatch, received {:?}", e),
        }
    }

    #[test]
    fn membership() {
        let s = Series::floats(&[1.0, 2.5, 3.0]);
        assert_eq!(
            s.compare(Comparator::In, &[3.0, 1.0, 9.0, 10.0])
                .bool()
                .unwrap(),
            vec![true, false, true]
        );
    }

    #[test]
    fn predicate() {
        let s = Series::strings(&["apple", "kiwi", "NaN"]);
        let long = s.compare_with(|elem| elem.records().len() > 4);
        assert_eq!(long.bool().unwrap(), vec![true, false, false]);
    }
}
