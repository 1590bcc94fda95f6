/*!
Sort-order permutations over series.

A sort order is a permutation of positions: reading a series at the positions of its sort order
yields its values in sorted order. All orders computed here are stable (equal values keep their
original relative order) and place NA values last, in their original order, regardless of
direction.
*/
use std::cmp::Ordering;

use series::{Series, SeriesData};

/// Helper sorting method for floating-point (f64) values
pub fn sort_f64(left: &f64, right: &f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or_else(|| {
        if left.is_nan() && !right.is_nan() {
            Ordering::Less
        } else {
            // since partial_cmp only fails for NAN, then !self.is_nan() && other.is_nan()
            Ordering::Greater
        }
    })
}

/// Compares the existing values at positions `left` and `right`. NA values compare after every
/// existing value; the comparison of existing values is reversed when `reverse` is set.
pub fn compare_positions(data: &SeriesData, left: usize, right: usize, reverse: bool) -> Ordering {
    match (data.is_na(left), data.is_na(right)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = compare_existing(data, left, right);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

fn compare_existing(data: &SeriesData, left: usize, right: usize) -> Ordering {
    // both positions are in range and not NA, so the data reads below see the stored values
    match *data {
        SeriesData::Str(ref d) => d.get(left).cmp(&d.get(right)),
        SeriesData::Int(ref d) => d.get(left).cmp(&d.get(right)),
        SeriesData::Bool(ref d) => d.get(left).cmp(&d.get(right)),
        SeriesData::Float(ref d) => match (d.get(left), d.get(right)) {
            (Some(::value::Value::Exists(l)), Some(::value::Value::Exists(r))) => sort_f64(l, r),
            _ => Ordering::Equal,
        },
    }
}

/// Trait providing function to compute and return the sorted permutation order.
pub trait SortOrder {
    /// Returns the stable sorted permutation order as `Vec<usize>`. NA positions come last.
    fn sort_order(&self, reverse: bool) -> Vec<usize>;
}

impl SortOrder for SeriesData {
    fn sort_order(&self, reverse: bool) -> Vec<usize> {
        let mut order = (0..self.len()).collect::<Vec<_>>();
        order.sort_by(|&left, &right| compare_positions(self, left, right, reverse));
        order
    }
}

impl Series {
    /// Permutation of positions that sorts the existing values ascending (or descending, if
    /// `reverse` is set), followed by the positions of NA values in their original order.
    pub fn order(&self, reverse: bool) -> Vec<usize> {
        self.data().sort_order(reverse)
    }
    /// Copy of this series in sorted order; NA values last.
    pub fn sorted(&self, reverse: bool) -> Series {
        if self.err().is_some() {
            return self.clone();
        }
        self.gather(&self.order(reverse))
    }
}
