//! Row filtering of frames by column comparisons.

use compare::Comparator;
use element::Element;
use error::*;
use frame::DataFrame;
use series::IntoValues;

/// A single row condition: the values of column `colname` compared with `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column to compare.
    pub colname: String,
    /// Comparison operator.
    pub comparator: Comparator,
    /// Right-hand side of the comparison; a single value is compared with every row.
    pub values: Vec<Element>,
}
impl Filter {
    /// Creates a filter on column `colname`.
    pub fn new<V: IntoValues + ?Sized>(colname: &str, comparator: Comparator, values: &V) -> Filter {
        Filter {
            colname: colname.to_string(),
            comparator,
            values: values.elements(),
        }
    }
}

/// How the filters of a single call are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// A row is kept if any filter holds.
    Or,
    /// A row is kept if every filter holds.
    And,
}

impl DataFrame {
    /// Keeps the rows for which any of `filters` holds. Successive calls narrow the frame further.
    pub fn filter(&self, filters: &[Filter]) -> DataFrame {
        self.filter_aggregation(Aggregation::Or, filters)
    }
    /// Keeps the rows selected by combining `filters` with `aggregation`.
    pub fn filter_aggregation(&self, aggregation: Aggregation, filters: &[Filter]) -> DataFrame {
        if self.err().is_some() || filters.is_empty() {
            return self.clone();
        }
        match self.filter_mask(aggregation, filters) {
            Ok(mask) => self.subset(mask),
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn filter_mask(&self, aggregation: Aggregation, filters: &[Filter]) -> Result<Vec<bool>> {
        let mut mask = vec![aggregation == Aggregation::And; self.nrows()];
        for filter in filters {
            let matches = self
                .try_column(&filter.colname)?
                .compare(filter.comparator, &filter.values[..])
                .into_result()?
                .bool()?;
            for (keep, matched) in mask.iter_mut().zip(matches) {
                *keep = match aggregation {
                    Aggregation::Or => *keep || matched,
                    Aggregation::And => *keep && matched,
                };
            }
        }
        Ok(mask)
    }
}
