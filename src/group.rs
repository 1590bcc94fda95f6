/*!
Grouping of frame rows by the values of key columns, and per-group summaries.
*/
use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use element::{DType, Element};
use error::*;
use frame::{rows_to_columns, DataFrame};
use permute::compare_positions;
use series::Series;
use value::Value;

/// Hashable form of one key value. NA is a key value of its own, so NA keys group together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum KeyPart {
    Na,
    Str(String),
    Int(i64),
    Float(u64),
    Bool(bool),
}
impl KeyPart {
    pub(crate) fn from_element(elem: &Element) -> KeyPart {
        match *elem {
            Element::Str(Value::Exists(ref s)) => KeyPart::Str(s.clone()),
            Element::Int(Value::Exists(i)) => KeyPart::Int(i),
            // -0.0 and 0.0 compare equal, so they share a key
            Element::Float(Value::Exists(f)) if f == 0.0 => KeyPart::Float(0),
            Element::Float(Value::Exists(f)) => KeyPart::Float(f.to_bits()),
            Element::Bool(Value::Exists(b)) => KeyPart::Bool(b),
            _ => KeyPart::Na,
        }
    }
}

/// Reduction applied to a column of every group by
/// [aggregate](struct.GroupedDataFrame.html#method.aggregate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationType {
    /// Largest finite value.
    Max,
    /// Smallest finite value.
    Min,
    /// Mean of the finite values.
    Mean,
    /// Median of the finite values.
    Median,
    /// Sample standard deviation of the finite values.
    Std,
    /// Sum of the finite values.
    Sum,
    /// Number of rows in the group.
    Count,
}
impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                AggregationType::Max => "MAX",
                AggregationType::Min => "MIN",
                AggregationType::Mean => "MEAN",
                AggregationType::Median => "MEDIAN",
                AggregationType::Std => "STD",
                AggregationType::Sum => "SUM",
                AggregationType::Count => "COUNT",
            }
        )
    }
}
impl AggregationType {
    fn apply(self, col: &Series) -> f64 {
        match self {
            AggregationType::Max => col.max(),
            AggregationType::Min => col.min(),
            AggregationType::Mean => col.mean(),
            AggregationType::Median => col.median(),
            AggregationType::Std => col.stddev(),
            AggregationType::Sum => col.sum(),
            AggregationType::Count => col.len() as f64,
        }
    }
}

/// Rows of a frame partitioned by the values of its key columns.
///
/// Groups are kept in order of first occurrence. Like frames, a grouping carries an error slot:
/// summaries of an erroring grouping return a frame carrying the error.
#[derive(Debug, Clone)]
pub struct GroupedDataFrame {
    frame: DataFrame,
    keys: Vec<String>,
    groups: IndexMap<Vec<KeyPart>, Vec<usize>>,
    err: Option<TabulaError>,
}

impl DataFrame {
    /// Groups the rows of this frame by the values of the columns named `keys`.
    pub fn group_by(&self, keys: &[&str]) -> GroupedDataFrame {
        match self.try_group_by(keys) {
            Ok(grouped) => grouped,
            Err(err) => GroupedDataFrame {
                frame: self.clone(),
                keys: keys.iter().map(|k| k.to_string()).collect(),
                groups: IndexMap::new(),
                err: Some(err),
            },
        }
    }
    fn try_group_by(&self, keys: &[&str]) -> Result<GroupedDataFrame> {
        if let Some(err) = self.err() {
            return Err(err.clone());
        }
        if keys.is_empty() {
            return Err(TabulaError::NoArguments);
        }
        let key_cols = keys
            .iter()
            .map(|key| self.try_column(key))
            .collect::<Result<Vec<_>>>()?;
        let mut groups: IndexMap<Vec<KeyPart>, Vec<usize>> = IndexMap::new();
        for i in 0..self.nrows() {
            let key = key_cols
                .iter()
                .map(|col| KeyPart::from_element(&col.elem(i)))
                .collect::<Vec<_>>();
            groups.entry(key).or_insert_with(Vec::new).push(i);
        }
        debug!("grouped {} rows by {:?} into {} groups", self.nrows(), keys, groups.len());
        Ok(GroupedDataFrame {
            frame: self.clone(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
            groups,
            err: None,
        })
    }
}

impl GroupedDataFrame {
    /// The error carried by this grouping, if any.
    pub fn err(&self) -> Option<&TabulaError> {
        self.err.as_ref()
    }
    /// Names of the key columns.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
    /// Number of groups.
    pub fn ngroups(&self) -> usize {
        self.groups.len()
    }
    /// Key values and sub-frame of every group, in order of first occurrence.
    pub fn groups(&self) -> Vec<(Vec<Element>, DataFrame)> {
        self.groups
            .values()
            .map(|rows| {
                let key = self
                    .keys
                    .iter()
                    .filter_map(|key| self.frame.column(key))
                    .map(|col| col.elem(rows[0]))
                    .collect();
                (key, self.frame.gather_rows(rows))
            })
            .collect()
    }

    // Groups ordered ascending by key, with the key columns holding the first row of each. Sorted
    // by position: the output frame may rename key columns.
    fn sorted_groups(&self) -> (Vec<Series>, Vec<&Vec<usize>>) {
        let groups = self.groups.values().collect::<Vec<_>>();
        let firsts = groups.iter().map(|rows| rows[0]).collect::<Vec<_>>();
        let key_cols = self
            .keys
            .iter()
            .filter_map(|key| self.frame.column(key))
            .map(|col| col.gather(&firsts))
            .collect::<Vec<_>>();
        let mut perm = (0..groups.len()).collect::<Vec<_>>();
        perm.sort_by(|&left, &right| {
            key_cols
                .iter()
                .map(|col| compare_positions(col.data(), left, right, false))
                .find(|&ord| ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        (
            key_cols.iter().map(|col| col.gather(&perm)).collect(),
            perm.iter().map(|&i| groups[i]).collect(),
        )
    }

    /// Applies `reducer` to the sub-frame of every group. Each call returns one output row; all
    /// rows must have the same length `K`. The result holds the key columns followed by columns
    /// `X0` to `X(K-1)`, each typed as the promotion of the row types, sorted ascending by the keys.
    pub fn summarize<F>(&self, reducer: F) -> DataFrame
    where
        F: Fn(&DataFrame) -> Series,
    {
        match self.try_summarize(reducer) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_summarize<F>(&self, reducer: F) -> Result<DataFrame>
    where
        F: Fn(&DataFrame) -> Series,
    {
        if let Some(ref err) = self.err {
            return Err(err.clone());
        }
        let (key_cols, groups) = self.sorted_groups();
        let mut rows = Vec::with_capacity(groups.len());
        for group in groups {
            rows.push(reducer(&self.frame.gather_rows(group)).into_result()?);
        }
        Ok(DataFrame::new(rows_to_columns(&rows, &key_cols)?))
    }

    /// Reduces columns of every group. Each `(aggregation, column)` pair yields a float column
    /// named `<column>_<AGGREGATION>` following the key columns; rows are sorted by the keys.
    pub fn aggregate(&self, aggregations: &[(AggregationType, &str)]) -> DataFrame {
        match self.try_aggregate(aggregations) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_aggregate(&self, aggregations: &[(AggregationType, &str)]) -> Result<DataFrame> {
        if let Some(ref err) = self.err {
            return Err(err.clone());
        }
        if aggregations.is_empty() {
            return Err(TabulaError::NoArguments);
        }
        let (mut columns, groups) = self.sorted_groups();
        for &(agg, colname) in aggregations {
            let col = self.frame.try_column(colname)?;
            let values = groups
                .iter()
                .map(|rows| agg.apply(&col.gather(rows)))
                .collect::<Vec<_>>();
            columns.push(Series::new(
                &values,
                DType::Float,
                &format!("{}_{}", colname, agg),
            ));
        }
        Ok(DataFrame::new(columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use source::{load_records, LoadOptionsBuilder};
    use test_utils::*;

    #[test]
    fn summarize_count_and_mean() {
        let summary = group_frame()
            .group_by(&["G", "D"])
            .summarize(|g| Series::floats(&[g.nrows() as f64, g.col("W").mean()]));
        assert_eq!(summary.names(), vec!["G", "D", "X0", "X1"]);
        assert_eq!(
            summary.types(),
            vec![DType::Str, DType::Int, DType::Float, DType::Float]
        );
        assert_eq!(summary.col("G").records(), vec!["a", "a", "b", "b", "c", "c"]);
        assert_eq!(summary.col("D").records(), vec!["1", "2", "1", "2", "1", "2"]);
        assert_eq!(summary.col("X0").float(), vec![2.0, 2.0, 2.0, 1.0, 1.0, 2.0]);
        assert_eq!(summary.col("X1").float(), vec![6.5, 4.0, 2.0, 7.0, 10.0, 6.5]);
    }

    #[test]
    fn ragged_summaries_fail() {
        let summary = group_frame().group_by(&["G", "D"]).summarize(|g| {
            if g.nrows() > 1 {
                Series::floats(&[1.0, 2.0])
            } else {
                Series::floats(&[1.0])
            }
        });
        match summary.err() {
            Some(&TabulaError::InconsistentRowLength(_)) => {}
            e => panic!("expected InconsistentRowLength, received {:?}", e),
        }
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let grouped = group_frame().group_by(&["G"]);
        assert_eq!(grouped.ngroups(), 3);
        let groups = grouped.groups();
        let keys = groups
            .iter()
            .map(|&(ref key, _)| key[0].records())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[1].1.col("W").float(), vec![2.0, 4.0, 6.0, 9.0]);
    }

    #[test]
    fn na_keys_group_together() {
        let df = DataFrame::new(vec![
            Series::new(&[None, Some(1), None], DType::Int, "K"),
            Series::new(&[1.0, 2.0, 3.0], DType::Float, "V"),
        ]);
        let summary = df.group_by(&["K"]).aggregate(&[(AggregationType::Sum, "V")]);
        assert_eq!(summary.col("K").records(), vec!["1", "NaN"]);
        assert_eq!(summary.col("V_SUM").float(), vec![2.0, 4.0]);
    }

    #[test]
    fn aggregate_columns() {
        let summary = group_frame().group_by(&["G"]).aggregate(&[
            (AggregationType::Sum, "W"),
            (AggregationType::Count, "W"),
            (AggregationType::Max, "D"),
        ]);
        assert_eq!(summary.names(), vec!["G", "W_SUM", "W_COUNT", "D_MAX"]);
        assert_eq!(summary.col("G").records(), vec!["a", "b", "c"]);
        assert_eq!(summary.col("W_SUM").float(), vec![21.0, 11.0, 23.0]);
        assert_eq!(summary.col("W_COUNT").float(), vec![4.0, 3.0, 3.0]);
        assert_eq!(summary.col("D_MAX").float(), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn keys_named_like_summary_columns() {
        let df = DataFrame::new(vec![
            Series::new(&["b", "a", "b"], DType::Str, "X0"),
            Series::new(&[1.0, 2.0, 3.0], DType::Float, "W"),
        ]);
        let summary = df
            .group_by(&["X0"])
            .summarize(|g| Series::floats(&[g.col("W").sum()]));
        assert!(summary.err().is_none());
        assert_eq!(summary.names(), vec!["X0_0", "X0_1"]);
        assert_eq!(summary.col("X0_0").records(), vec!["a", "b"]);
        assert_eq!(summary.col("X0_1").float(), vec![2.0, 4.0]);
    }

    #[test]
    fn group_headerless_records() {
        let records = vec![vec!["b", "1"], vec!["a", "2"], vec!["b", "3"], vec!["c", "4"]];
        let opts = LoadOptionsBuilder::new().has_header(false).build();
        let df = load_records(&records, &opts);
        assert_eq!(df.names(), vec!["X0", "X1"]);

        let summary = df
            .group_by(&["X0"])
            .summarize(|g| Series::ints(&[g.col("X1").sum() as i64]));
        assert!(summary.err().is_none());
        assert_eq!(summary.col("X0_0").records(), vec!["a", "b", "c"]);
        assert_eq!(summary.col("X0_1").records(), vec!["2", "4", "4"]);

        let aggregated = df
            .group_by(&["X0"])
            .aggregate(&[(AggregationType::Max, "X1")]);
        assert_eq!(aggregated.names(), vec!["X0", "X1_MAX"]);
        assert_eq!(aggregated.col("X0").records(), vec!["a", "b", "c"]);
        assert_eq!(aggregated.col("X1_MAX").float(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn errors() {
        let df = group_frame();
        assert_eq!(
            df.group_by(&["Q"]).err(),
            Some(&TabulaError::UnknownColumn("Q".to_string()))
        );
        assert_eq!(df.group_by(&[]).err(), Some(&TabulaError::NoArguments));
        assert_eq!(
            df.group_by(&["G"])
                .aggregate(&[(AggregationType::Mean, "Q")])
                .err(),
            Some(&TabulaError::UnknownColumn("Q".to_string()))
        );
        assert!(df.group_by(&["Q"]).summarize(|g| g.col("W")).err().is_some());
    }
}
