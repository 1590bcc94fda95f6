/*!
Structs and implementation for the `DataFrame`: an ordered list of equal-length, uniquely-named
series.

Like [Series](../series/struct.Series.html), a frame carries an error slot. Operations on an
erroring frame return the frame unchanged, and failing operations return a frame carrying the
error, so chains of operations surface only the first error. Frames are never mutated in place:
every operation returns a new frame.
*/
use std::fmt;

#[cfg(feature = "serialize")]
use serde::ser::{Serialize, SerializeMap, Serializer};

use prettytable as pt;

use element::{Coerce, DType, Element};
use error::*;
use index::{resolve_columns, resolve_rows, Indexer};
use names::fix_column_names;
use ops::ArithOp;
use series::Series;

/// A table of equal-length series with unique, non-empty names.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    columns: Vec<Series>,
    err: Option<TabulaError>,
}

impl DataFrame {
    /// Creates a frame from `columns`. Fails if no columns are given, if any column carries an
    /// error, or if the columns differ in length. Column names are made unique and non-empty.
    pub fn new(columns: Vec<Series>) -> DataFrame {
        match DataFrame::try_new(columns) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_new(mut columns: Vec<Series>) -> Result<DataFrame> {
        if columns.is_empty() {
            return Err(TabulaError::NoArguments);
        }
        if let Some(err) = columns.iter().filter_map(|col| col.err()).next() {
            return Err(err.clone());
        }
        let nrows = columns[0].len();
        if let Some(col) = columns.iter().find(|col| col.len() != nrows) {
            return Err(TabulaError::DimensionMismatch(format!(
                "column '{}' has {} rows, expected {}",
                col.name(),
                col.len(),
                nrows
            )));
        }
        let mut names = columns
            .iter()
            .map(|col| col.name().to_string())
            .collect::<Vec<_>>();
        fix_column_names(&mut names);
        for (col, name) in columns.iter_mut().zip(names.iter()) {
            col.set_name(name);
        }
        Ok(DataFrame { columns, err: None })
    }
    /// Creates an empty frame carrying `err`.
    pub fn from_error(err: TabulaError) -> DataFrame {
        DataFrame {
            columns: vec![],
            err: Some(err),
        }
    }

    /// The error carried by this frame, if any.
    pub fn err(&self) -> Option<&TabulaError> {
        self.err.as_ref()
    }
    /// Converts this frame into a `Result`, failing with its carried error.
    pub fn into_result(self) -> Result<DataFrame> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
    /// Column names, in order.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.name().to_string()).collect()
    }
    /// Column types, in order.
    pub fn types(&self) -> Vec<DType> {
        self.columns.iter().map(|col| col.dtype()).collect()
    }
    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.columns.first().map_or(0, |col| col.len())
    }
    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }
    /// Number of rows and columns.
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// The columns of this frame.
    pub fn columns(&self) -> &[Series] {
        &self.columns
    }
    /// The column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|col| col.name() == name)
    }
    pub(crate) fn try_column(&self, name: &str) -> Result<&Series> {
        self.column(name)
            .ok_or_else(|| TabulaError::UnknownColumn(name.to_string()))
    }
    /// Copy of the column named `name`; a series carrying `UnknownColumn` if absent.
    pub fn col(&self, name: &str) -> Series {
        if let Some(ref err) = self.err {
            return Series::from_error(err.clone());
        }
        match self.try_column(name) {
            Ok(col) => col.clone(),
            Err(err) => Series::from_error(err),
        }
    }

    /// Frame restricted to, and reordered by, the columns picked by `indexer`. Repeated columns
    /// are kept and renamed apart.
    pub fn select<I: Into<Indexer>>(&self, indexer: I) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        match resolve_columns(&indexer.into(), &self.names()) {
            Ok(idxs) => DataFrame::new(idxs.iter().map(|&i| self.columns[i].clone()).collect()),
            Err(err) => DataFrame::from_error(err),
        }
    }
    /// Frame without the columns picked by `indexer`.
    pub fn drop<I: Into<Indexer>>(&self, indexer: I) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        match resolve_columns(&indexer.into(), &self.names()) {
            Ok(idxs) => DataFrame::new(
                self.columns
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| !idxs.contains(&i))
                    .map(|(_, col)| col.clone())
                    .collect(),
            ),
            Err(err) => DataFrame::from_error(err),
        }
    }
    /// Frame with only the rows picked by `indexer`, in the order requested.
    pub fn subset<I: Into<Indexer>>(&self, indexer: I) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        match resolve_rows(&indexer.into(), self.nrows()) {
            Ok(idxs) => self.gather_rows(&idxs),
            Err(err) => DataFrame::from_error(err),
        }
    }
    /// Frame with the rows at `idxs`, which must be in bounds.
    pub(crate) fn gather_rows(&self, idxs: &[usize]) -> DataFrame {
        DataFrame {
            columns: self.columns.iter().map(|col| col.gather(idxs)).collect(),
            err: self.err.clone(),
        }
    }
    /// Rows in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        if start > end || end > self.nrows() {
            return DataFrame::from_error(TabulaError::OutOfRange {
                index: end as i64,
                len: self.nrows(),
            });
        }
        self.gather_rows(&(start..end).collect::<Vec<_>>())
    }
    /// Copy with the column `old` renamed to `new`. Unchanged if `old` is absent.
    pub fn rename(&self, new: &str, old: &str) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        let columns = self
            .columns
            .iter()
            .map(|col| {
                if col.name() == old {
                    col.rename(new)
                } else {
                    col.clone()
                }
            })
            .collect();
        DataFrame::new(columns)
    }
    /// Columns of this frame followed by those of `other`. Row counts must match.
    pub fn cbind(&self, other: &DataFrame) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        if let Some(err) = other.err() {
            return DataFrame::from_error(err.clone());
        }
        DataFrame::new(
            self.columns
                .iter()
                .chain(other.columns.iter())
                .cloned()
                .collect(),
        )
    }
    /// Rows of this frame followed by those of `other`. Both frames must have the same set of
    /// column names; `other`'s columns are matched by name and each column's type is the
    /// promotion of both types.
    pub fn rbind(&self, other: &DataFrame) -> DataFrame {
        match self.try_rbind(other) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_rbind(&self, other: &DataFrame) -> Result<DataFrame> {
        if let Some(err) = self.err().or_else(|| other.err()) {
            return Err(err.clone());
        }
        if self.ncols() != other.ncols() {
            return Err(TabulaError::DimensionMismatch(format!(
                "{} columns vs {} columns",
                self.ncols(),
                other.ncols()
            )));
        }
        let mut columns = Vec::with_capacity(self.ncols());
        for col in &self.columns {
            let other_col = other.try_column(col.name())?;
            let dtype = col.dtype().promote(other_col.dtype());
            columns.push(col.as_type(dtype).concat(other_col));
        }
        Ok(DataFrame::new(columns))
    }
    /// Replaces the column with the same name as `series`, or appends it. Its length must equal
    /// the number of rows.
    pub fn mutate(&self, series: &Series) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        if let Some(err) = series.err() {
            return DataFrame::from_error(err.clone());
        }
        if series.len() != self.nrows() {
            return DataFrame::from_error(TabulaError::DimensionMismatch(format!(
                "series '{}' has {} rows, frame has {}",
                series.name(),
                series.len(),
                self.nrows()
            )));
        }
        let mut columns = self.columns.clone();
        match columns.iter().position(|col| col.name() == series.name()) {
            Some(i) => columns[i] = series.clone(),
            None => columns.push(series.clone()),
        }
        DataFrame::new(columns)
    }
    /// For every column of this frame also present (by name) in `values`, replaces the rows
    /// picked by `indexer` with that column's values.
    pub fn set<I: Into<Indexer>>(&self, indexer: I, values: &DataFrame) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        if let Some(err) = values.err() {
            return DataFrame::from_error(err.clone());
        }
        let indexer = indexer.into();
        let columns = self
            .columns
            .iter()
            .map(|col| match values.column(col.name()) {
                Some(new_values) => col.set(indexer.clone(), new_values),
                None => col.clone(),
            })
            .collect();
        DataFrame::new(columns)
    }
    /// Appends column `name` holding `a op b` for columns `a` and `b`.
    pub fn arith(&self, name: &str, op: ArithOp, a: &str, b: &str) -> DataFrame {
        if self.err.is_some() {
            return self.clone();
        }
        let result = self.col(a).arith(op, &self.col(b)).rename(name);
        self.mutate(&result)
    }

    /// Element at row `row` of column `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn elem(&self, row: usize, col: usize) -> Element {
        self.columns[col].elem(row)
    }
    /// First element of column `col_b` whose row holds a value equal to `key` in column `col_a`.
    pub fn find_elem<C: Coerce + ?Sized>(
        &self,
        col_a: &str,
        key: &C,
        col_b: &str,
    ) -> Option<Element> {
        let (a, b) = match (self.column(col_a), self.column(col_b)) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };
        let key = key.to_element();
        (0..self.nrows())
            .find(|&i| a.elem(i).eq(&key))
            .map(|i| b.elem(i))
    }
    /// Header row of names followed by the canonical string form of every row.
    pub fn records(&self) -> Vec<Vec<String>> {
        let columns = self
            .columns
            .iter()
            .map(|col| col.records())
            .collect::<Vec<_>>();
        let mut records = Vec::with_capacity(self.nrows() + 1);
        records.push(self.names());
        for i in 0..self.nrows() {
            records.push(columns.iter().map(|col| col[i].clone()).collect());
        }
        records
    }
    /// Elements of row `row`. Panics if `row` is out of bounds.
    pub(crate) fn row(&self, row: usize) -> Vec<Element> {
        self.columns.iter().map(|col| col.elem(row)).collect()
    }

    /// Applies `f` to every column. Each result keeps its column's name; results must agree in
    /// length.
    pub fn capply<F>(&self, f: F) -> DataFrame
    where
        F: Fn(&Series) -> Series,
    {
        if self.err.is_some() {
            return self.clone();
        }
        DataFrame::new(
            self.columns
                .iter()
                .map(|col| f(col).rename(col.name()))
                .collect(),
        )
    }
    /// Applies `f` to every row. A row is passed as an unnamed series whose type is the promotion
    /// of all column types. Results must agree in length `K`; the output has columns `X0` to
    /// `X(K-1)`, each typed as the promotion of the result types.
    ///
    /// A frame without rows gives no result rows to take `K` from, so it fails with
    /// `EmptyFrame`.
    pub fn rapply<F>(&self, f: F) -> DataFrame
    where
        F: Fn(&Series) -> Series,
    {
        match self.try_rapply(f) {
            Ok(frame) => frame,
            Err(err) => DataFrame::from_error(err),
        }
    }
    fn try_rapply<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Series) -> Series,
    {
        if let Some(ref err) = self.err {
            return Err(err.clone());
        }
        if self.nrows() == 0 {
            return Err(TabulaError::EmptyFrame);
        }
        let row_type = self
            .types()
            .into_iter()
            .fold(DType::Bool, |acc, dtype| acc.promote(dtype));
        let mut rows = Vec::with_capacity(self.nrows());
        for i in 0..self.nrows() {
            let row = Series::new(&self.row(i), row_type, "");
            rows.push(f(&row).into_result()?);
        }
        rows_to_columns(&rows, &[]).map(DataFrame::new)
    }
}

/// Transposes equal-length result rows into columns named `X0`, `X1`, ... following
/// `prefix_columns`. Each column's type is the promotion of the types of the rows.
pub(crate) fn rows_to_columns(rows: &[Series], prefix_columns: &[Series]) -> Result<Vec<Series>> {
    let width = rows.first().map_or(0, |row| row.len());
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(TabulaError::InconsistentRowLength(format!(
            "expected rows of length {}, found length {}",
            width,
            row.len()
        )));
    }
    let mut columns = prefix_columns.to_vec();
    for k in 0..width {
        let dtype = rows
            .iter()
            .map(|row| row.dtype())
            .fold(None, |acc: Option<DType>, dtype| {
                Some(acc.map_or(dtype, |acc| acc.promote(dtype)))
            })
            .unwrap_or(DType::Str);
        let values = rows.iter().map(|row| row.elem(k)).collect::<Vec<_>>();
        columns.push(Series::new(&values, dtype, &format!("X{}", k)));
    }
    Ok(columns)
}

const MAX_DISP_ROWS: usize = 1000;

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref err) = self.err {
            return write!(f, "DataFrame error: {}", err);
        }
        writeln!(f, "[{}x{}] DataFrame", self.nrows(), self.ncols())?;
        let mut table = pt::Table::new();
        table.set_titles(pt::Row::new(
            self.names().iter().map(|name| pt::Cell::new(name)).collect(),
        ));
        table.add_row(pt::Row::new(
            self.types()
                .iter()
                .map(|dtype| pt::Cell::new(&format!("<{}>", dtype)))
                .collect(),
        ));
        let columns = self
            .columns
            .iter()
            .map(|col| col.records())
            .collect::<Vec<_>>();
        for i in 0..self.nrows().min(MAX_DISP_ROWS) {
            table.add_row(pt::Row::new(
                columns.iter().map(|col| pt::Cell::new(&col[i])).collect(),
            ));
        }
        table.set_format(*pt::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        fmt::Display::fmt(&table, f)?;
        if self.nrows() > MAX_DISP_ROWS {
            writeln!(f, "... {} more rows", self.nrows() - MAX_DISP_ROWS)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serialize")]
impl Serialize for DataFrame {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.ncols()))?;
        for col in &self.columns {
            map.serialize_entry(col.name(), col)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::*;
    use value::Value;

    #[test]
    fn construction() {
        let df = sample_frame();
        assert_eq!(df.dims(), (4, 4));
        assert_eq!(df.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(
            df.types(),
            vec![DType::Str, DType::Int, DType::Float, DType::Bool]
        );

        assert_eq!(DataFrame::new(vec![]).err(), Some(&TabulaError::NoArguments));
        match DataFrame::new(vec![Series::ints(&[1, 2]), Series::ints(&[1])]).err() {
            Some(&TabulaError::DimensionMismatch(_)) => {}
            e => panic!("expected DimensionMismatch, received {:?}", e),
        }
        let errored = Series::ints(&[1]).subset(4usize);
        assert_eq!(
            DataFrame::new(vec![Series::ints(&[1]), errored]).err(),
            Some(&TabulaError::OutOfRange { index: 4, len: 1 })
        );
    }

    #[test]
    fn construction_fixes_names() {
        let df = DataFrame::new(vec![
            Series::ints(&[1]),
            Series::new(&[2], DType::Int, "A"),
            Series::new(&[3], DType::Int, "A"),
            Series::ints(&[4]),
        ]);
        assert_eq!(df.names(), vec!["X0", "A_0", "A_1", "X1"]);
    }

    #[test]
    fn column_access() {
        let df = sample_frame();
        assert_eq!(df.col("B").records(), vec!["4", "5", "4", "2"]);
        assert_eq!(
            df.col("Z").err(),
            Some(&TabulaError::UnknownColumn("Z".to_string()))
        );
        assert_eq!(df.elem(1, 2), Element::Float(Value::Exists(7.0)));
        assert_eq!(
            df.find_elem("A", "k", "C"),
            Some(Element::Float(Value::Exists(7.0)))
        );
        assert_eq!(df.find_elem("A", "z", "C"), None);
        assert_eq!(df.find_elem("B", "2", "A").map(|e| e.records()), Some("a".to_string()));
    }

    #[test]
    fn subset_rows() {
        let df = sample_frame();
        let sub = df.subset(vec![0usize, 2]);
        assert_eq!(sub.dims(), (2, 4));
        assert_eq!(sub.types(), df.types());
        assert_eq!(sub.col("A").records(), vec!["a", "k"]);
        assert_eq!(sub.col("C").records(), vec!["5.100000", "6.000000"]);

        let masked = df.subset(vec![false, true, false, true]);
        assert_eq!(masked.col("B").records(), vec!["5", "2"]);

        assert_eq!(
            df.subset(9usize).err(),
            Some(&TabulaError::OutOfRange { index: 9, len: 4 })
        );
        assert_eq!(df.slice(1, 3).col("B").records(), vec!["5", "4"]);
    }

    #[test]
    fn select_and_drop() {
        let df = sample_frame();
        let sel = df.select(vec!["C", "A"]);
        assert_eq!(sel.names(), vec!["C", "A"]);
        let dup = df.select(vec!["B", "B"]);
        assert_eq!(dup.names(), vec!["B_0", "B_1"]);
        assert_eq!(df.select(vec![3usize, 0]).names(), vec!["D", "A"]);
        assert_eq!(
            df.select("Q").err(),
            Some(&TabulaError::UnknownColumn("Q".to_string()))
        );
        assert_eq!(df.drop(vec!["A", "D"]).names(), vec!["B", "C"]);
    }

    #[test]
    fn rename_columns() {
        let df = sample_frame();
        assert_eq!(df.rename("Z", "B").names(), vec!["A", "Z", "C", "D"]);
        assert_eq!(df.rename("Z", "nope"), df);
        assert_eq!(df.rename("A", "B").names(), vec!["A_0", "A_1", "C", "D"]);
    }

    #[test]
    fn bind() {
        let df = sample_frame();
        let wide = df.cbind(&df.select(vec!["B"]));
        assert_eq!(wide.names(), vec!["A", "B_0", "C", "D", "B_1"]);
        assert!(df.cbind(&df.subset(0usize)).err().is_some());

        let other = DataFrame::new(vec![
            Series::new(&[1.5], DType::Float, "B"),
            Series::new(&["z"], DType::Str, "A"),
            Series::new(&[0.5], DType::Float, "C"),
            Series::new(&[false], DType::Bool, "D"),
        ]);
        let long = df.rbind(&other);
        assert_eq!(long.nrows(), 5);
        assert_eq!(long.col("B").dtype(), DType::Float);
        assert_eq!(long.col("B").float(), vec![4.0, 5.0, 4.0, 2.0, 1.5]);
        assert_eq!(long.col("A").records()[4], "z");

        let missing = other.rename("E", "D");
        assert_eq!(
            df.rbind(&missing).err(),
            Some(&TabulaError::UnknownColumn("D".to_string()))
        );
    }

    #[test]
    fn mutate_and_set() {
        let df = sample_frame();
        let replaced = df.mutate(&Series::new(&[0, 0, 0, 0], DType::Int, "B"));
        assert_eq!(replaced.names(), df.names());
        assert_eq!(replaced.col("B").records(), vec!["0", "0", "0", "0"]);
        let appended = df.mutate(&Series::new(&[1, 2, 3, 4], DType::Int, "E"));
        assert_eq!(appended.ncols(), 5);
        assert!(df.mutate(&Series::ints(&[1])).err().is_some());

        let values = DataFrame::new(vec![
            Series::new(&["z", "y"], DType::Str, "A"),
            Series::new(&[9, 9], DType::Int, "B"),
        ]);
        let updated = df.set(vec![1usize, 3], &values);
        assert_eq!(updated.col("A").records(), vec!["a", "z", "k", "y"]);
        assert_eq!(updated.col("B").records(), vec!["4", "9", "4", "9"]);
        assert_eq!(updated.col("C").records(), df.col("C").records());
        assert!(df.set(vec![1usize], &values).err().is_some());
    }

    #[test]
    fn column_math() {
        let df = sample_frame();
        let with_sum = df.arith("BC", ArithOp::Add, "B", "C");
        assert_eq!(with_sum.names(), vec!["A", "B", "C", "D", "BC"]);
        let expected = [9.1, 12.0, 10.0, 9.1];
        for (value, expected) in with_sum.col("BC").float().iter().zip(expected.iter()) {
            assert!((value - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn apply_functions() {
        let df = sample_frame().select(vec!["B", "C"]);
        let means = df.capply(|col| Series::floats(&col.mean()));
        assert_eq!(means.dims(), (1, 2));
        assert_eq!(means.names(), vec!["B", "C"]);
        assert_eq!(means.col("B").float(), vec![3.75]);

        let sums = df.rapply(|row| Series::floats(&[row.sum(), row.max()]));
        assert_eq!(sums.names(), vec!["X0", "X1"]);
        assert_eq!(sums.col("X1").float(), vec![5.1, 7.0, 6.0, 7.1]);

        let ragged = df.rapply(|row| {
            if row.elem(0).float_value() > 4.0 {
                Series::floats(&[1.0, 2.0])
            } else {
                Series::floats(&[1.0])
            }
        });
        match ragged.err() {
            Some(&TabulaError::InconsistentRowLength(_)) => {}
            e => panic!("expected InconsistentRowLength, received {:?}", e),
        }
    }

    #[test]
    fn rapply_without_rows() {
        let df = DataFrame::new(vec![Series::empty(DType::Float, "B")]);
        assert_eq!(df.dims(), (0, 1));
        let out = df.rapply(|row| Series::floats(&[row.sum()]));
        assert_eq!(out.err(), Some(&TabulaError::EmptyFrame));
    }

    #[test]
    fn records_and_display() {
        let df = sample_frame().subset(0usize);
        assert_eq!(
            df.records(),
            vec![
                vec!["A", "B", "C", "D"],
                vec!["a", "4", "5.100000", "true"],
            ]
        );
        let out = format!("{}", df);
        assert!(out.starts_with("[1x4] DataFrame"));
        assert!(out.contains("<float>"));
    }

    #[test]
    fn error_slot_propagates() {
        let df = sample_frame().subset(10usize);
        let chained = df.select(vec!["A"]).subset(0usize).rename("Z", "A");
        assert_eq!(chained.err(), Some(&TabulaError::OutOfRange { index: 10, len: 4 }));
        assert!(chained.into_result().is_err());
    }

    #[test]
    fn serialize() {
        let df = DataFrame::new(vec![
            Series::new(&["a", "b"], DType::Str, "A"),
            Series::new(&[Some(1), None], DType::Int, "B"),
        ]);
        assert_eq!(
            ::serde_json::to_string(&df).unwrap(),
            r#"{"A":["a","b"],"B":[1,null]}"#
        );
    }
}
