/*!
Named, typed, nullable one-dimensional data.

A [Series](struct.Series.html) stores its values in one of four densely-packed typed vectors
([SeriesData](enum.SeriesData.html)) selected by its logical type, each paired with a validity
bitmap. Any input implementing [IntoValues](trait.IntoValues.html) can be coerced into a series of
any logical type.

Series follow an error-slot convention: an operation that fails returns a series carrying the
error, and operations on an erroring series return that error unchanged. Use
[err](struct.Series.html#method.err) or [into_result](struct.Series.html#method.into_result) to
inspect it.
*/

use std::fmt;

#[cfg(feature = "serialize")]
use serde::ser::{Serialize, Serializer};

use prettytable as pt;

use element::{Coerce, DType, Element, NA_STRING};
use error::*;
use index::{resolve_rows, Indexer};
use masked::MaskedData;
use value::Value;

/// Typed storage of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// String storage.
    Str(MaskedData<String>),
    /// Integer storage.
    Int(MaskedData<i64>),
    /// Floating-point storage. Never holds `NaN` as an existing value.
    Float(MaskedData<f64>),
    /// Boolean storage.
    Bool(MaskedData<bool>),
}

macro_rules! with_data {
    ($data:expr, ref $d:ident => $body:expr) => {
        match $data {
            SeriesData::Str(ref $d) => $body,
            SeriesData::Int(ref $d) => $body,
            SeriesData::Float(ref $d) => $body,
            SeriesData::Bool(ref $d) => $body,
        }
    };
}

impl SeriesData {
    /// Creates empty storage for type `dtype`.
    pub fn with_capacity(dtype: DType, capacity: usize) -> SeriesData {
        match dtype {
            DType::Str => SeriesData::Str(MaskedData::with_capacity(capacity)),
            DType::Int => SeriesData::Int(MaskedData::with_capacity(capacity)),
            DType::Float => SeriesData::Float(MaskedData::with_capacity(capacity)),
            DType::Bool => SeriesData::Bool(MaskedData::with_capacity(capacity)),
        }
    }
    /// Logical type of this storage.
    pub fn dtype(&self) -> DType {
        match *self {
            SeriesData::Str(_) => DType::Str,
            SeriesData::Int(_) => DType::Int,
            SeriesData::Float(_) => DType::Float,
            SeriesData::Bool(_) => DType::Bool,
        }
    }
    /// Number of values.
    pub fn len(&self) -> usize {
        with_data!(*self, ref d => d.len())
    }
    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns `true` if the value at `index` is NA. Panics if `index` is out of bounds.
    pub fn is_na(&self, index: usize) -> bool {
        with_data!(*self, ref d => d.is_na(index))
    }
    /// Number of NA values.
    pub fn num_na(&self) -> usize {
        with_data!(*self, ref d => d.num_na())
    }
    /// Element at `index`, or `None` if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<Element> {
        match *self {
            SeriesData::Str(ref d) => d.get(index).map(|v| Element::Str(v.cloned())),
            SeriesData::Int(ref d) => d.get(index).map(|v| Element::Int(v.cloned())),
            SeriesData::Float(ref d) => d.get(index).map(|v| Element::Float(v.cloned())),
            SeriesData::Bool(ref d) => d.get(index).map(|v| Element::Bool(v.cloned())),
        }
    }
    /// Appends `value`, converted to this storage's type.
    pub fn push<C: Coerce + ?Sized>(&mut self, value: &C) {
        match *self {
            SeriesData::Str(ref mut d) => d.push(value.to_str_value()),
            SeriesData::Int(ref mut d) => d.push(value.to_int_value()),
            SeriesData::Float(ref mut d) => d.push(value.to_float_value()),
            SeriesData::Bool(ref mut d) => d.push(value.to_bool_value()),
        }
    }
    /// Replaces the value at `index` with `value`, converted to this storage's type. Panics if
    /// `index` is out of bounds.
    pub fn set<C: Coerce + ?Sized>(&mut self, index: usize, value: &C) {
        match *self {
            SeriesData::Str(ref mut d) => d.set(index, value.to_str_value()),
            SeriesData::Int(ref mut d) => d.set(index, value.to_int_value()),
            SeriesData::Float(ref mut d) => d.set(index, value.to_float_value()),
            SeriesData::Bool(ref mut d) => d.set(index, value.to_bool_value()),
        }
    }
    /// Values at `indices`, in order. Panics if any index is out of bounds.
    pub fn gather(&self, indices: &[usize]) -> SeriesData {
        match *self {
            SeriesData::Str(ref d) => SeriesData::Str(d.gather(indices)),
            SeriesData::Int(ref d) => SeriesData::Int(d.gather(indices)),
            SeriesData::Float(ref d) => SeriesData::Float(d.gather(indices)),
            SeriesData::Bool(ref d) => SeriesData::Bool(d.gather(indices)),
        }
    }
    /// Appends all values of `other`, converting them to this storage's type.
    pub fn extend(&mut self, other: &SeriesData) {
        match (self, other) {
            (&mut SeriesData::Str(ref mut l), &SeriesData::Str(ref r)) => l.extend_from(r),
            (&mut SeriesData::Int(ref mut l), &SeriesData::Int(ref r)) => l.extend_from(r),
            (&mut SeriesData::Float(ref mut l), &SeriesData::Float(ref r)) => l.extend_from(r),
            (&mut SeriesData::Bool(ref mut l), &SeriesData::Bool(ref r)) => l.extend_from(r),
            (this, other) => {
                for i in 0..other.len() {
                    if let Some(elem) = other.get(i) {
                        this.push(&elem);
                    }
                }
            }
        }
    }
}

/// Sources of values a series can be built from: scalars, sequences of scalars, and other series.
/// A missing scalar (`None` or `Value::Na`) produces a single NA value.
pub trait IntoValues {
    /// Number of values this source produces.
    fn num_values(&self) -> usize;
    /// Calls `f` with each value in order.
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce));

    /// Collects the values, each as an element of its own logical type.
    fn elements(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.num_values());
        self.each_value(&mut |value| out.push(value.to_element()));
        out
    }
}

macro_rules! impl_into_values_scalar {
    ($($t:ty)*) => {$(
        impl IntoValues for $t {
            fn num_values(&self) -> usize { 1 }
            fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) { f(&self) }
        }
    )*}
}
impl_into_values_scalar![str String i64 i32 u32 usize f64 f32 bool Element];

impl<T: Coerce> IntoValues for Option<T> {
    fn num_values(&self) -> usize {
        1
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        f(self)
    }
}
impl<T: Coerce> IntoValues for Value<T> {
    fn num_values(&self) -> usize {
        1
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        f(self)
    }
}
impl<T: Coerce> IntoValues for [T] {
    fn num_values(&self) -> usize {
        self.len()
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        for value in self {
            f(value);
        }
    }
}
impl<T: Coerce> IntoValues for Vec<T> {
    fn num_values(&self) -> usize {
        self.len()
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        self.as_slice().each_value(f)
    }
}
impl<T: Coerce, const N: usize> IntoValues for [T; N] {
    fn num_values(&self) -> usize {
        N
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        self[..].each_value(f)
    }
}
impl<'a, T: IntoValues + ?Sized> IntoValues for &'a T {
    fn num_values(&self) -> usize {
        (**self).num_values()
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        (**self).each_value(f)
    }
}
impl IntoValues for Series {
    fn num_values(&self) -> usize {
        self.len()
    }
    fn each_value(&self, f: &mut dyn FnMut(&dyn Coerce)) {
        for i in 0..self.len() {
            if let Some(elem) = self.data.get(i) {
                f(&elem);
            }
        }
    }
}

/// A named, typed sequence of nullable values with an error slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    data: SeriesData,
    err: Option<TabulaError>,
}

impl Series {
    /// Creates a series of type `dtype` named `name` from `values`, converting every value to
    /// `dtype`. Values that cannot be converted become NA.
    pub fn new<V: IntoValues + ?Sized>(values: &V, dtype: DType, name: &str) -> Series {
        let mut data = SeriesData::with_capacity(dtype, values.num_values());
        values.each_value(&mut |value| data.push(value));
        Series::from_data(data, name)
    }
    /// Unnamed string series.
    pub fn strings<V: IntoValues + ?Sized>(values: &V) -> Series {
        Series::new(values, DType::Str, "")
    }
    /// Unnamed integer series.
    pub fn ints<V: IntoValues + ?Sized>(values: &V) -> Series {
        Series::new(values, DType::Int, "")
    }
    /// Unnamed floating-point series.
    pub fn floats<V: IntoValues + ?Sized>(values: &V) -> Series {
        Series::new(values, DType::Float, "")
    }
    /// Unnamed boolean series.
    pub fn bools<V: IntoValues + ?Sized>(values: &V) -> Series {
        Series::new(values, DType::Bool, "")
    }
    /// Empty series of type `dtype`.
    pub fn empty(dtype: DType, name: &str) -> Series {
        Series::from_data(SeriesData::with_capacity(dtype, 0), name)
    }
    /// Creates a series from already-typed storage.
    pub fn from_data(data: SeriesData, name: &str) -> Series {
        Series {
            name: name.to_string(),
            data,
            err: None,
        }
    }
    /// Creates an empty string series carrying `err`.
    pub fn from_error(err: TabulaError) -> Series {
        Series {
            name: String::new(),
            data: SeriesData::with_capacity(DType::Str, 0),
            err: Some(err),
        }
    }
    /// An empty series with this series' name and type, carrying `err`.
    pub(crate) fn errored(&self, err: TabulaError) -> Series {
        Series {
            name: self.name.clone(),
            data: SeriesData::with_capacity(self.dtype(), 0),
            err: Some(err),
        }
    }

    /// The error carried by this series, if any.
    pub fn err(&self) -> Option<&TabulaError> {
        self.err.as_ref()
    }
    /// Converts this series into a `Result`, failing with its carried error.
    pub fn into_result(self) -> Result<Series> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
    /// Name of this series.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Renames this series in place.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
    /// Copy of this series with a new name.
    pub fn rename(&self, name: &str) -> Series {
        let mut ret = self.clone();
        ret.set_name(name);
        ret
    }
    /// Logical type of this series.
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }
    /// Typed storage of this series.
    pub fn data(&self) -> &SeriesData {
        &self.data
    }
    /// Number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Returns `true` if this series has no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Element> {
        self.data.get(index)
    }
    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn elem(&self, index: usize) -> Element {
        match self.data.get(index) {
            Some(elem) => elem,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
    /// Replaces the value at `index` in place, keeping this series' type.
    pub fn set_elem<C: Coerce + ?Sized>(&mut self, index: usize, value: &C) -> Result<()> {
        if index >= self.len() {
            return Err(TabulaError::OutOfRange {
                index: index as i64,
                len: self.len(),
            });
        }
        self.data.set(index, value);
        Ok(())
    }

    /// Extends this series in place with `values`, converted to this series' type. Does nothing
    /// if this series carries an error.
    pub fn append<V: IntoValues + ?Sized>(&mut self, values: &V) {
        if self.err.is_some() {
            return;
        }
        let data = &mut self.data;
        values.each_value(&mut |value| data.push(value));
    }
    /// New series holding this series' values followed by those of `other`, converted to this
    /// series' type.
    pub fn concat(&self, other: &Series) -> Series {
        if self.err.is_some() {
            return self.clone();
        }
        if let Some(err) = other.err() {
            return self.errored(err.clone());
        }
        let mut ret = self.clone();
        ret.data.extend(&other.data);
        ret
    }
    /// Copy of this series converted to type `dtype`.
    pub fn as_type(&self, dtype: DType) -> Series {
        if self.err.is_some() || dtype == self.dtype() {
            return self.clone();
        }
        let mut data = SeriesData::with_capacity(dtype, self.len());
        data.extend(&self.data);
        Series::from_data(data, &self.name)
    }

    /// New series with the values selected by `indexer`, in the order requested. Duplicates are
    /// allowed.
    pub fn subset<I: Into<Indexer>>(&self, indexer: I) -> Series {
        if self.err.is_some() {
            return self.clone();
        }
        match resolve_rows(&indexer.into(), self.len()) {
            Ok(indices) => self.gather(&indices),
            Err(err) => self.errored(err),
        }
    }
    /// New series with the values at `indices`, which must be in bounds.
    pub(crate) fn gather(&self, indices: &[usize]) -> Series {
        Series {
            name: self.name.clone(),
            data: self.data.gather(indices),
            err: self.err.clone(),
        }
    }
    /// New series with the positions selected by `indexer` replaced by the values of `values`.
    /// The number of selected positions must equal the length of `values`.
    pub fn set<I: Into<Indexer>>(&self, indexer: I, values: &Series) -> Series {
        if self.err.is_some() {
            return self.clone();
        }
        if let Some(err) = values.err() {
            return self.errored(err.clone());
        }
        let indices = match resolve_rows(&indexer.into(), self.len()) {
            Ok(indices) => indices,
            Err(err) => return self.errored(err),
        };
        if indices.len() != values.len() {
            return self.errored(TabulaError::DimensionMismatch(format!(
                "{} positions selected, {} values given",
                indices.len(),
                values.len()
            )));
        }
        let mut ret = self.clone();
        for (k, &idx) in indices.iter().enumerate() {
            if let Some(elem) = values.get(k) {
                ret.data.set(idx, &elem);
            }
        }
        ret
    }
    /// Values in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Series {
        if self.err.is_some() {
            return self.clone();
        }
        if start > end || end > self.len() {
            return self.errored(TabulaError::OutOfRange {
                index: end as i64,
                len: self.len(),
            });
        }
        let indices = (start..end).collect::<Vec<_>>();
        self.gather(&indices)
    }
    /// Applies `f` to every element; results are converted back to this series' type.
    pub fn map<F>(&self, f: F) -> Series
    where
        F: Fn(&Element) -> Element,
    {
        if self.err.is_some() {
            return self.clone();
        }
        let mut data = SeriesData::with_capacity(self.dtype(), self.len());
        for i in 0..self.len() {
            if let Some(elem) = self.data.get(i) {
                data.push(&f(&elem));
            }
        }
        Series::from_data(data, &self.name)
    }
    /// Copy of this series with NA values replaced by `value`.
    pub fn fill_na<C: Coerce + ?Sized>(&self, value: &C) -> Series {
        if self.err.is_some() {
            return self.clone();
        }
        let mut ret = self.clone();
        for i in 0..self.len() {
            if self.data.is_na(i) {
                ret.data.set(i, value);
            }
        }
        ret
    }

    /// Canonical string form of each value; NA is `"NaN"`.
    pub fn records(&self) -> Vec<String> {
        match self.data {
            SeriesData::Str(ref d) => d
                .iter()
                .map(|v| v.cloned().unwrap_or_else(|| NA_STRING.to_string()))
                .collect(),
            _ => (0..self.len())
                .filter_map(|i| self.data.get(i))
                .map(|elem| elem.records())
                .collect(),
        }
    }
    /// Floating-point projection of each value; NA (or unconvertible) values are `NaN`.
    pub fn float(&self) -> Vec<f64> {
        match self.data {
            SeriesData::Float(ref d) => d
                .iter()
                .map(|v| v.cloned().unwrap_or(::std::f64::NAN))
                .collect(),
            _ => (0..self.len())
                .filter_map(|i| self.data.get(i))
                .map(|elem| elem.float_value())
                .collect(),
        }
    }
    /// Integer projection of each value. Fails on NA or unconvertible values.
    pub fn int(&self) -> Result<Vec<i64>> {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            match self.data.get(i).map(|elem| elem.int_value()) {
                Some(Value::Exists(v)) => out.push(v),
                _ => {
                    return Err(TabulaError::TypeConversion(format!(
                        "can't convert value at index {} to int",
                        i
                    )))
                }
            }
        }
        Ok(out)
    }
    /// Boolean projection of each value. Fails on NA or unconvertible values.
    pub fn bool(&self) -> Result<Vec<bool>> {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            match self.data.get(i).map(|elem| elem.bool_value()) {
                Some(Value::Exists(v)) => out.push(v),
                _ => {
                    return Err(TabulaError::TypeConversion(format!(
                        "can't convert value at index {} to bool",
                        i
                    )))
                }
            }
        }
        Ok(out)
    }
    /// Elements of this series.
    pub fn elements(&self) -> Vec<Element> {
        (0..self.len()).filter_map(|i| self.data.get(i)).collect()
    }
    /// NA flag of each value.
    pub fn is_na(&self) -> Vec<bool> {
        (0..self.len()).map(|i| self.data.is_na(i)).collect()
    }
    /// Returns `true` if any value is NA.
    pub fn has_na(&self) -> bool {
        self.data.num_na() > 0
    }
    /// Number of NA values.
    pub fn na_count(&self) -> usize {
        self.data.num_na()
    }
}

const MAX_DISP_ROWS: usize = 1000;

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref err) = self.err {
            return write!(f, "Series error: {}", err);
        }
        let mut table = pt::Table::new();
        table.set_titles(pt::Row::new(vec![pt::Cell::new(&self.name)]));
        table.add_row(pt::Row::new(vec![pt::Cell::new(&format!("<{}>", self.dtype()))]));
        for record in self.records().into_iter().take(MAX_DISP_ROWS) {
            table.add_row(pt::Row::new(vec![pt::Cell::new(&record)]));
        }
        table.set_format(*pt::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        fmt::Display::fmt(&table, f)
    }
}

#[cfg(feature = "serialize")]
impl Serialize for Series {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        with_data!(self.data, ref d => d.serialize(serializer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_with_coercion() {
        let s = Series::new(&["1", "2", "x", "NaN"], DType::Int, "A");
        assert_eq!(s.len(), 4);
        assert_eq!(s.dtype(), DType::Int);
        assert_eq!(s.name(), "A");
        assert_eq!(s.records(), vec!["1", "2", "NaN", "NaN"]);
        assert_eq!(s.is_na(), vec![false, false, true, true]);

        let s = Series::floats(&vec![1i64, 2, 3]);
        assert_eq!(s.float(), vec![1.0, 2.0, 3.0]);
        assert_eq!(s.records(), vec!["1.000000", "2.000000", "3.000000"]);

        let s = Series::bools(&["t", "0", "maybe"]);
        assert_eq!(s.records(), vec!["true", "false", "NaN"]);

        let s = Series::strings(&[Some(1.5), None]);
        assert_eq!(s.records(), vec!["1.500000", "NaN"]);
    }

    #[test]
    fn construct_from_nil() {
        for &dtype in &[DType::Str, DType::Int, DType::Float, DType::Bool] {
            let s = Series::new(&None::<i64>, dtype, "nil");
            assert_eq!(s.len(), 1);
            assert!(s.has_na());
            assert_eq!(s.records(), vec!["NaN"]);
        }
    }

    #[test]
    fn construct_from_series() {
        let ints = Series::ints(&[1, 0, 1]);
        let bools = Series::new(&ints, DType::Bool, "flags");
        assert_eq!(bools.bool().unwrap(), vec![true, false, true]);
    }

    #[test]
    fn append_and_concat() {
        let mut s = Series::ints(&[1, 2]);
        s.append(&["3", "x"]);
        assert_eq!(s.records(), vec!["1", "2", "3", "NaN"]);

        let other = Series::floats(&[4.7, 5.0]);
        let joined = s.concat(&other);
        assert_eq!(joined.dtype(), DType::Int);
        assert_eq!(joined.records(), vec!["1", "2", "3", "NaN", "4", "5"]);
        // receiver unchanged
        assert_eq!(s.len(), 4);

        let empty = Series::empty(DType::Int, "");
        assert_eq!(s.concat(&empty).records(), s.records());
    }

    #[test]
    fn append_is_noop_on_error() {
        let mut s = Series::ints(&[1, 2]).subset(vec![5usize]);
        assert!(s.err().is_some());
        s.append(&3);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn subset_and_set() {
        let s = Series::strings(&["a", "b", "c", "d"]);
        assert_eq!(s.subset(vec![3usize, 0, 0]).records(), vec!["d", "a", "a"]);
        assert_eq!(
            s.subset(vec![true, false, true, false]).records(),
            vec!["a", "c"]
        );

        let updated = s.set(vec![1usize, 3], &Series::strings(&["x", "y"]));
        assert_eq!(updated.records(), vec!["a", "x", "c", "y"]);
        assert_eq!(s.records(), vec!["a", "b", "c", "d"]);

        let mismatch = s.set(vec![1usize], &Series::strings(&["x", "y"]));
        match mismatch.err() {
            Some(&TabulaError::DimensionMismatch(_)) => {}
            e => panic!("expected DimensionMismatch, received {:?}", e),
        }
        let out_of_range = s.set(vec![9usize], &Series::strings(&["x"]));
        assert_eq!(
            out_of_range.err(),
            Some(&TabulaError::OutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn copies_are_independent() {
        let s = Series::ints(&[1, 2, 3]);
        let mut copy = s.clone();
        copy.set_elem(0, &10).unwrap();
        assert_eq!(copy.records(), vec!["10", "2", "3"]);
        assert_eq!(s.records(), vec!["1", "2", "3"]);
    }

    #[test]
    fn element_access() {
        let mut s = Series::floats(&[1.5, 2.5]);
        assert_eq!(s.elem(1), Element::Float(Value::Exists(2.5)));
        assert_eq!(s.get(2), None);
        s.set_elem(1, "oops").unwrap();
        assert!(s.elem(1).is_na());
        assert_eq!(s.dtype(), DType::Float);
        assert_eq!(
            s.set_elem(4, &1.0),
            Err(TabulaError::OutOfRange { index: 4, len: 2 })
        );
    }

    #[test]
    fn projections() {
        let s = Series::ints(&[Some(1), None]);
        assert!(s.float()[1].is_nan());
        assert!(s.int().is_err());
        assert_eq!(Series::strings(&["7", "8"]).int().unwrap(), vec![7, 8]);
        assert!(Series::ints(&[2]).bool().is_err());
        assert_eq!(s.na_count(), 1);
    }

    #[test]
    fn slice_map_fill() {
        let s = Series::ints(&[Some(1), None, Some(3), Some(4)]);
        assert_eq!(s.slice(1, 3).records(), vec!["NaN", "3"]);
        assert!(s.slice(3, 5).err().is_some());
        let doubled = s.map(|elem| match elem.int_value() {
            Value::Exists(v) => Element::from(v * 2),
            Value::Na => elem.clone(),
        });
        assert_eq!(doubled.records(), vec!["2", "NaN", "6", "8"]);
        assert_eq!(s.fill_na(&0).records(), vec!["1", "0", "3", "4"]);
    }

    #[test]
    fn as_type() {
        let s = Series::floats(&[1.25, 2.0]);
        assert_eq!(s.as_type(DType::Str).records(), vec!["1.250000", "2.000000"]);
        assert_eq!(s.as_type(DType::Int).int().unwrap(), vec![1, 2]);
    }

    #[test]
    fn display() {
        let s = Series::new(&[1, 2], DType::Int, "count");
        let out = format!("{}", s);
        assert!(out.contains("count"));
        assert!(out.contains("<int>"));
    }

    #[test]
    fn serialize() {
        let s = Series::new(&[Some(1), None, Some(3)], DType::Int, "count");
        assert_eq!(::serde_json::to_string(&s).unwrap(), "[1,null,3]");
    }
}
