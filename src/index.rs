/*!
Polymorphic row and column selectors.

An [Indexer](enum.Indexer.html) is resolved against an axis into a list of positions. Row axes
accept integer positions, integer lists, boolean masks, and integer or boolean series; column axes
additionally accept names, name lists, and string series.
*/

use element::DType;
use error::*;
use series::Series;
use value::Value;

/// A selector over rows or columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Indexer {
    /// Single position.
    Int(i64),
    /// List of positions, in the order requested.
    Ints(Vec<i64>),
    /// Boolean mask; must match the axis length.
    Bools(Vec<bool>),
    /// Single column name.
    Name(String),
    /// List of column names, in the order requested.
    Names(Vec<String>),
    /// A series acting as one of the above, chosen by its type.
    Series(Series),
}

macro_rules! impl_indexer_from_int {
    ($($t:ty)*) => {$(
        impl From<$t> for Indexer {
            fn from(orig: $t) -> Indexer {
                Indexer::Int(orig as i64)
            }
        }
        impl From<Vec<$t>> for Indexer {
            fn from(orig: Vec<$t>) -> Indexer {
                Indexer::Ints(orig.into_iter().map(|i| i as i64).collect())
            }
        }
        impl<'a> From<&'a [$t]> for Indexer {
            fn from(orig: &'a [$t]) -> Indexer {
                Indexer::Ints(orig.iter().map(|&i| i as i64).collect())
            }
        }
    )*}
}
impl_indexer_from_int![usize i64 i32];

impl From<Vec<bool>> for Indexer {
    fn from(orig: Vec<bool>) -> Indexer {
        Indexer::Bools(orig)
    }
}
impl<'a> From<&'a [bool]> for Indexer {
    fn from(orig: &'a [bool]) -> Indexer {
        Indexer::Bools(orig.to_vec())
    }
}
impl<'a> From<&'a str> for Indexer {
    fn from(orig: &'a str) -> Indexer {
        Indexer::Name(orig.to_string())
    }
}
impl From<String> for Indexer {
    fn from(orig: String) -> Indexer {
        Indexer::Name(orig)
    }
}
impl<'a> From<Vec<&'a str>> for Indexer {
    fn from(orig: Vec<&'a str>) -> Indexer {
        Indexer::Names(orig.into_iter().map(|s| s.to_string()).collect())
    }
}
impl<'a, 'b> From<&'b [&'a str]> for Indexer {
    fn from(orig: &'b [&'a str]) -> Indexer {
        Indexer::Names(orig.iter().map(|s| s.to_string()).collect())
    }
}
impl From<Vec<String>> for Indexer {
    fn from(orig: Vec<String>) -> Indexer {
        Indexer::Names(orig)
    }
}
impl From<Series> for Indexer {
    fn from(orig: Series) -> Indexer {
        Indexer::Series(orig)
    }
}
impl<'a> From<&'a Series> for Indexer {
    fn from(orig: &'a Series) -> Indexer {
        Indexer::Series(orig.clone())
    }
}

fn check_position(index: i64, len: usize) -> Result<usize> {
    if index < 0 || index as usize >= len {
        Err(TabulaError::OutOfRange { index, len })
    } else {
        Ok(index as usize)
    }
}

fn mask_positions(mask: &[bool], len: usize) -> Result<Vec<usize>> {
    if mask.len() != len {
        return Err(TabulaError::DimensionMismatch(format!(
            "boolean indexer has length {}, axis has length {}",
            mask.len(),
            len
        )));
    }
    Ok(mask
        .iter()
        .enumerate()
        .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
        .collect())
}

fn series_values<T, F>(series: &Series, project: F) -> Result<Vec<T>>
where
    F: Fn(&::element::Element) -> Value<T>,
{
    if let Some(err) = series.err() {
        return Err(err.clone());
    }
    if series.has_na() {
        return Err(TabulaError::IndexHasNa);
    }
    let mut out = Vec::with_capacity(series.len());
    for elem in series.elements() {
        match project(&elem) {
            Value::Exists(v) => out.push(v),
            Value::Na => return Err(TabulaError::IndexHasNa),
        }
    }
    Ok(out)
}

/// Resolves `indexer` against a row axis of length `len`. Every returned position is within
/// `[0, len)`.
pub fn resolve_rows(indexer: &Indexer, len: usize) -> Result<Vec<usize>> {
    match *indexer {
        Indexer::Int(index) => Ok(vec![check_position(index, len)?]),
        Indexer::Ints(ref indices) => indices
            .iter()
            .map(|&index| check_position(index, len))
            .collect(),
        Indexer::Bools(ref mask) => mask_positions(mask, len),
        Indexer::Series(ref series) => match series.dtype() {
            DType::Int => {
                let indices = series_values(series, |elem| elem.int_value())?;
                indices
                    .into_iter()
                    .map(|index| check_position(index, len))
                    .collect()
            }
            DType::Bool => {
                let mask = series_values(series, |elem| elem.bool_value())?;
                mask_positions(&mask, len)
            }
            dtype => Err(TabulaError::UnknownIndexingMode(format!(
                "{} series can't select rows",
                dtype
            ))),
        },
        Indexer::Name(_) | Indexer::Names(_) => Err(TabulaError::UnknownIndexingMode(
            "column names can't select rows".to_string(),
        )),
    }
}

fn name_position(name: &str, names: &[String]) -> Result<usize> {
    names
        .iter()
        .position(|n| n == name)
        .ok_or_else(|| TabulaError::UnknownColumn(name.to_string()))
}

/// Resolves `indexer` against the column names `names`.
pub fn resolve_columns(indexer: &Indexer, names: &[String]) -> Result<Vec<usize>> {
    match *indexer {
        Indexer::Name(ref name) => Ok(vec![name_position(name, names)?]),
        Indexer::Names(ref requested) => requested
            .iter()
            .map(|name| name_position(name, names))
            .collect(),
        Indexer::Series(ref series) if series.dtype() == DType::Str => {
            let requested = series_values(series, |elem| elem.string_value())?;
            requested
                .iter()
                .map(|name| name_position(name, names))
                .collect()
        }
        _ => resolve_rows(indexer, names.len()),
    }
}
