//! Frames from in-memory records and maps.

use std::collections::{BTreeSet, HashMap};

use element::{parse_bool, DType, Element};
use error::*;
use frame::DataFrame;
use series::{Series, SeriesData};
use source::LoadOptions;

// A column of cleaned cells; `None` marks NA.
type Cells = Vec<Option<String>>;

/// Infers the type of a column from its non-NA cells: integers, then floats, then booleans, then
/// strings. `None` if every cell is NA.
pub(crate) fn infer_type(cells: &[Option<String>]) -> Option<DType> {
    let mut present = cells.iter().filter_map(|cell| cell.as_ref()).peekable();
    present.peek()?;
    let present = present.collect::<Vec<_>>();
    Some(if present.iter().all(|s| s.parse::<i64>().is_ok()) {
        DType::Int
    } else if present.iter().all(|s| s.parse::<f64>().is_ok()) {
        DType::Float
    } else if present.iter().all(|s| parse_bool(s).is_some()) {
        DType::Bool
    } else {
        DType::Str
    })
}

fn load_columns(names: Vec<String>, columns: Vec<Cells>, options: &LoadOptions) -> Result<DataFrame> {
    let mut series = Vec::with_capacity(columns.len());
    for (name, cells) in names.iter().zip(columns.iter()) {
        let dtype = options
            .column_type(name)
            .or_else(|| {
                if options.detect_types {
                    infer_type(cells)
                } else {
                    None
                }
            })
            .unwrap_or(options.default_type);
        let mut data = SeriesData::with_capacity(dtype, cells.len());
        for cell in cells {
            match *cell {
                Some(ref value) => data.push(value.as_str()),
                None => data.push(&Element::na(dtype)),
            }
        }
        series.push(Series::from_data(data, name));
    }
    let frame = DataFrame::new(series).into_result()?;
    debug!(
        "loaded {} rows with columns {:?}",
        frame.nrows(),
        frame
            .names()
            .iter()
            .zip(frame.types())
            .map(|(name, dtype)| format!("{}: {}", name, dtype))
            .collect::<Vec<_>>()
    );
    Ok(frame)
}

/// Creates a frame from rows of string cells. The first row names the columns unless
/// `options` says there is no header, in which case columns are named `X0`, `X1`, ...
/// Every row must have as many cells as the first row.
pub fn load_records<S: AsRef<str>>(records: &[Vec<S>], options: &LoadOptions) -> DataFrame {
    match try_load_records(records, options) {
        Ok(frame) => frame,
        Err(err) => DataFrame::from_error(err),
    }
}
fn try_load_records<S: AsRef<str>>(records: &[Vec<S>], options: &LoadOptions) -> Result<DataFrame> {
    let width = match records.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(TabulaError::EmptyFrame),
    };
    let (names, rows) = if options.has_header {
        (
            records[0].iter().map(|s| s.as_ref().to_string()).collect(),
            &records[1..],
        )
    } else {
        (vec![String::new(); width], records)
    };

    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for (row, record) in rows.iter().enumerate() {
        if record.len() > width {
            return Err(TabulaError::TooManyColumns {
                row,
                expected: width,
                found: record.len(),
            });
        }
        if record.len() < width {
            return Err(TabulaError::TooFewColumns {
                row,
                expected: width,
                found: record.len(),
            });
        }
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            column.push(options.clean(cell.as_ref()));
        }
    }
    load_columns(names, columns, options)
}

/// Creates a frame from maps of column name to cell. The columns are the union of all keys, in
/// sorted order; keys missing from a map are NA in that row. The header option is ignored.
pub fn load_maps<S: AsRef<str>>(maps: &[HashMap<String, S>], options: &LoadOptions) -> DataFrame {
    match try_load_maps(maps, options) {
        Ok(frame) => frame,
        Err(err) => DataFrame::from_error(err),
    }
}
fn try_load_maps<S: AsRef<str>>(
    maps: &[HashMap<String, S>],
    options: &LoadOptions,
) -> Result<DataFrame> {
    let names = maps
        .iter()
        .flat_map(|map| map.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    if maps.is_empty() || names.is_empty() {
        return Err(TabulaError::EmptyFrame);
    }
    let columns = names
        .iter()
        .map(|name| {
            maps.iter()
                .map(|map| map.get(name).and_then(|cell| options.clean(cell.as_ref())))
                .collect::<Cells>()
        })
        .collect();
    load_columns(names, columns, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use source::LoadOptionsBuilder;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn type_inference() {
        let cells = |values: &[&str]| {
            values
                .iter()
                .map(|s| if s.is_empty() { None } else { Some(s.to_string()) })
                .collect::<Vec<_>>()
        };
        assert_eq!(infer_type(&cells(&["1", "", "-3"])), Some(DType::Int));
        assert_eq!(infer_type(&cells(&["1", "2.5"])), Some(DType::Float));
        assert_eq!(infer_type(&cells(&["true", "F"])), Some(DType::Bool));
        assert_eq!(infer_type(&cells(&["true", "x"])), Some(DType::Str));
        assert_eq!(infer_type(&cells(&["", ""])), None);
    }

    #[test]
    fn records_with_header() {
        let df = load_records(
            &rows(&[
                &["A", "B", "C", "D"],
                &["a", "4", "5.1", "true"],
                &["k", "5", "NaN", "true"],
                &["k", "", "6.0", "false"],
            ]),
            &LoadOptions::default(),
        );
        assert_eq!(df.names(), vec!["A", "B", "C", "D"]);
        assert_eq!(
            df.types(),
            vec![DType::Str, DType::Int, DType::Float, DType::Bool]
        );
        assert_eq!(df.col("B").records(), vec!["4", "5", "NaN"]);
        assert_eq!(df.col("C").na_count(), 1);
    }

    #[test]
    fn records_without_header() {
        let opts = LoadOptionsBuilder::new()
            .has_header(false)
            .detect_types(false)
            .build();
        let df = load_records(&rows(&[&["1", "x"], &["2", "y"]]), &opts);
        assert_eq!(df.names(), vec!["X0", "X1"]);
        assert_eq!(df.types(), vec![DType::Str, DType::Str]);
        assert_eq!(df.nrows(), 2);
    }

    #[test]
    fn explicit_types_and_trimmer() {
        let opts = LoadOptionsBuilder::new()
            .types(vec![("B", DType::Float)])
            .trimmer(|s| s.trim().to_string())
            .build();
        let df = load_records(&rows(&[&["A", "B"], &[" 1 ", " 2 "], &["3", "x"]]), &opts);
        assert_eq!(df.types(), vec![DType::Int, DType::Float]);
        assert_eq!(df.col("A").records(), vec!["1", "3"]);
        assert_eq!(df.col("B").records(), vec!["2.000000", "NaN"]);
    }

    #[test]
    fn duplicate_header_names_are_fixed() {
        let df = load_records(&rows(&[&["A", "A", ""], &["1", "2", "3"]]), &LoadOptions::default());
        assert_eq!(df.names(), vec!["A_0", "A_1", "X0"]);
    }

    #[test]
    fn record_errors() {
        let opts = LoadOptions::default();
        let empty: Vec<Vec<String>> = vec![];
        assert_eq!(load_records(&empty, &opts).err(), Some(&TabulaError::EmptyFrame));
        assert_eq!(
            load_records(&rows(&[&["A", "B"], &["1", "2"], &["1", "2", "3"]]), &opts).err(),
            Some(&TabulaError::TooManyColumns {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            load_records(&rows(&[&["A", "B"], &["1"]]), &opts).err(),
            Some(&TabulaError::TooFewColumns {
                row: 0,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn maps() {
        let mut first = HashMap::new();
        first.insert("b".to_string(), "1");
        first.insert("a".to_string(), "x");
        let mut second = HashMap::new();
        second.insert("c".to_string(), "true");
        second.insert("b".to_string(), "2");
        let df = load_maps(&[first, second], &LoadOptions::default());
        assert_eq!(df.names(), vec!["a", "b", "c"]);
        assert_eq!(df.types(), vec![DType::Str, DType::Int, DType::Bool]);
        assert_eq!(df.col("a").records(), vec!["x", "NaN"]);
        assert_eq!(df.col("c").records(), vec!["NaN", "true"]);

        let none: Vec<HashMap<String, String>> = vec![];
        assert_eq!(load_maps(&none, &LoadOptions::default()).err(), Some(&TabulaError::EmptyFrame));
    }
}
