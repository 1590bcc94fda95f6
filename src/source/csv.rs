//! CSV reading and writing.

use std::io::{Read, Write};

use csv;

use error::*;
use frame::DataFrame;
use source::{load_records, LoadOptions};

/// Reads CSV data from `reader` into a frame, using `options` for the header, types, NA values,
/// delimiter and comment character.
pub fn read_csv<R: Read>(reader: R, options: &LoadOptions) -> DataFrame {
    match read_records(reader, options) {
        Ok(records) => load_records(&records, options),
        Err(err) => DataFrame::from_error(err),
    }
}

fn read_records<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<Vec<String>>> {
    // headers and ragged rows are handled by the record loader
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .comment(options.comment)
        .from_reader(reader);
    let mut records = vec![];
    for record in rdr.records() {
        records.push(record?.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(records)
}

/// Writes `frame` as CSV to `writer`, preceded by a row of column names if `header` is set. NA
/// values are written as `NaN`.
pub fn write_csv<W: Write>(frame: &DataFrame, writer: W, header: bool) -> Result<()> {
    if let Some(err) = frame.err() {
        return Err(err.clone());
    }
    let mut wtr = csv::Writer::from_writer(writer);
    let records = frame.records();
    let skip = if header { 0 } else { 1 };
    for record in records.iter().skip(skip) {
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use element::DType;
    use source::LoadOptionsBuilder;
    use test_utils::*;

    #[test]
    fn read() {
        let data = "A,B,C\na,1,2.5\nb,,3\n";
        let df = read_csv(data.as_bytes(), &LoadOptions::default());
        assert_eq!(df.names(), vec!["A", "B", "C"]);
        assert_eq!(df.types(), vec![DType::Str, DType::Int, DType::Float]);
        assert_eq!(df.col("B").records(), vec!["1", "NaN"]);
    }

    #[test]
    fn read_with_delimiter_and_comments() {
        let data = "# generated\nA;B\nx;true\n# trailing\ny;false\n";
        let opts = LoadOptionsBuilder::new().delimiter(b';').comment(b'#').build();
        let df = read_csv(data.as_bytes(), &opts);
        assert_eq!(df.dims(), (2, 2));
        assert_eq!(df.types(), vec![DType::Str, DType::Bool]);
    }

    #[test]
    fn ragged_input() {
        let df = read_csv("A,B\n1,2\n3\n".as_bytes(), &LoadOptions::default());
        assert_eq!(
            df.err(),
            Some(&TabulaError::TooFewColumns {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn write() {
        let mut out = vec![];
        let df = sample_frame().subset(vec![0usize, 1]);
        write_csv(&df, &mut out, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A,B,C,D\na,4,5.100000,true\nk,5,7.000000,true\n"
        );

        let mut out = vec![];
        write_csv(&df.select(vec!["B"]), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4\n5\n");
    }
}
