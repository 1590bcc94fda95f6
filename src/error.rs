//! General error enum for the entire package, as well as helpful conversions.

use std;
use std::error::Error;
use std::fmt;

use csv;

/// General error enum. Errors are `Clone` so that a `Series` or `DataFrame` can carry one in its
/// error slot and hand it along when copied.
#[derive(Debug, Clone, PartialEq)]
pub enum TabulaError {
    /// Operation requires a non-empty frame (or a non-empty set of records).
    EmptyFrame,
    /// Lengths or row counts of the inputs differ.
    DimensionMismatch(String),
    /// Column name not found.
    UnknownColumn(String),
    /// Join called without any key columns.
    JoinKeysNotSpecified,
    /// Constructor called with no arguments.
    NoArguments,
    /// A loaded record has more cells than the header.
    TooManyColumns {
        /// Record (row) number, counting from zero after the header.
        row: usize,
        /// Expected number of cells.
        expected: usize,
        /// Number of cells found.
        found: usize,
    },
    /// A loaded record has fewer cells than the header.
    TooFewColumns {
        /// Record (row) number, counting from zero after the header.
        row: usize,
        /// Expected number of cells.
        expected: usize,
        /// Number of cells found.
        found: usize,
    },
    /// Indexer form not supported for this axis.
    UnknownIndexingMode(String),
    /// Value could not be converted to the requested type.
    TypeConversion(String),
    /// Index outside of the axis.
    OutOfRange {
        /// Requested index.
        index: i64,
        /// Length of the indexed axis.
        len: usize,
    },
    /// Indexer series contains NA values.
    IndexHasNa,
    /// Requested value is not in a reduction cache.
    CacheMiss(String),
    /// Group reducers returned rows of differing lengths.
    InconsistentRowLength(String),
    /// CSV reading / writing error.
    Csv(String),
}

/// Wrapper for crate results.
pub type Result<T> = ::std::result::Result<T, TabulaError>;

impl fmt::Display for TabulaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TabulaError::EmptyFrame => write!(f, "empty frame"),
            TabulaError::DimensionMismatch(ref s) => write!(f, "dimensions differ: {}", s),
            TabulaError::UnknownColumn(ref s) => write!(f, "unknown column: {}", s),
            TabulaError::JoinKeysNotSpecified => write!(f, "join keys not specified"),
            TabulaError::NoArguments => write!(f, "no arguments given"),
            TabulaError::TooManyColumns {
                row,
                expected,
                found,
            } => write!(
                f,
                "too many columns in record {}: expected {}, found {}",
                row, expected, found
            ),
            TabulaError::TooFewColumns {
                row,
                expected,
                found,
            } => write!(
                f,
                "too few columns in record {}: expected {}, found {}",
                row, expected, found
            ),
            TabulaError::UnknownIndexingMode(ref s) => write!(f, "unknown indexing mode: {}", s),
            TabulaError::TypeConversion(ref s) => write!(f, "type conversion error: {}", s),
            TabulaError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            TabulaError::IndexHasNa => write!(f, "indexer contains NA values"),
            TabulaError::CacheMiss(ref key) => write!(f, "cache miss: {}", key),
            TabulaError::InconsistentRowLength(ref s) => {
                write!(f, "inconsistent row length: {}", s)
            }
            TabulaError::Csv(ref s) => write!(f, "CSV error: {}", s),
        }
    }
}

impl Error for TabulaError {
    fn description(&self) -> &str {
        match *self {
            TabulaError::EmptyFrame => "empty frame",
            TabulaError::DimensionMismatch(ref s) => s,
            TabulaError::UnknownColumn(ref s) => s,
            TabulaError::JoinKeysNotSpecified => "join keys not specified",
            TabulaError::NoArguments => "no arguments",
            TabulaError::TooManyColumns { .. } => "too many columns",
            TabulaError::TooFewColumns { .. } => "too few columns",
            TabulaError::UnknownIndexingMode(ref s) => s,
            TabulaError::TypeConversion(ref s) => s,
            TabulaError::OutOfRange { .. } => "index out of range",
            TabulaError::IndexHasNa => "indexer has NA",
            TabulaError::CacheMiss(ref s) => s,
            TabulaError::InconsistentRowLength(ref s) => s,
            TabulaError::Csv(ref s) => s,
        }
    }

    fn cause(&self) -> Option<&dyn Error> {
        None
    }
}

impl From<std::num::ParseIntError> for TabulaError {
    fn from(err: std::num::ParseIntError) -> TabulaError {
        TabulaError::TypeConversion(err.to_string())
    }
}
impl From<std::num::ParseFloatError> for TabulaError {
    fn from(err: std::num::ParseFloatError) -> TabulaError {
        TabulaError::TypeConversion(err.to_string())
    }
}
impl From<csv::Error> for TabulaError {
    fn from(err: csv::Error) -> TabulaError {
        TabulaError::Csv(err.to_string())
    }
}
impl From<std::io::Error> for TabulaError {
    fn from(err: std::io::Error) -> TabulaError {
        TabulaError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            TabulaError::OutOfRange { index: 7, len: 4 }.to_string(),
            "index 7 out of range for length 4"
        );
        assert_eq!(
            TabulaError::UnknownColumn("Foo".into()).to_string(),
            "unknown column: Foo"
        );
        let err: TabulaError = "x1".parse::<i64>().unwrap_err().into();
        match err {
            TabulaError::TypeConversion(_) => {}
            e => panic!("expected TypeConversion, received {:?}", e),
        }
    }
}
