/*!
In-memory tabular data library for Rust. Provides typed, nullable series, data frames built from
them, and utilities for selecting, filtering, sorting, joining, grouping and summarizing them.

Values are coerced between the four logical types (string, integer, float and boolean) through the
[Coerce](element/trait.Coerce.html) protocol. Missing values (NA) are tracked with a validity
bitmap next to densely-packed typed storage.

Both [Series](series/struct.Series.html) and [DataFrame](frame/struct.DataFrame.html) carry an error
slot: failed operations return an object carrying the error, and operations on such an object pass
the error along, so fluent chains of operations report the first error encountered.
*/

#![warn(missing_docs)]
#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

extern crate bit_vec;
extern crate csv;
extern crate indexmap;
#[macro_use]
extern crate log;
extern crate num_traits;
extern crate prettytable;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate serde_json;

pub mod error;
pub use error::{Result, TabulaError};
pub mod value;
pub use value::Value;
pub mod element;
pub use element::{Coerce, DType, Element};
pub mod masked;
pub use masked::MaskedData;
pub mod series;
pub use series::{IntoValues, Series, SeriesData};
pub mod index;
pub use index::Indexer;
pub mod compare;
pub use compare::Comparator;
pub mod permute;
pub mod stats;
pub mod ops;
pub use ops::ArithOp;
pub mod rolling;
pub use rolling::{CachedRollingWindow, RollingWindow};
pub mod cache;
pub use cache::CachedSeries;
pub mod names;

pub mod frame;
pub use frame::DataFrame;
pub mod filter;
pub use filter::{Aggregation, Filter};
pub mod sort;
pub use sort::Order;
pub mod describe;
pub mod join;
pub use join::JoinKind;
pub mod group;
pub use group::{AggregationType, GroupedDataFrame};
pub mod source;
pub use source::{load_maps, load_records, read_csv, write_csv, LoadOptions, LoadOptionsBuilder};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
