//! Loading frames from records, maps and CSV data, and writing them back out.

mod options;
pub use self::options::{LoadOptions, LoadOptionsBuilder, Trimmer};

mod records;
pub use self::records::{load_maps, load_records};

mod csv;
pub use self::csv::{read_csv, write_csv};
