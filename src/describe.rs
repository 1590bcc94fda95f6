//! Summary statistics of a frame.

use element::DType;
use frame::DataFrame;
use series::Series;

/// Row labels of [describe](../frame/struct.DataFrame.html#method.describe) output.
pub const DESCRIBE_ROWS: [&str; 8] = ["mean", "median", "stddev", "min", "25%", "50%", "75%", "max"];

fn describe_column(col: &Series) -> Series {
    match col.dtype() {
        DType::Str => Series::new(
            &[
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                col.min_str(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
                col.max_str(),
            ],
            DType::Str,
            col.name(),
        ),
        _ => Series::new(
            &[
                col.mean(),
                col.median(),
                col.stddev(),
                col.min(),
                col.quantile(0.25),
                col.quantile(0.50),
                col.quantile(0.75),
                col.max(),
            ],
            DType::Float,
            col.name(),
        ),
    }
}

// Name of the label column: `column`, or the first free `column_<n>` if this frame already has a
// column of that name.
fn label_name(frame: &DataFrame) -> String {
    let names = frame.names();
    let taken = |name: &str| names.iter().any(|existing| *existing == name);
    if !taken("column") {
        return "column".to_string();
    }
    (0..)
        .map(|n| format!("column_{}", n))
        .find(|name| !taken(name))
        .unwrap_or_default()
}

impl DataFrame {
    /// Summary frame with one row per statistic (see [DESCRIBE_ROWS](constant.DESCRIBE_ROWS.html))
    /// and one column per column of this frame, preceded by a `column` column holding the row
    /// labels. Numeric and boolean columns summarize as floats; string columns report `-` for the
    /// numeric statistics and their lexicographic minimum and maximum.
    ///
    /// The columns of this frame keep their names. If one of them is already named `column`, the
    /// label column takes the first free name `column_0`, `column_1`, ...
    pub fn describe(&self) -> DataFrame {
        if self.err().is_some() {
            return self.clone();
        }
        let label = label_name(self);
        let mut columns = vec![Series::new(&DESCRIBE_ROWS, DType::Str, &label)];
        columns.extend(self.columns().iter().map(describe_column));
        DataFrame::new(columns)
    }
}
