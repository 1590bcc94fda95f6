//! Loader configuration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use element::DType;

/// Function applied to every cell before NA detection and parsing.
pub type Trimmer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling how records are turned into a frame. Build with
/// [LoadOptionsBuilder](struct.LoadOptionsBuilder.html), or use the defaults.
#[derive(Clone)]
pub struct LoadOptions {
    pub(crate) has_header: bool,
    pub(crate) detect_types: bool,
    pub(crate) default_type: DType,
    pub(crate) types: HashMap<String, DType>,
    pub(crate) na_values: Vec<String>,
    pub(crate) trimmer: Option<Trimmer>,
    pub(crate) delimiter: u8,
    pub(crate) comment: Option<u8>,
}

impl Default for LoadOptions {
    fn default() -> LoadOptions {
        LoadOptions {
            has_header: true,
            detect_types: true,
            default_type: DType::Str,
            types: HashMap::new(),
            na_values: vec!["".to_string(), "NaN".to_string(), "NA".to_string()],
            trimmer: None,
            delimiter: b',',
            comment: None,
        }
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("has_header", &self.has_header)
            .field("detect_types", &self.detect_types)
            .field("default_type", &self.default_type)
            .field("types", &self.types)
            .field("na_values", &self.na_values)
            .field("trimmer", &self.trimmer.is_some())
            .field("delimiter", &(self.delimiter as char))
            .field("comment", &self.comment.map(|c| c as char))
            .finish()
    }
}

impl LoadOptions {
    /// Whether the first record names the columns.
    pub fn has_header(&self) -> bool {
        self.has_header
    }
    /// Type of column `name`: its explicit type if one was given, otherwise `None`.
    pub fn column_type(&self, name: &str) -> Option<DType> {
        self.types.get(name).cloned()
    }
    /// Cleans a raw cell: applies the trimmer and maps NA strings to `None`.
    pub(crate) fn clean(&self, cell: &str) -> Option<String> {
        let cell = match self.trimmer {
            Some(ref trimmer) => trimmer(cell),
            None => cell.to_string(),
        };
        if self.na_values.iter().any(|na| *na == cell) {
            None
        } else {
            Some(cell)
        }
    }
}

/// Builder for [LoadOptions](struct.LoadOptions.html).
#[derive(Clone, Default)]
pub struct LoadOptionsBuilder {
    has_header: Option<bool>,
    detect_types: Option<bool>,
    default_type: Option<DType>,
    types: Option<HashMap<String, DType>>,
    na_values: Option<Vec<String>>,
    trimmer: Option<Trimmer>,
    delimiter: Option<u8>,
    comment: Option<u8>,
}
impl LoadOptionsBuilder {
    /// Starts building with every option unset.
    pub fn new() -> LoadOptionsBuilder {
        LoadOptionsBuilder::default()
    }
    /// Whether the first record holds the column names. Defaults to `true`; without a header,
    /// columns are named `X0`, `X1`, ...
    pub fn has_header(&mut self, has_header: bool) -> &mut LoadOptionsBuilder {
        self.has_header = Some(has_header);
        self
    }
    /// Whether column types are inferred from the cells. Defaults to `true`.
    pub fn detect_types(&mut self, detect_types: bool) -> &mut LoadOptionsBuilder {
        self.detect_types = Some(detect_types);
        self
    }
    /// Type of columns with no explicit or detected type. Defaults to string.
    pub fn default_type(&mut self, default_type: DType) -> &mut LoadOptionsBuilder {
        self.default_type = Some(default_type);
        self
    }
    /// Explicit types by column name; these take precedence over detection.
    pub fn types<I, S>(&mut self, types: I) -> &mut LoadOptionsBuilder
    where
        I: IntoIterator<Item = (S, DType)>,
        S: Into<String>,
    {
        self.types = Some(
            types
                .into_iter()
                .map(|(name, dtype)| (name.into(), dtype))
                .collect(),
        );
        self
    }
    /// Strings read as NA. Defaults to `""`, `"NaN"` and `"NA"`.
    pub fn na_values<I, S>(&mut self, na_values: I) -> &mut LoadOptionsBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.na_values = Some(na_values.into_iter().map(|s| s.into()).collect());
        self
    }
    /// Function applied to every cell before it is parsed.
    pub fn trimmer<F>(&mut self, trimmer: F) -> &mut LoadOptionsBuilder
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.trimmer = Some(Arc::new(trimmer));
        self
    }
    /// CSV field delimiter. Defaults to `b','`.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut LoadOptionsBuilder {
        self.delimiter = Some(delimiter);
        self
    }
    /// CSV comment character; lines starting with it are skipped. Off by default.
    pub fn comment(&mut self, comment: u8) -> &mut LoadOptionsBuilder {
        self.comment = Some(comment);
        self
    }
    /// Finalize building, producing a `LoadOptions`.
    pub fn build(&self) -> LoadOptions {
        let defaults = LoadOptions::default();
        LoadOptions {
            has_header: self.has_header.unwrap_or(defaults.has_header),
            detect_types: self.detect_types.unwrap_or(defaults.detect_types),
            default_type: self.default_type.unwrap_or(defaults.default_type),
            types: self.types.clone().unwrap_or(defaults.types),
            na_values: self.na_values.clone().unwrap_or(defaults.na_values),
            trimmer: self.trimmer.clone(),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
            comment: self.comment,
        }
    }
}
