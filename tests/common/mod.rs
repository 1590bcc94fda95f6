use std::fs::File;
use std::path::{Path, PathBuf};

use tabula::source::{read_csv, LoadOptions};
use tabula::DataFrame;

pub fn data_path(filename: &str) -> PathBuf {
    Path::new(file!()) // start as this file
        .parent()
        .unwrap() // navigate up to common directory
        .parent()
        .unwrap() // navigate up to tests directory
        .join("data") // navigate into data directory
        .join(filename) // navigate to target file
}

pub fn load_csv_file(filename: &str, options: &LoadOptions) -> DataFrame {
    let file = File::open(data_path(filename)).unwrap();
    read_csv(file, options).into_result().unwrap()
}
