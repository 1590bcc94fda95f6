extern crate tabula;

use std::fs::File;
use std::path::Path;

use tabula::{
    AggregationType, Comparator, DType, DataFrame, Filter, LoadOptions, Order, Series,
};

fn load_csv_file(filename: &str) -> DataFrame {
    let data_filepath = Path::new(file!()) // start as this file
        .parent()
        .unwrap() // navigate up to crate root
        .parent()
        .unwrap()
        .join("tests")
        .join("data") // navigate into data directory
        .join(filename); // navigate to target file
    let file = File::open(data_filepath).unwrap();
    tabula::read_csv(file, &LoadOptions::default())
        .into_result()
        .unwrap()
}

fn main() {
    let states = load_csv_file("sample1.csv");
    println!("{}", states);

    let regions = DataFrame::new(vec![
        Series::new(
            &["OH", "PA", "NH", "NC", "CA", "NY", "VA", "SC"],
            DType::Str,
            "state",
        ),
        Series::new(
            &["midwest", "east", "east", "south", "west", "east", "south", "south"],
            DType::Str,
            "region",
        ),
    ]);

    let joined = states
        .inner_join(&regions, &["state"])
        .filter(&[Filter::new("val1", Comparator::Greater, &10)])
        .arrange(&[Order::sort("region"), Order::rev_sort("val1")]);
    println!("{}", joined);

    let summary = joined
        .group_by(&["region"])
        .aggregate(&[(AggregationType::Sum, "val1"), (AggregationType::Mean, "val2")]);
    println!("{}", summary);

    println!("{}", joined.select(vec!["val1", "val2"]).describe());
}
