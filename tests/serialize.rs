extern crate tabula;
#[macro_use]
extern crate serde_json;

use tabula::{DType, DataFrame, LoadOptions, Series};

mod common;

#[test]
fn csv_serialize_test() {
    let df = common::load_csv_file("sample1.csv", &LoadOptions::default());
    let df_json: serde_json::Value =
        serde_json::from_slice(&serde_json::to_vec(&df).unwrap()).unwrap();

    assert_eq!(
        df_json,
        json![{
            "state": ["OH", "PA", "NH", "NC", "CA", "NY", "VA", "SC"],
            "val1": [4, 54, 23, 21, 85, 32, 44, 89],
            "val2": [3.2, null, 1.5, 12.25, null, 7.0, 0.5, 2.75]
        }]
    );
}

#[test]
fn series_serialize_test() {
    let s = Series::new(&[Some(true), None, Some(false)], DType::Bool, "flag");
    assert_eq!(serde_json::to_value(&s).unwrap(), json![[true, null, false]]);

    let df = DataFrame::new(vec![s, Series::new(&["x", "NaN", "z"], DType::Str, "label")]);
    assert_eq!(
        serde_json::to_value(&df).unwrap(),
        json![{"flag": [true, null, false], "label": ["x", null, "z"]}]
    );
    assert_eq!(serde_json::to_value(&DType::Float).unwrap(), json!["Float"]);
}
