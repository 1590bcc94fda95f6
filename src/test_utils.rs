//! Sample frames shared by the unit tests.

use element::DType;
use frame::DataFrame;
use series::Series;

/// Four rows of every type: `A` strings, `B` ints, `C` floats, `D` bools.
pub fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(&["a", "k", "k", "a"], DType::Str, "A"),
        Series::new(&[4, 5, 4, 2], DType::Int, "B"),
        Series::new(&[5.1, 7.0, 6.0, 7.1], DType::Float, "C"),
        Series::new(&[true, true, true, false], DType::Bool, "D"),
    ])
}

/// Frames sharing a boolean key `D` and a differently-typed column `A`.
pub fn join_frames() -> (DataFrame, DataFrame) {
    let left = DataFrame::new(vec![
        Series::new(&[1, 2, 3, 1], DType::Int, "A"),
        Series::new(&[true, true, false, false], DType::Bool, "D"),
    ]);
    let right = DataFrame::new(vec![
        Series::new(&["1", "4", "2", "5"], DType::Str, "A"),
        Series::new(&[1, 2, 8, 9], DType::Int, "F"),
        Series::new(&[true, false, false, false], DType::Bool, "D"),
    ]);
    (left, right)
}

/// Ten rows over six distinct `(G, D)` pairs with weights `W`.
pub fn group_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            &["b", "a", "b", "a", "c", "a", "b", "c", "a", "c"],
            DType::Str,
            "G",
        ),
        Series::new(&[1, 2, 1, 1, 2, 2, 2, 2, 1, 1], DType::Int, "D"),
        Series::new(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            DType::Float,
            "W",
        ),
    ])
}
