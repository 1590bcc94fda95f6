/*!
Statistical reductions over series.

Numeric reductions operate on the *finite view* of a series: its floating-point projection with NA
and infinite values removed. Reductions over an empty finite view return `NaN`.
*/
use std::f64;

use element::DType;
use permute::sort_f64;
use series::{Series, SeriesData};
use value::Value;

/// Linear-interpolation quantile of sorted values; `NaN` for empty input or `p` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || !(p >= 0.0 && p <= 1.0) {
        return f64::NAN;
    }
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        f64::NAN
    } else if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

fn stddev_of(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

impl Series {
    /// Floating-point projection with NA and infinite values removed.
    pub fn finite_values(&self) -> Vec<f64> {
        self.float().into_iter().filter(|v| v.is_finite()).collect()
    }
    fn sorted_finite(&self) -> Vec<f64> {
        let mut values = self.finite_values();
        values.sort_by(sort_f64);
        values
    }

    /// Sum of the finite values.
    pub fn sum(&self) -> f64 {
        let values = self.finite_values();
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum()
    }
    /// Arithmetic mean of the finite values.
    pub fn mean(&self) -> f64 {
        let values = self.finite_values();
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
    /// Sample standard deviation (`n - 1` denominator) of the finite values; `NaN` with fewer than
    /// two values.
    pub fn stddev(&self) -> f64 {
        stddev_of(&self.finite_values())
    }
    /// Median of the finite values.
    pub fn median(&self) -> f64 {
        median_sorted(&self.sorted_finite())
    }
    /// Quantile `p` of the finite values, interpolating linearly between the closest ranks.
    pub fn quantile(&self, p: f64) -> f64 {
        quantile_sorted(&self.sorted_finite(), p)
    }
    /// Smallest finite value.
    pub fn min(&self) -> f64 {
        self.finite_values().into_iter().fold(f64::NAN, f64::min)
    }
    /// Largest finite value.
    pub fn max(&self) -> f64 {
        self.finite_values().into_iter().fold(f64::NAN, f64::max)
    }
    /// Product of the finite values.
    pub fn prod(&self) -> f64 {
        let values = self.finite_values();
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().product()
    }
    /// Running product, as a floating-point series of the same length. NA and non-finite
    /// positions are NA and leave the running product unchanged.
    pub fn cumprod(&self) -> Series {
        if self.err().is_some() {
            return self.clone();
        }
        let mut acc = 1.0;
        let values = self
            .float()
            .into_iter()
            .map(|v| {
                if v.is_finite() {
                    acc *= v;
                    Value::Exists(acc)
                } else {
                    Value::Na
                }
            })
            .collect::<Vec<_>>();
        Series::new(&values, DType::Float, self.name())
    }
    /// Lexicographically smallest string; `""` for non-string series or when all values are NA.
    pub fn min_str(&self) -> String {
        match *self.data() {
            SeriesData::Str(ref d) => d
                .iter_existing()
                .map(|(_, s)| s)
                .min()
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
    /// Lexicographically largest string; `""` for non-string series or when all values are NA.
    pub fn max_str(&self) -> String {
        match *self.data() {
            SeriesData::Str(ref d) => d
                .iter_existing()
                .map(|(_, s)| s)
                .max()
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn reductions() {
        let s = Series::floats(&[
            Some(4.0),
            None,
            Some(1.0),
            Some(f64::INFINITY),
            Some(3.0),
            Some(2.0),
        ]);
        assert!(approx(s.sum(), 10.0));
        assert!(approx(s.mean(), 2.5));
        assert!(approx(s.median(), 2.5));
        assert!(approx(s.min(), 1.0));
        assert!(approx(s.max(), 4.0));
        assert!(approx(s.prod(), 24.0));
        assert!(approx(s.stddev(), (5.0f64 / 3.0).sqrt()));
        assert!(approx(s.quantile(0.0), 1.0));
        assert!(approx(s.quantile(0.5), 2.5));
        assert!(approx(s.quantile(0.25), 1.75));
        assert!(approx(s.quantile(1.0), 4.0));
        assert!(s.quantile(1.5).is_nan());
    }

    #[test]
    fn empty_view() {
        let s = Series::ints(&[None::<i64>, None]);
        assert!(s.sum().is_nan());
        assert!(s.mean().is_nan());
        assert!(s.median().is_nan());
        assert!(s.min().is_nan());
        assert!(s.stddev().is_nan());
        assert!(Series::ints(&[5]).stddev().is_nan());
    }

    #[test]
    fn cumulative_product() {
        let s = Series::new(&[Some(2), None, Some(3), Some(-1)], DType::Int, "x");
        let c = s.cumprod();
        assert_eq!(c.dtype(), DType::Float);
        assert_eq!(c.name(), "x");
        assert_eq!(c.records(), vec!["2.000000", "NaN", "6.000000", "-6.000000"]);
    }

    #[test]
    fn string_bounds() {
        let s = Series::strings(&["pear", "NaN", "apple", "fig"]);
        assert_eq!(s.min_str(), "apple");
        assert_eq!(s.max_str(), "pear");
        assert_eq!(Series::ints(&[1]).min_str(), "");
        // numeric strings still reduce numerically
        assert!(approx(Series::strings(&["1", "2.5", "x"]).sum(), 3.5));
    }
}
