/*!
Rolling-window views over a series.

A [RollingWindow](struct.RollingWindow.html) with window size `w` and minimum period count `m`
sees, at position `i`, the values `[max(0, i + 1 - w), i + 1)`. The window is valid when it holds at
least `m` values. Every reduction produces a series of the same length as the input with NA at
invalid positions.
*/

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use element::{DType, Element};
use error::*;
use series::{Series, SeriesData};
use stats::quantile_sorted;

/// Rolling-window view over a series.
#[derive(Debug, Clone)]
pub struct RollingWindow<'a> {
    series: &'a Series,
    window: usize,
    min_periods: usize,
}

impl Series {
    /// Rolling-window view with window size `window` and minimum period count `min_periods`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn rolling(&self, window: usize, min_periods: usize) -> RollingWindow<'_> {
        RollingWindow::new(self, window, min_periods)
    }
}

/// Iterator over the valid windows of a [RollingWindow](struct.RollingWindow.html), yielding each
/// window's right-edge position and its values.
pub struct Windows<'a> {
    view: &'a RollingWindow<'a>,
    next: usize,
}
impl<'a> Iterator for Windows<'a> {
    type Item = (usize, Series);

    fn next(&mut self) -> Option<(usize, Series)> {
        while self.next < self.view.series.len() {
            let idx = self.next;
            self.next += 1;
            if let Some(window) = self.view.window_at(idx) {
                return Some((idx, window));
            }
        }
        None
    }
}

impl<'a> RollingWindow<'a> {
    /// Creates a rolling view over `series`.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn new(series: &'a Series, window: usize, min_periods: usize) -> RollingWindow<'a> {
        assert!(window > 0, "rolling window size must be positive");
        RollingWindow {
            series,
            window,
            min_periods,
        }
    }
    /// Window size.
    pub fn window(&self) -> usize {
        self.window
    }
    /// Minimum number of values in a valid window.
    pub fn min_periods(&self) -> usize {
        self.min_periods
    }
    /// Values of the window ending at `idx`, or `None` if that window is invalid.
    pub fn window_at(&self, idx: usize) -> Option<Series> {
        let end = idx + 1;
        let start = end.saturating_sub(self.window);
        if end - start < self.min_periods || end > self.series.len() {
            return None;
        }
        Some(self.series.slice(start, end))
    }
    /// Iterator over the valid windows, starting at position `max(min_periods, 1) - 1`.
    pub fn windows(&self) -> Windows<'_> {
        Windows {
            view: self,
            next: self.min_periods.max(1) - 1,
        }
    }

    /// Applies `f` to each valid window and its right-edge position, building a series of type
    /// `dtype`. Invalid windows produce NA.
    pub fn apply<F>(&self, f: F, dtype: DType) -> Series
    where
        F: Fn(&Series, usize) -> Element,
    {
        if self.series.err().is_some() {
            return self.series.clone();
        }
        let mut data = SeriesData::with_capacity(dtype, self.series.len());
        for idx in 0..self.series.len() {
            match self.window_at(idx) {
                Some(window) => data.push(&f(&window, idx)),
                None => data.push(&Element::na(dtype)),
            }
        }
        Series::from_data(data, self.series.name())
    }
    fn reduce<F>(&self, f: F) -> Series
    where
        F: Fn(&Series) -> f64,
    {
        self.apply(|window, _| Element::from(f(window)), DType::Float)
    }

    /// Rolling maximum.
    pub fn max(&self) -> Series {
        self.reduce(Series::max)
    }
    /// Rolling minimum.
    pub fn min(&self) -> Series {
        self.reduce(Series::min)
    }
    /// Rolling mean.
    pub fn mean(&self) -> Series {
        self.reduce(Series::mean)
    }
    /// Rolling median.
    pub fn median(&self) -> Series {
        self.reduce(Series::median)
    }
    /// Rolling sample standard deviation.
    pub fn stddev(&self) -> Series {
        self.reduce(Series::stddev)
    }
    /// Rolling quantile `p`.
    pub fn quantile(&self, p: f64) -> Series {
        self.reduce(|window| {
            let mut values = window.finite_values();
            values.sort_by(::permute::sort_f64);
            quantile_sorted(&values, p)
        })
    }
    /// Rolling weighted sum. `weights` must hold exactly `window` values; a partial window of
    /// length `L` uses the last `L` weights. Windows containing NA values are NA.
    pub fn mean_by_weights(&self, weights: &[f64]) -> Series {
        if weights.len() != self.window {
            return self.series.errored(TabulaError::DimensionMismatch(format!(
                "{} weights given for window size {}",
                weights.len(),
                self.window
            )));
        }
        self.reduce(|window| {
            let values = window.float();
            let offset = weights.len() - values.len();
            values
                .iter()
                .zip(weights[offset..].iter())
                .map(|(v, w)| v * w)
                .sum()
        })
    }

    /// Cache-enabled version of this view.
    pub fn cached(self) -> CachedRollingWindow<'a> {
        CachedRollingWindow {
            view: self,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    reduction: &'static str,
    params: Vec<u64>,
}

/// A rolling view that memoizes every reduction. Repeated calls with the same parameters return
/// the same series object.
#[derive(Debug)]
pub struct CachedRollingWindow<'a> {
    view: RollingWindow<'a>,
    cache: Mutex<HashMap<CacheKey, Arc<Series>>>,
}

impl<'a> CachedRollingWindow<'a> {
    fn memoized<F>(&self, reduction: &'static str, params: &[f64], compute: F) -> Arc<Series>
    where
        F: FnOnce(&RollingWindow<'a>) -> Series,
    {
        let key = CacheKey {
            reduction,
            params: params.iter().map(|p| p.to_bits()).collect(),
        };
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(series) = cache.get(&key) {
            trace!("rolling cache hit: {}", reduction);
            return Arc::clone(series);
        }
        trace!("rolling cache miss: {}", reduction);
        let series = Arc::new(compute(&self.view));
        cache.insert(key, Arc::clone(&series));
        series
    }

    /// The underlying uncached view.
    pub fn view(&self) -> &RollingWindow<'a> {
        &self.view
    }
    /// Rolling maximum.
    pub fn max(&self) -> Arc<Series> {
        self.memoized("max", &[], RollingWindow::max)
    }
    /// Rolling minimum.
    pub fn min(&self) -> Arc<Series> {
        self.memoized("min", &[], RollingWindow::min)
    }
    /// Rolling mean.
    pub fn mean(&self) -> Arc<Series> {
        self.memoized("mean", &[], RollingWindow::mean)
    }
    /// Rolling median.
    pub fn median(&self) -> Arc<Series> {
        self.memoized("median", &[], RollingWindow::median)
    }
    /// Rolling sample standard deviation.
    pub fn stddev(&self) -> Arc<Series> {
        self.memoized("stddev", &[], RollingWindow::stddev)
    }
    /// Rolling quantile `p`.
    pub fn quantile(&self, p: f64) -> Arc<Series> {
        self.memoized("quantile", &[p], |view| view.quantile(p))
    }
    /// Rolling weighted sum.
    pub fn mean_by_weights(&self, weights: &[f64]) -> Arc<Series> {
        self.memoized("mean_by_weights", weights, |view| {
            view.mean_by_weights(weights)
        })
    }
    /// Drops all memoized results.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
