//! Series wrapper memoizing scalar reductions.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Mutex;

use error::*;
use series::Series;

/// Immutable series wrapper that memoizes its scalar reductions. The wrapped series is reachable
/// only through shared references, so cached results never go stale.
#[derive(Debug)]
pub struct CachedSeries {
    series: Series,
    cache: Mutex<HashMap<String, f64>>,
}

impl CachedSeries {
    /// Wraps `series`.
    pub fn new(series: Series) -> CachedSeries {
        CachedSeries {
            series,
            cache: Mutex::new(HashMap::new()),
        }
    }
    /// Unwraps the series, dropping the cache.
    pub fn into_inner(self) -> Series {
        self.series
    }

    fn lookup(&self, key: &str) -> Result<f64> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .get(key)
            .cloned()
            .ok_or_else(|| TabulaError::CacheMiss(key.to_string()))
    }
    fn memoized<F>(&self, key: String, compute: F) -> f64
    where
        F: FnOnce(&Series) -> f64,
    {
        match self.lookup(&key) {
            Ok(value) => value,
            Err(_) => {
                trace!("series cache miss: {}", key);
                let value = compute(&self.series);
                self.cache
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .insert(key, value);
                value
            }
        }
    }

    /// Memoized [sum](../series/struct.Series.html#method.sum).
    pub fn sum(&self) -> f64 {
        self.memoized("sum".to_string(), Series::sum)
    }
    /// Memoized [mean](../series/struct.Series.html#method.mean).
    pub fn mean(&self) -> f64 {
        self.memoized("mean".to_string(), Series::mean)
    }
    /// Memoized [stddev](../series/struct.Series.html#method.stddev).
    pub fn stddev(&self) -> f64 {
        self.memoized("stddev".to_string(), Series::stddev)
    }
    /// Memoized [median](../series/struct.Series.html#method.median).
    pub fn median(&self) -> f64 {
        self.memoized("median".to_string(), Series::median)
    }
    /// Memoized [min](../series/struct.Series.html#method.min).
    pub fn min(&self) -> f64 {
        self.memoized("min".to_string(), Series::min)
    }
    /// Memoized [max](../series/struct.Series.html#method.max).
    pub fn max(&self) -> f64 {
        self.memoized("max".to_string(), Series::max)
    }
    /// Memoized [prod](../series/struct.Series.html#method.prod).
    pub fn prod(&self) -> f64 {
        self.memoized("prod".to_string(), Series::prod)
    }
    /// Memoized [quantile](../series/struct.Series.html#method.quantile).
    pub fn quantile(&self, p: f64) -> f64 {
        self.memoized(format!("quantile:{}", p.to_bits()), |s| s.quantile(p))
    }
    /// Drops all memoized results.
    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
    /// Number of memoized results.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Deref for CachedSeries {
    type Target = Series;
    fn deref(&self) -> &Series {
        &self.series
    }
}

impl Clone for CachedSeries {
    fn clone(&self) -> CachedSeries {
        CachedSeries::new(self.series.clone())
    }
}

impl From<Series> for CachedSeries {
    fn from(series: Series) -> CachedSeries {
        CachedSeries::new(series)
    }
}

impl fmt::Display for CachedSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.series, f)
    }
}
