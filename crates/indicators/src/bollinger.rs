//! Bollinger bands.

use signal_core::{Error, Result, SeriesF};
use statrs::statistics::Statistics;

/// Bollinger band output.
///
/// The middle band is the rolling mean the bands are anchored on; it is
/// a computation artifact the pipeline drops before emission.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    /// Rolling mean (dropped before emission).
    pub middle: SeriesF,
    /// Middle plus `k` standard deviations.
    pub upper: SeriesF,
    /// Middle minus `k` standard deviations.
    pub lower: SeriesF,
}

/// Bollinger bands: rolling mean ± `k` rolling sample standard
/// deviations over the same window. All three columns share the simple
/// moving average's undefined region.
pub fn bollinger_bands(series: &[f64], window: usize, k: f64) -> Result<BollingerSeries> {
    // Sample standard deviation needs two observations.
    if window < 2 {
        return Err(Error::computation(
            "Bollinger",
            "window must be at least 2",
        ));
    }

    let n = series.len();
    let mut middle = vec![None; n];
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    for t in (window - 1)..n {
        let slice = &series[t + 1 - window..=t];
        let mean = slice.mean();
        let std_dev = slice.std_dev();
        middle[t] = Some(mean);
        upper[t] = Some(mean + k * std_dev);
        lower[t] = Some(mean - k * std_dev);
    }

    Ok(BollingerSeries {
        middle,
        upper,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_undefined_region_matches_window() {
        let series: Vec<f64> = (0..10).map(|t| 100.0 + t as f64).collect();
        let bands = bollinger_bands(&series, 5, 2.0).unwrap();

        for t in 0..4 {
            assert_eq!(bands.middle[t], None);
            assert_eq!(bands.upper[t], None);
            assert_eq!(bands.lower[t], None);
        }
        assert!(bands.middle[4..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_known_window() {
        // Window [2, 4, 4, 4, 6]: mean 4, sample std sqrt(8/4) = sqrt(2).
        let series = [2.0, 4.0, 4.0, 4.0, 6.0];
        let bands = bollinger_bands(&series, 5, 2.0).unwrap();

        let std_dev = 2.0_f64.sqrt();
        assert_relative_eq!(bands.middle[4].unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(bands.upper[4].unwrap(), 4.0 + 2.0 * std_dev, epsilon = 1e-12);
        assert_relative_eq!(bands.lower[4].unwrap(), 4.0 - 2.0 * std_dev, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_window_has_zero_width() {
        let series = [5.0; 6];
        let bands = bollinger_bands(&series, 4, 2.0).unwrap();
        for t in 3..6 {
            assert_relative_eq!(bands.upper[t].unwrap(), 5.0);
            assert_relative_eq!(bands.lower[t].unwrap(), 5.0);
        }
    }

    #[test]
    fn test_degenerate_window_rejected() {
        assert!(bollinger_bands(&[1.0, 2.0], 1, 2.0).is_err());
    }
}
