//! Simple moving average.

use signal_core::{Error, Result, SeriesF};

/// Simple moving average over a trailing window.
///
/// Position `t` holds the arithmetic mean of `series[t-window+1..=t]`;
/// positions before the window fills are undefined.
pub fn simple_moving_average(series: &[f64], window: usize) -> Result<SeriesF> {
    if window == 0 {
        return Err(Error::computation("SMA", "window must be at least 1"));
    }

    let mut out = vec![None; series.len()];
    for t in (window - 1)..series.len() {
        let sum: f64 = series[t + 1 - window..=t].iter().sum();
        out[t] = Some(sum / window as f64);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_mean() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sma = simple_moving_average(&series, 3).unwrap();

        assert_eq!(sma[0], None);
        assert_eq!(sma[1], None);
        assert_relative_eq!(sma[2].unwrap(), 2.0);
        assert_relative_eq!(sma[3].unwrap(), 3.0);
        assert_relative_eq!(sma[4].unwrap(), 4.0);
    }

    #[test]
    fn test_window_one_is_identity() {
        let series = [10.0, 20.0, 30.0];
        let sma = simple_moving_average(&series, 1).unwrap();
        assert_eq!(sma, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn test_window_longer_than_series() {
        let series = [1.0, 2.0];
        let sma = simple_moving_average(&series, 5).unwrap();
        assert_eq!(sma, vec![None, None]);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(simple_moving_average(&[1.0], 0).is_err());
    }
}
