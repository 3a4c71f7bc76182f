//! Moving Average Convergence Divergence.

use signal_core::{Result, SeriesF};

use crate::ema::ema_values;

/// MACD output pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    /// MACD line: fast EMA minus slow EMA.
    pub line: SeriesF,
    /// Signal line: EMA of the MACD line.
    pub signal: SeriesF,
}

/// MACD line and signal line.
///
/// The signal line is the EMA of the already-computed MACD line, not an
/// independently recomputed average. Both columns inherit the EMA
/// seeding rule and are fully defined from position 0.
pub fn macd(series: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdSeries> {
    let fast_ema = ema_values(series, fast)?;
    let slow_ema = ema_values(series, slow)?;

    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = ema_values(&line, signal)?;

    Ok(MacdSeries {
        line: line.into_iter().map(Some).collect(),
        signal: signal_line.into_iter().map(Some).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ema::exponential_moving_average;
    use approx::assert_relative_eq;

    fn sample_series() -> Vec<f64> {
        (0..40)
            .map(|t| 100.0 + (t as f64) * 0.5 + if t % 2 == 0 { 1.0 } else { -1.0 })
            .collect()
    }

    #[test]
    fn test_defined_from_position_zero() {
        let out = macd(&sample_series(), 12, 26, 9).unwrap();
        assert!(out.line.iter().all(|v| v.is_some()));
        assert!(out.signal.iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_line_is_ema_difference() {
        let series = sample_series();
        let out = macd(&series, 12, 26, 9).unwrap();

        let fast = exponential_moving_average(&series, 12).unwrap();
        let slow = exponential_moving_average(&series, 26).unwrap();
        for t in 0..series.len() {
            assert_relative_eq!(
                out.line[t].unwrap(),
                fast[t].unwrap() - slow[t].unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_signal_is_ema_of_line() {
        // Composition law: applying the EMA to the extracted line must
        // reproduce the signal column exactly.
        let out = macd(&sample_series(), 12, 26, 9).unwrap();

        let line: Vec<f64> = out.line.iter().map(|v| v.unwrap()).collect();
        let recomputed = exponential_moving_average(&line, 9).unwrap();
        assert_eq!(out.signal, recomputed);
    }

    #[test]
    fn test_zero_span_rejected() {
        assert!(macd(&sample_series(), 0, 26, 9).is_err());
        assert!(macd(&sample_series(), 12, 26, 0).is_err());
    }
}
