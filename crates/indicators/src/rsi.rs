//! Relative Strength Index with Wilder's smoothing.

use signal_core::{Error, Result, SeriesF};

/// Relative Strength Index over close-to-close deltas.
///
/// Gains and losses are smoothed with factor `1 / period` (Wilder's
/// convention, a center-of-mass of `period - 1`), seeded with the first
/// defined delta. Position 0 has no delta and is undefined.
///
/// Division is plain IEEE arithmetic: a zero loss average with gains
/// present saturates the index to 100, and an all-flat prefix yields
/// NaN from 0/0. Neither case is special-cased here.
pub fn relative_strength_index(series: &[f64], period: usize) -> Result<SeriesF> {
    if period == 0 {
        return Err(Error::computation("RSI", "period must be at least 1"));
    }

    let n = series.len();
    let mut out = vec![None; n];
    if n < 2 {
        return Ok(out);
    }

    let alpha = 1.0 / period as f64;
    let first_delta = series[1] - series[0];
    let mut avg_gain = first_delta.max(0.0);
    let mut avg_loss = (-first_delta).max(0.0);
    out[1] = Some(index_value(avg_gain, avg_loss));

    for t in 2..n {
        let delta = series[t] - series[t - 1];
        avg_gain = alpha * delta.max(0.0) + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * (-delta).max(0.0) + (1.0 - alpha) * avg_loss;
        out[t] = Some(index_value(avg_gain, avg_loss));
    }
    Ok(out)
}

fn index_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_undefined_only_at_position_zero() {
        let series = [100.0, 101.0, 100.5, 102.0];
        let rsi = relative_strength_index(&series, 14).unwrap();
        assert_eq!(rsi[0], None);
        assert!(rsi[1..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_all_gains_saturate_to_100() {
        let series = [100.0, 101.0, 102.0, 103.0, 104.0];
        let rsi = relative_strength_index(&series, 14).unwrap();
        for value in &rsi[1..] {
            assert_relative_eq!(value.unwrap(), 100.0);
        }
    }

    #[test]
    fn test_all_losses_pin_to_zero() {
        let series = [104.0, 103.0, 102.0, 101.0, 100.0];
        let rsi = relative_strength_index(&series, 14).unwrap();
        for value in &rsi[1..] {
            assert_relative_eq!(value.unwrap(), 0.0);
        }
    }

    #[test]
    fn test_flat_prefix_is_nan() {
        // 0/0 from a constant series propagates as NaN, not a value.
        let series = [100.0, 100.0, 100.0];
        let rsi = relative_strength_index(&series, 14).unwrap();
        assert!(rsi[1].unwrap().is_nan());
        assert!(rsi[2].unwrap().is_nan());
    }

    #[test]
    fn test_wilder_smoothing_recurrence() {
        let series = [100.0, 102.0, 101.0, 103.0, 102.5];
        let period = 3;
        let alpha = 1.0 / period as f64;

        let rsi = relative_strength_index(&series, period).unwrap();

        // Recompute by hand.
        let mut avg_gain = 2.0;
        let mut avg_loss = 0.0;
        let deltas = [-1.0, 2.0, -0.5];
        let mut expected = Vec::new();
        expected.push(100.0 - 100.0 / (1.0 + avg_gain / avg_loss));
        for delta in deltas {
            avg_gain = alpha * f64::max(delta, 0.0) + (1.0 - alpha) * avg_gain;
            avg_loss = alpha * f64::max(-delta, 0.0) + (1.0 - alpha) * avg_loss;
            expected.push(100.0 - 100.0 / (1.0 + avg_gain / avg_loss));
        }

        for (t, want) in expected.iter().enumerate() {
            assert_relative_eq!(rsi[t + 1].unwrap(), *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(relative_strength_index(&[1.0, 2.0], 0).is_err());
    }
}
