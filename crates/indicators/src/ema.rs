//! Exponential moving average.

use signal_core::{Error, Result, SeriesF};

/// Exponential moving average with smoothing factor `2 / (span + 1)`.
///
/// Seeded with the first observation, so the column is fully defined
/// from position 0; unlike the simple moving average there is no
/// warm-up gap.
pub fn exponential_moving_average(series: &[f64], span: usize) -> Result<SeriesF> {
    Ok(ema_values(series, span)?.into_iter().map(Some).collect())
}

/// Raw EMA recurrence over a fully defined input.
///
/// `value[0] = series[0]`, then
/// `value[t] = alpha * series[t] + (1 - alpha) * value[t-1]`.
pub(crate) fn ema_values(series: &[f64], span: usize) -> Result<Vec<f64>> {
    if span == 0 {
        return Err(Error::computation("EMA", "span must be at least 1"));
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(series.len());
    if let Some((&first, rest)) = series.split_first() {
        let mut prev = first;
        out.push(prev);
        for &value in rest {
            prev = alpha * value + (1.0 - alpha) * prev;
            out.push(prev);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defined_from_position_zero() {
        let series = [100.0, 101.0, 102.0];
        let ema = exponential_moving_average(&series, 5).unwrap();
        assert_eq!(ema.len(), 3);
        assert!(ema.iter().all(|v| v.is_some()));
        assert_relative_eq!(ema[0].unwrap(), 100.0);
    }

    #[test]
    fn test_recurrence_against_hand_computed_sequence() {
        // Ten points, span 5, alpha = 2/6.
        let series = [10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0, 12.0, 13.0, 12.0];
        let alpha = 2.0 / 6.0;

        let ema = exponential_moving_average(&series, 5).unwrap();

        let mut expected = series[0];
        assert_relative_eq!(ema[0].unwrap(), expected);
        for t in 1..series.len() {
            expected = alpha * series[t] + (1.0 - alpha) * expected;
            assert_relative_eq!(ema[t].unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_series_stays_constant() {
        let series = [42.0; 8];
        let ema = exponential_moving_average(&series, 10).unwrap();
        for value in ema {
            assert_relative_eq!(value.unwrap(), 42.0);
        }
    }

    #[test]
    fn test_zero_span_rejected() {
        assert!(exponential_moving_average(&[1.0], 0).is_err());
    }
}
