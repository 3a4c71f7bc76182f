//! Base-transform, lag and interaction stages.

use signal_core::SeriesF;

/// Close-to-close daily returns; undefined at position 0.
pub fn daily_returns(close: &[f64]) -> SeriesF {
    let mut out = vec![None; close.len()];
    for t in 1..close.len() {
        out[t] = Some(close[t] / close[t - 1] - 1.0);
    }
    out
}

/// Shift a raw column forward by `n` positions: the value at `t` is the
/// source value at `t - n`. The first `n` positions are undefined.
pub fn lag_values(series: &[f64], n: usize) -> SeriesF {
    let mut out = vec![None; series.len()];
    for t in n..series.len() {
        out[t] = Some(series[t - n]);
    }
    out
}

/// Shift an already-derived column forward by `n` positions, carrying
/// its undefined region along.
pub fn lag(series: &SeriesF, n: usize) -> SeriesF {
    let mut out = vec![None; series.len()];
    for t in n..series.len() {
        out[t] = series[t - n];
    }
    out
}

/// Element-wise ratio of a raw column to a derived column.
///
/// Defined exactly where the denominator is defined; a zero denominator
/// follows IEEE division and produces an infinity, not a hole.
pub fn ratio(numerator: &[f64], denominator: &SeriesF) -> SeriesF {
    numerator
        .iter()
        .zip(denominator)
        .map(|(n, d)| d.map(|d| n / d))
        .collect()
}
