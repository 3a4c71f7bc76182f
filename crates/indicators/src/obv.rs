//! On-Balance Volume.

use signal_core::{Error, Result, SeriesF};

/// On-Balance Volume: cumulative sum of signed volume.
///
/// Volume counts positive on an up close, negative on a down close, and
/// zero on an unchanged close. The first position carries no comparison
/// and contributes zero, so the column starts at 0 and is fully defined.
pub fn on_balance_volume(close: &[f64], volume: &[f64]) -> Result<SeriesF> {
    if close.len() != volume.len() {
        return Err(Error::computation(
            "OBV",
            format!(
                "close has {} rows but volume has {}",
                close.len(),
                volume.len()
            ),
        ));
    }

    let mut out = Vec::with_capacity(close.len());
    let mut cumulative = 0.0;
    for t in 0..close.len() {
        if t > 0 {
            if close[t] > close[t - 1] {
                cumulative += volume[t];
            } else if close[t] < close[t - 1] {
                cumulative -= volume[t];
            }
        }
        out.push(Some(cumulative));
    }
    Ok(out)
}
