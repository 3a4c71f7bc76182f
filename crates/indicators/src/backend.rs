//! Computation strategy selection for the indicator library.
//!
//! Two strategies exist. [`ReferenceBackend`] recomputes each window
//! directly and is always available. [`AcceleratedBackend`] (cargo
//! feature `accelerated`) computes the windowed indicators in a single
//! pass over rolling moments. The recurrence-shaped indicators (EMA,
//! RSI, MACD, OBV) have no distinct accelerated form and share the
//! reference implementation, so for every indicator both strategies
//! mark exactly the same positions undefined; where both are defined the
//! values agree within a small floating tolerance.

use signal_core::{BackendKind, Result, SeriesF};
use tracing::debug;

use crate::bollinger::{self, BollingerSeries};
use crate::ema;
use crate::macd::{self, MacdSeries};
use crate::obv;
use crate::rsi;
use crate::sma;

/// A computation strategy for the full indicator set.
pub trait IndicatorBackend: Send + Sync {
    /// Strategy name, surfaced in diagnostics.
    fn name(&self) -> &'static str;

    /// Simple moving average.
    fn sma(&self, series: &[f64], window: usize) -> Result<SeriesF>;

    /// Exponential moving average.
    fn ema(&self, series: &[f64], span: usize) -> Result<SeriesF>;

    /// Relative Strength Index.
    fn rsi(&self, series: &[f64], period: usize) -> Result<SeriesF>;

    /// MACD line and signal line.
    fn macd(&self, series: &[f64], fast: usize, slow: usize, signal: usize)
        -> Result<MacdSeries>;

    /// Bollinger bands.
    fn bollinger(&self, series: &[f64], window: usize, k: f64) -> Result<BollingerSeries>;

    /// On-Balance Volume.
    fn obv(&self, close: &[f64], volume: &[f64]) -> Result<SeriesF>;
}

/// Default strategy: direct per-window recomputation.
pub struct ReferenceBackend;

impl IndicatorBackend for ReferenceBackend {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn sma(&self, series: &[f64], window: usize) -> Result<SeriesF> {
        sma::simple_moving_average(series, window)
    }

    fn ema(&self, series: &[f64], span: usize) -> Result<SeriesF> {
        ema::exponential_moving_average(series, span)
    }

    fn rsi(&self, series: &[f64], period: usize) -> Result<SeriesF> {
        rsi::relative_strength_index(series, period)
    }

    fn macd(
        &self,
        series: &[f64],
        fast: usize,
        slow: usize,
        signal: usize,
    ) -> Result<MacdSeries> {
        macd::macd(series, fast, slow, signal)
    }

    fn bollinger(&self, series: &[f64], window: usize, k: f64) -> Result<BollingerSeries> {
        bollinger::bollinger_bands(series, window, k)
    }

    fn obv(&self, close: &[f64], volume: &[f64]) -> Result<SeriesF> {
        obv::on_balance_volume(close, volume)
    }
}

/// Accelerated strategy: single-pass rolling moments for the windowed
/// indicators, shared implementations for the recurrence ones.
#[cfg(feature = "accelerated")]
pub struct AcceleratedBackend;

#[cfg(feature = "accelerated")]
impl IndicatorBackend for AcceleratedBackend {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn sma(&self, series: &[f64], window: usize) -> Result<SeriesF> {
        if window == 0 {
            return Err(signal_core::Error::computation(
                "SMA",
                "window must be at least 1",
            ));
        }

        let mut out = vec![None; series.len()];
        let mut sum = 0.0;
        for (t, &value) in series.iter().enumerate() {
            sum += value;
            if t >= window {
                sum -= series[t - window];
            }
            if t + 1 >= window {
                out[t] = Some(sum / window as f64);
            }
        }
        Ok(out)
    }

    fn ema(&self, series: &[f64], span: usize) -> Result<SeriesF> {
        ema::exponential_moving_average(series, span)
    }

    fn rsi(&self, series: &[f64], period: usize) -> Result<SeriesF> {
        rsi::relative_strength_index(series, period)
    }

    fn macd(
        &self,
        series: &[f64],
        fast: usize,
        slow: usize,
        signal: usize,
    ) -> Result<MacdSeries> {
        macd::macd(series, fast, slow, signal)
    }

    fn bollinger(&self, series: &[f64], window: usize, k: f64) -> Result<BollingerSeries> {
        if window < 2 {
            return Err(signal_core::Error::computation(
                "Bollinger",
                "window must be at least 2",
            ));
        }

        let n = series.len();
        let mut middle = vec![None; n];
        let mut upper = vec![None; n];
        let mut lower = vec![None; n];

        let w = window as f64;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for (t, &value) in series.iter().enumerate() {
            sum += value;
            sum_sq += value * value;
            if t >= window {
                let old = series[t - window];
                sum -= old;
                sum_sq -= old * old;
            }
            if t + 1 >= window {
                let mean = sum / w;
                // Sample variance; rounding can push it slightly negative.
                let variance = ((sum_sq - sum * sum / w) / (w - 1.0)).max(0.0);
                let std_dev = variance.sqrt();
                middle[t] = Some(mean);
                upper[t] = Some(mean + k * std_dev);
                lower[t] = Some(mean - k * std_dev);
            }
        }

        Ok(BollingerSeries {
            middle,
            upper,
            lower,
        })
    }

    fn obv(&self, close: &[f64], volume: &[f64]) -> Result<SeriesF> {
        obv::on_balance_volume(close, volume)
    }
}

/// A resolved strategy plus any fallback note from the probe.
pub struct ResolvedBackend {
    /// The strategy the pipeline will run with.
    pub backend: Box<dyn IndicatorBackend>,
    /// Set when the requested strategy was unavailable.
    pub fallback: Option<String>,
}

/// One-time capability probe, run at pipeline construction.
///
/// Requesting the accelerated strategy without the compiled feature
/// resolves to the reference strategy and records a fallback note; this
/// is a diagnostic, not an error.
pub fn resolve(kind: BackendKind) -> ResolvedBackend {
    match kind {
        BackendKind::Reference => {
            debug!(backend = "reference", "indicator backend resolved");
            ResolvedBackend {
                backend: Box::new(ReferenceBackend),
                fallback: None,
            }
        }
        #[cfg(feature = "accelerated")]
        BackendKind::Accelerated => {
            debug!(backend = "accelerated", "indicator backend resolved");
            ResolvedBackend {
                backend: Box::new(AcceleratedBackend),
                fallback: None,
            }
        }
        #[cfg(not(feature = "accelerated"))]
        BackendKind::Accelerated => {
            tracing::warn!("accelerated backend not compiled in, falling back to reference");
            ResolvedBackend {
                backend: Box::new(ReferenceBackend),
                fallback: Some(
                    "accelerated backend unavailable, using reference".to_string(),
                ),
            }
        }
    }
}
