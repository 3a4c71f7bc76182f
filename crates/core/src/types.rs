//! Core data types for the signal-features engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An indicator or feature column aligned 1:1 with the input series.
///
/// `None` marks a position where the value is not defined yet (warm-up).
/// Computed floating results, including infinities from zero divisors,
/// stay inside `Some`.
pub type SeriesF = Vec<Option<f64>>;

/// A single daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Bar date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl DailyBar {
    /// Check bar validity: finite positive prices, finite non-negative
    /// volume. NaN is the missing-value spelling at this boundary.
    pub fn is_valid(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite() && *p > 0.0)
            && self.volume.is_finite()
            && self.volume >= 0.0
    }
}

/// A cleaned, chronologically sorted daily bar series.
///
/// Construction performs the cheap schema check the pipeline assumes:
/// non-empty, strictly increasing duplicate-free dates, valid bars.
/// The series is read-only once built; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    bars: Vec<DailyBar>,
}

impl BarSeries {
    /// Build a series from pre-assembled bars, running the schema check.
    pub fn new(bars: Vec<DailyBar>) -> Result<Self> {
        if bars.is_empty() {
            return Err(Error::input("bar series is empty"));
        }
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(Error::input(format!(
                "dates not strictly increasing at {}",
                pair[1].date
            )));
        }
        if let Some(bar) = bars.iter().find(|b| !b.is_valid()) {
            return Err(Error::input(format!(
                "invalid bar at {}: prices must be finite and positive, volume finite and non-negative",
                bar.date
            )));
        }
        Ok(Self { bars })
    }

    /// Build a series from the upstream columnar table contract.
    ///
    /// Every column must carry exactly one entry per date; a short or
    /// absent column fails the schema check.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self> {
        let n = dates.len();
        let lengths = [
            ("Open", open.len()),
            ("High", high.len()),
            ("Low", low.len()),
            ("Close", close.len()),
            ("Volume", volume.len()),
        ];
        if let Some((name, len)) = lengths.iter().find(|(_, len)| *len != n) {
            return Err(Error::input(format!(
                "column {name} has {len} rows, expected {n}"
            )));
        }

        let bars = dates
            .into_iter()
            .zip(open)
            .zip(high)
            .zip(low)
            .zip(close)
            .zip(volume)
            .map(|(((((date, open), high), low), close), volume)| DailyBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            })
            .collect();
        Self::new(bars)
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series is empty (never true for a constructed series).
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// All bars in chronological order.
    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    /// Bar dates as an owned column.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Closing prices as an owned column.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes as an owned column.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

/// One dense row of the derived feature table.
///
/// The column set is fixed and statically declared; [`FeatureRow::values`]
/// lists the features in declared column order. Display labels carrying
/// the configured parameters come from
/// [`crate::config::IndicatorConfig::column_labels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Row date.
    pub date: NaiveDate,
    /// Close-to-close daily return.
    pub daily_return: f64,
    /// Simple moving average, fast window.
    pub sma_fast: f64,
    /// Simple moving average, slow window.
    pub sma_slow: f64,
    /// Exponential moving average, fast span.
    pub ema_fast: f64,
    /// Exponential moving average, slow span.
    pub ema_slow: f64,
    /// Relative Strength Index.
    pub rsi: f64,
    /// MACD line.
    pub macd: f64,
    /// MACD signal line.
    pub macd_signal: f64,
    /// Upper Bollinger band.
    pub bollinger_upper: f64,
    /// Lower Bollinger band.
    pub bollinger_lower: f64,
    /// On-Balance Volume.
    pub obv: f64,
    /// Close, lagged one day.
    pub close_lag_1: f64,
    /// Close, lagged two days.
    pub close_lag_2: f64,
    /// Close, lagged three days.
    pub close_lag_3: f64,
    /// Daily return, lagged one day.
    pub return_lag_1: f64,
    /// Volume, lagged one day.
    pub volume_lag_1: f64,
    /// Close divided by the slow simple moving average.
    pub price_vs_sma: f64,
    /// Volume divided by its rolling average.
    pub volume_vs_avg_volume: f64,
}

impl FeatureRow {
    /// Number of feature columns (the date index excluded).
    pub const COLUMN_COUNT: usize = 18;

    /// Feature values in declared column order.
    pub fn values(&self) -> [f64; Self::COLUMN_COUNT] {
        [
            self.daily_return,
            self.sma_fast,
            self.sma_slow,
            self.ema_fast,
            self.ema_slow,
            self.rsi,
            self.macd,
            self.macd_signal,
            self.bollinger_upper,
            self.bollinger_lower,
            self.obv,
            self.close_lag_1,
            self.close_lag_2,
            self.close_lag_3,
            self.return_lag_1,
            self.volume_lag_1,
            self.price_vs_sma,
            self.volume_vs_avg_volume,
        ]
    }
}

/// Dense feature table: one row per input date surviving trimming.
///
/// Rectangular by construction; every retained row has every column
/// defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Wrap assembled rows.
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in chronological order.
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }
}
