//! Row trimming and warm-up accounting.

use chrono::NaiveDate;
use signal_core::{FeatureRow, FeatureTable, IndicatorConfig, SeriesF};

/// All derived columns, each aligned 1:1 with the input series.
///
/// `bollinger_middle` and `avg_volume` are computation artifacts:
/// earlier stages consume them, row assembly never reads them.
#[derive(Debug, Default)]
pub(crate) struct ColumnSet {
    pub daily_return: SeriesF,
    pub sma_fast: SeriesF,
    pub sma_slow: SeriesF,
    pub ema_fast: SeriesF,
    pub ema_slow: SeriesF,
    pub rsi: SeriesF,
    pub macd: SeriesF,
    pub macd_signal: SeriesF,
    pub bollinger_middle: SeriesF,
    pub bollinger_upper: SeriesF,
    pub bollinger_lower: SeriesF,
    pub obv: SeriesF,
    pub avg_volume: SeriesF,
    pub close_lag_1: SeriesF,
    pub close_lag_2: SeriesF,
    pub close_lag_3: SeriesF,
    pub return_lag_1: SeriesF,
    pub volume_lag_1: SeriesF,
    pub price_vs_sma: SeriesF,
    pub volume_vs_avg_volume: SeriesF,
}

/// Row counts observed by the trimming stage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrimStats {
    pub rows_examined: usize,
    pub rows_dropped: usize,
}

/// Assemble the dense table, dropping any row with an undefined cell
/// among the retained columns.
///
/// A NaN cell counts as undefined (it is the floating spelling of a
/// hole); infinite values are defined and survive.
pub(crate) fn assemble(dates: &[NaiveDate], columns: &ColumnSet) -> (FeatureTable, TrimStats) {
    let mut rows = Vec::with_capacity(dates.len());
    let mut dropped = 0usize;

    for (t, &date) in dates.iter().enumerate() {
        match build_row(date, t, columns) {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }

    let stats = TrimStats {
        rows_examined: dates.len(),
        rows_dropped: dropped,
    };
    (FeatureTable::new(rows), stats)
}

fn cell(series: &SeriesF, t: usize) -> Option<f64> {
    series.get(t).copied().flatten().filter(|v| !v.is_nan())
}

fn build_row(date: NaiveDate, t: usize, c: &ColumnSet) -> Option<FeatureRow> {
    Some(FeatureRow {
        date,
        daily_return: cell(&c.daily_return, t)?,
        sma_fast: cell(&c.sma_fast, t)?,
        sma_slow: cell(&c.sma_slow, t)?,
        ema_fast: cell(&c.ema_fast, t)?,
        ema_slow: cell(&c.ema_slow, t)?,
        rsi: cell(&c.rsi, t)?,
        macd: cell(&c.macd, t)?,
        macd_signal: cell(&c.macd_signal, t)?,
        bollinger_upper: cell(&c.bollinger_upper, t)?,
        bollinger_lower: cell(&c.bollinger_lower, t)?,
        obv: cell(&c.obv, t)?,
        close_lag_1: cell(&c.close_lag_1, t)?,
        close_lag_2: cell(&c.close_lag_2, t)?,
        close_lag_3: cell(&c.close_lag_3, t)?,
        return_lag_1: cell(&c.return_lag_1, t)?,
        volume_lag_1: cell(&c.volume_lag_1, t)?,
        price_vs_sma: cell(&c.price_vs_sma, t)?,
        volume_vs_avg_volume: cell(&c.volume_vs_avg_volume, t)?,
    })
}

/// Warm-up prefix length implied by a parameter set: the maximum over
/// the per-column first-defined positions.
///
/// Exponential averages, MACD and OBV are defined from position 0 and
/// never bind. The binding candidates are the rolling windows and the
/// lag offsets (the return lag stacks on the return's own one-position
/// warm-up).
pub fn warmup_len(config: &IndicatorConfig) -> usize {
    const MAX_CLOSE_LAG: usize = 3;
    const RETURN_LAG: usize = 1;

    let candidates = [
        1, // daily_return and RSI: first delta
        config.sma_fast.saturating_sub(1),
        config.sma_slow.saturating_sub(1), // also the price ratio
        config.bollinger_window.saturating_sub(1),
        config.volume_window.saturating_sub(1), // also the volume ratio
        MAX_CLOSE_LAG,
        1 + RETURN_LAG, // lagged return
    ];
    candidates.into_iter().max().unwrap_or(0)
}
