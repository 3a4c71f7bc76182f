//! Feature pipeline orchestration.
//!
//! Runs the fixed stage sequence over a bar series: base returns,
//! indicators through the resolved backend, lags, interactions,
//! intermediate-column removal, row trimming. Later stages read earlier
//! ones, so the order never changes.

use signal_core::{BarSeries, Error, FeatureTable, PipelineConfig, Result};
use signal_indicators::{resolve, IndicatorBackend};
use tracing::{debug, warn};

use crate::descriptor::{build_descriptors, IndicatorDescriptor, IndicatorOp};
use crate::diagnostics::{Diagnostics, IndicatorFailure};
use crate::stages;
use crate::trim::{self, ColumnSet};

/// Output of one pipeline invocation.
#[derive(Debug)]
pub struct PipelineOutput {
    /// The dense feature table.
    pub table: FeatureTable,
    /// Run diagnostics.
    pub diagnostics: Diagnostics,
}

/// Feature derivation pipeline.
///
/// Construction validates the configuration, probes the requested
/// backend once, and builds the indicator descriptor list. Each `run`
/// recomputes the whole feature table from scratch; the input series is
/// never mutated.
pub struct FeaturePipeline {
    config: PipelineConfig,
    backend: Box<dyn IndicatorBackend>,
    fallback: Option<String>,
    descriptors: Vec<IndicatorDescriptor>,
}

impl FeaturePipeline {
    /// Create a pipeline from configuration, resolving the backend.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.indicators.validate()?;
        let resolved = resolve(config.backend);
        let descriptors = build_descriptors(&config.indicators);
        Ok(Self {
            config,
            backend: resolved.backend,
            fallback: resolved.fallback,
            descriptors,
        })
    }

    /// Create a pipeline around an injected strategy, bypassing the
    /// capability probe.
    pub fn with_backend(
        config: PipelineConfig,
        backend: Box<dyn IndicatorBackend>,
    ) -> Result<Self> {
        config.indicators.validate()?;
        let descriptors = build_descriptors(&config.indicators);
        Ok(Self {
            config,
            backend,
            fallback: None,
            descriptors,
        })
    }

    /// The indicator descriptors driving the computation stage.
    pub fn descriptors(&self) -> &[IndicatorDescriptor] {
        &self.descriptors
    }

    /// Derive the dense feature table for a series.
    pub fn run(&self, series: &BarSeries) -> Result<PipelineOutput> {
        if series.is_empty() {
            return Err(Error::input("bar series is empty"));
        }

        let n = series.len();
        debug!(
            rows = n,
            backend = self.backend.name(),
            "feature pipeline start"
        );

        let close = series.closes();
        let volume = series.volumes();
        let mut columns = ColumnSet::default();
        let mut failures = Vec::new();

        // Stage 1: base transform.
        columns.daily_return = stages::daily_returns(&close);

        // Stage 2: indicators. A failure inside one indicator undefines
        // its columns and the run continues.
        for descriptor in &self.descriptors {
            if let Err(err) = self.compute_indicator(descriptor, &close, &volume, &mut columns) {
                warn!(
                    indicator = %descriptor.name,
                    error = %err,
                    "indicator computation failed"
                );
                failures.push(IndicatorFailure {
                    indicator: descriptor.name.clone(),
                    message: err.to_string(),
                });
                undefine_indicator(descriptor, n, &mut columns);
            }
        }

        // Stage 3: lags.
        columns.close_lag_1 = stages::lag_values(&close, 1);
        columns.close_lag_2 = stages::lag_values(&close, 2);
        columns.close_lag_3 = stages::lag_values(&close, 3);
        columns.return_lag_1 = stages::lag(&columns.daily_return, 1);
        columns.volume_lag_1 = stages::lag_values(&volume, 1);

        // Stage 4: interactions.
        columns.price_vs_sma = stages::ratio(&close, &columns.sma_slow);
        columns.volume_vs_avg_volume = stages::ratio(&volume, &columns.avg_volume);

        // Stages 5 and 6: the helper columns stay behind in the column
        // set while rows are trimmed and emitted.
        let (table, stats) = trim::assemble(&series.dates(), &columns);

        let diagnostics = Diagnostics {
            rows_examined: stats.rows_examined,
            rows_dropped: stats.rows_dropped,
            backend: self.backend.name().to_string(),
            fallback_events: self.fallback.iter().cloned().collect(),
            indicator_failures: failures,
        };
        debug!(
            rows_out = table.len(),
            rows_dropped = diagnostics.rows_dropped,
            "feature pipeline done"
        );

        Ok(PipelineOutput { table, diagnostics })
    }

    fn compute_indicator(
        &self,
        descriptor: &IndicatorDescriptor,
        close: &[f64],
        volume: &[f64],
        columns: &mut ColumnSet,
    ) -> Result<()> {
        let cfg = &self.config.indicators;
        match descriptor.op {
            IndicatorOp::SmaFast => columns.sma_fast = self.backend.sma(close, cfg.sma_fast)?,
            IndicatorOp::SmaSlow => columns.sma_slow = self.backend.sma(close, cfg.sma_slow)?,
            IndicatorOp::EmaFast => columns.ema_fast = self.backend.ema(close, cfg.ema_fast)?,
            IndicatorOp::EmaSlow => columns.ema_slow = self.backend.ema(close, cfg.ema_slow)?,
            IndicatorOp::Rsi => columns.rsi = self.backend.rsi(close, cfg.rsi_period)?,
            IndicatorOp::Macd => {
                let out =
                    self.backend
                        .macd(close, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)?;
                columns.macd = out.line;
                columns.macd_signal = out.signal;
            }
            IndicatorOp::Bollinger => {
                let out = self
                    .backend
                    .bollinger(close, cfg.bollinger_window, cfg.bollinger_k)?;
                columns.bollinger_middle = out.middle;
                columns.bollinger_upper = out.upper;
                columns.bollinger_lower = out.lower;
            }
            IndicatorOp::Obv => columns.obv = self.backend.obv(close, volume)?,
            IndicatorOp::AvgVolume => {
                columns.avg_volume = self.backend.sma(volume, cfg.volume_window)?
            }
        }
        Ok(())
    }
}

/// Mark every column owned by a failed indicator fully undefined.
fn undefine_indicator(descriptor: &IndicatorDescriptor, n: usize, columns: &mut ColumnSet) {
    let undefined = vec![None; n];
    match descriptor.op {
        IndicatorOp::SmaFast => columns.sma_fast = undefined,
        IndicatorOp::SmaSlow => columns.sma_slow = undefined,
        IndicatorOp::EmaFast => columns.ema_fast = undefined,
        IndicatorOp::EmaSlow => columns.ema_slow = undefined,
        IndicatorOp::Rsi => columns.rsi = undefined,
        IndicatorOp::Macd => {
            columns.macd = undefined.clone();
            columns.macd_signal = undefined;
        }
        IndicatorOp::Bollinger => {
            columns.bollinger_middle = undefined.clone();
            columns.bollinger_upper = undefined.clone();
            columns.bollinger_lower = undefined;
        }
        IndicatorOp::Obv => columns.obv = undefined,
        IndicatorOp::AvgVolume => columns.avg_volume = undefined,
    }
}
