//! Configuration structures for the feature derivation pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Computation strategy requested for the indicator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// Straightforward per-window implementations; always available.
    Reference,
    /// Single-pass rolling implementations; used when compiled in,
    /// otherwise the pipeline falls back to [`BackendKind::Reference`].
    Accelerated,
}

/// Main configuration for a pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Requested computation strategy.
    pub backend: BackendKind,
    /// Indicator parameter set.
    pub indicators: IndicatorConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Reference,
            indicators: IndicatorConfig::default(),
        }
    }
}

/// Indicator parameter set.
///
/// Windows, spans and periods are overridable per invocation; the
/// defaults mirror the standard configuration of the feature set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Fast simple moving average window.
    pub sma_fast: usize,
    /// Slow simple moving average window (also the denominator of the
    /// price-vs-average ratio).
    pub sma_slow: usize,
    /// Fast exponential moving average span.
    pub ema_fast: usize,
    /// Slow exponential moving average span.
    pub ema_slow: usize,
    /// RSI lookback period.
    pub rsi_period: usize,
    /// MACD fast EMA span.
    pub macd_fast: usize,
    /// MACD slow EMA span.
    pub macd_slow: usize,
    /// MACD signal EMA span.
    pub macd_signal: usize,
    /// Bollinger band window.
    pub bollinger_window: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_k: f64,
    /// Rolling average-volume window for the volume ratio.
    pub volume_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_fast: 5,
            sma_slow: 10,
            ema_fast: 5,
            ema_slow: 10,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_k: 2.0,
            volume_window: 10,
        }
    }
}

impl IndicatorConfig {
    /// Validate the parameter set.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("sma_fast", self.sma_fast),
            ("sma_slow", self.sma_slow),
            ("ema_fast", self.ema_fast),
            ("ema_slow", self.ema_slow),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("volume_window", self.volume_window),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            return Err(Error::config(format!("{name} must be at least 1")));
        }
        // Sample standard deviation needs two observations.
        if self.bollinger_window < 2 {
            return Err(Error::config("bollinger_window must be at least 2"));
        }
        if !self.bollinger_k.is_finite() || self.bollinger_k < 0.0 {
            return Err(Error::config(
                "bollinger_k must be finite and non-negative",
            ));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(Error::config(format!(
                "macd_fast ({}) must be smaller than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }

    /// Display labels for the feature columns, in declared column order,
    /// with the configured parameters baked into the names.
    pub fn column_labels(&self) -> Vec<String> {
        vec![
            "daily_return".to_string(),
            format!("SMA_{}", self.sma_fast),
            format!("SMA_{}", self.sma_slow),
            format!("EMA_{}", self.ema_fast),
            format!("EMA_{}", self.ema_slow),
            format!("RSI_{}", self.rsi_period),
            "MACD".to_string(),
            "MACD_Signal".to_string(),
            "Bollinger_Upper".to_string(),
            "Bollinger_Lower".to_string(),
            "OBV".to_string(),
            "Close_Lag_1".to_string(),
            "Close_Lag_2".to_string(),
            "Close_Lag_3".to_string(),
            "Return_Lag_1".to_string(),
            "Volume_Lag_1".to_string(),
            format!("Price_vs_SMA{}", self.sma_slow),
            format!("Volume_vs_AvgVol{}", self.volume_window),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureRow;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.backend, BackendKind::Reference);
        assert_eq!(config.indicators.sma_fast, 5);
        assert_eq!(config.indicators.rsi_period, 14);
        assert_eq!(config.indicators.bollinger_window, 20);
        assert!(config.indicators.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = IndicatorConfig {
            sma_fast: 0,
            ..IndicatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_macd_span_order_enforced() {
        let config = IndicatorConfig {
            macd_fast: 26,
            macd_slow: 12,
            ..IndicatorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_column_labels() {
        let labels = IndicatorConfig::default().column_labels();
        assert_eq!(labels.len(), FeatureRow::COLUMN_COUNT);
        assert_eq!(labels[1], "SMA_5");
        assert_eq!(labels[5], "RSI_14");
        assert_eq!(labels[16], "Price_vs_SMA10");
        assert_eq!(labels[17], "Volume_vs_AvgVol10");
    }
}
