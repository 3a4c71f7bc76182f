//! Indicator descriptors.
//!
//! A descriptor declares one configured indicator: its display name,
//! family, input column, and the engine dispatch target. The list is
//! built once at pipeline construction and drives the computation stage
//! in a fixed order.

use signal_core::IndicatorConfig;

/// Broad indicator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    /// Rolling or smoothed average of its input.
    MovingAverage,
    /// Bounded or centered momentum measure.
    Oscillator,
    /// Envelope around a rolling average.
    Band,
    /// Cumulative running total.
    Accumulator,
}

/// Which input column an indicator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceColumn {
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

/// Engine dispatch target for a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndicatorOp {
    SmaFast,
    SmaSlow,
    EmaFast,
    EmaSlow,
    Rsi,
    Macd,
    Bollinger,
    Obv,
    AvgVolume,
}

/// A configured indicator, never mutated after construction.
#[derive(Debug, Clone)]
pub struct IndicatorDescriptor {
    /// Display name with parameters baked in, e.g. `SMA_10`.
    pub name: String,
    /// Indicator family.
    pub kind: IndicatorKind,
    /// Input column the indicator reads.
    pub source: SourceColumn,
    pub(crate) op: IndicatorOp,
}

/// Build the descriptor list for a parameter set, in computation order.
pub(crate) fn build_descriptors(config: &IndicatorConfig) -> Vec<IndicatorDescriptor> {
    vec![
        IndicatorDescriptor {
            name: format!("SMA_{}", config.sma_fast),
            kind: IndicatorKind::MovingAverage,
            source: SourceColumn::Close,
            op: IndicatorOp::SmaFast,
        },
        IndicatorDescriptor {
            name: format!("SMA_{}", config.sma_slow),
            kind: IndicatorKind::MovingAverage,
            source: SourceColumn::Close,
            op: IndicatorOp::SmaSlow,
        },
        IndicatorDescriptor {
            name: format!("EMA_{}", config.ema_fast),
            kind: IndicatorKind::MovingAverage,
            source: SourceColumn::Close,
            op: IndicatorOp::EmaFast,
        },
        IndicatorDescriptor {
            name: format!("EMA_{}", config.ema_slow),
            kind: IndicatorKind::MovingAverage,
            source: SourceColumn::Close,
            op: IndicatorOp::EmaSlow,
        },
        IndicatorDescriptor {
            name: format!("RSI_{}", config.rsi_period),
            kind: IndicatorKind::Oscillator,
            source: SourceColumn::Close,
            op: IndicatorOp::Rsi,
        },
        IndicatorDescriptor {
            name: "MACD".to_string(),
            kind: IndicatorKind::Oscillator,
            source: SourceColumn::Close,
            op: IndicatorOp::Macd,
        },
        IndicatorDescriptor {
            name: format!("Bollinger_{}", config.bollinger_window),
            kind: IndicatorKind::Band,
            source: SourceColumn::Close,
            op: IndicatorOp::Bollinger,
        },
        IndicatorDescriptor {
            name: "OBV".to_string(),
            kind: IndicatorKind::Accumulator,
            source: SourceColumn::Volume,
            op: IndicatorOp::Obv,
        },
        IndicatorDescriptor {
            name: format!("AvgVol_{}", config.volume_window),
            kind: IndicatorKind::MovingAverage,
            source: SourceColumn::Volume,
            op: IndicatorOp::AvgVolume,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_list() {
        let descriptors = build_descriptors(&IndicatorConfig::default());
        assert_eq!(descriptors.len(), 9);
        assert_eq!(descriptors[0].name, "SMA_5");
        assert_eq!(descriptors[4].name, "RSI_14");
        assert_eq!(descriptors[4].kind, IndicatorKind::Oscillator);
        assert_eq!(descriptors[7].source, SourceColumn::Volume);
        assert_eq!(descriptors[8].name, "AvgVol_10");
    }
}
