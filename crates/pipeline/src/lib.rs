//! Feature derivation pipeline for the signal-features engine.
//!
//! This crate handles:
//! - The fixed stage sequence (base returns, indicators, lags,
//!   interactions, intermediate-column removal, row trimming)
//! - Indicator descriptors built once from configuration
//! - Row trimming and warm-up accounting
//! - Structured run diagnostics

pub mod descriptor;
pub mod diagnostics;
pub mod engine;
pub mod stages;
pub mod trim;

pub use descriptor::{IndicatorDescriptor, IndicatorKind, SourceColumn};
pub use diagnostics::{Diagnostics, IndicatorFailure};
pub use engine::{FeaturePipeline, PipelineOutput};
pub use trim::warmup_len;
