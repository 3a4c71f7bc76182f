//! Core types and configuration for the signal-features engine.
//!
//! This crate provides shared types used across the other crates:
//! - Daily bar and bar-series input types
//! - Dense feature table output types
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{BackendKind, IndicatorConfig, PipelineConfig};
pub use error::{Error, Result};
pub use types::*;
