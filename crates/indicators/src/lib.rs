//! Technical indicator library for the signal-features engine.
//!
//! This crate handles:
//! - Pure, stateless indicator computations (SMA, EMA, RSI, MACD,
//!   Bollinger bands, OBV)
//! - Computation strategy selection with fallback
//!
//! Every indicator returns a column aligned 1:1 with its input, with
//! warm-up positions marked undefined.

pub mod backend;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sma;

#[cfg(feature = "accelerated")]
pub use backend::AcceleratedBackend;
pub use backend::{resolve, IndicatorBackend, ReferenceBackend, ResolvedBackend};
pub use bollinger::{bollinger_bands, BollingerSeries};
pub use ema::exponential_moving_average;
pub use macd::{macd, MacdSeries};
pub use obv::on_balance_volume;
pub use rsi::relative_strength_index;
pub use sma::simple_moving_average;
