//! Arithmetic mean of integer sequences.

pub mod config;
pub mod stats;

pub use config::Input;
pub use stats::{MeanError, MeanReport, average, summarize};
