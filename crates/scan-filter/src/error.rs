//! Filter Error Types

use crate::settings::{DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN};
use scan_history::HistoryError;
use thiserror::Error;

/// Errors surfaced to the caller of a filter
#[derive(Debug, Error)]
pub enum FilterError {
    /// Scan width differs from the channel count established by the first scan
    #[error("scan has {actual} channels, expected {expected}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    /// Configuration source could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<HistoryError> for FilterError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::ChannelCountMismatch { expected, actual } => {
                FilterError::ChannelCountMismatch { expected, actual }
            }
        }
    }
}

impl From<config::ConfigError> for FilterError {
    fn from(err: config::ConfigError) -> Self {
        FilterError::Config(err.to_string())
    }
}

/// Configuration problems that were repaired with a safe default
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigWarning {
    /// Lower bound not strictly below the upper bound
    #[error(
        "invalid range [{range_min}, {range_max}], default range [{}, {}] applied",
        DEFAULT_RANGE_MIN,
        DEFAULT_RANGE_MAX
    )]
    InvalidRange { range_min: f64, range_max: f64 },

    /// Window depth below zero
    #[error("invalid depth {0}, depth 0 applied")]
    NegativeDepth(i64),
}
