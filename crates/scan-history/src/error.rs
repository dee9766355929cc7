//! History Error Types

use thiserror::Error;

/// Errors raised while recording scans
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Scan width differs from the channel count latched by the first scan
    #[error("scan has {actual} channels, expected {expected}")]
    ChannelCountMismatch { expected: usize, actual: usize },
}
