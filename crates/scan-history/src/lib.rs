//! Per-Channel Scan History
//!
//! Keeps the most recent readings of every channel of a scan stream in
//! bounded windows that advance together, one scan at a time.

mod error;
mod window;

pub use error::HistoryError;
pub use window::{ChannelHistory, ScanHistory};
