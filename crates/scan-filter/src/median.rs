//! Temporal Median Filter for Noise Reduction

use crate::error::FilterError;
use crate::settings::MedianConfig;
use crate::Scan;
use scan_history::{ChannelHistory, ScanHistory};
use tracing::{debug, info, warn};

/// Median of `values`, sorting them in place.
///
/// Odd lengths yield the middle element; even lengths yield the mean of the
/// two middle elements. Any NaN reading makes the median NaN, whatever its
/// sign bit. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    if values.iter().any(|v| v.is_nan()) {
        return Some(f64::NAN);
    }

    values.sort_unstable_by(|a, b| a.total_cmp(b));

    if n % 2 == 1 {
        Some(values[n / 2])
    } else {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    }
}

/// Per-channel median over the current scan and up to `depth` previous scans.
///
/// The first scan latches the channel count and is returned unchanged. Each
/// later scan must have the same width; its readings are appended to the
/// channel windows (evicting the oldest once a window holds `depth + 1`
/// readings) and the median of every window is returned in channel order.
#[derive(Debug, Clone)]
pub struct TemporalMedianWindow {
    depth: usize,
    history: ScanHistory,
    /// Reused sort buffer, one channel at a time
    scratch: Vec<f64>,
}

impl TemporalMedianWindow {
    /// Create a window keeping `depth` previous scans. Negative depths become 0.
    pub fn new(depth: i64) -> Self {
        Self::from_config(MedianConfig::new(depth))
    }

    /// Create a window from a median configuration
    pub fn from_config(config: MedianConfig) -> Self {
        let (depth, warning) = config.validate();
        if let Some(warning) = warning {
            warn!("{}", warning);
        }
        info!("Temporal median window created with depth {}", depth);
        Self {
            depth,
            history: ScanHistory::new(depth.saturating_add(1)),
            scratch: Vec::new(),
        }
    }

    /// Ingest a scan and return the per-channel medians.
    ///
    /// Fails with [`FilterError::ChannelCountMismatch`] if the scan width differs
    /// from the first scan's; the window is left untouched in that case.
    pub fn update(&mut self, scan: &[f64]) -> Result<Scan, FilterError> {
        let latching = self.history.channel_count().is_none();
        self.history.record(scan)?;
        if latching {
            debug!("Temporal median window latched {} channels", scan.len());
        }

        let mut filtered = Vec::with_capacity(scan.len());
        for (channel, &latest) in self.history.channels().iter().zip(scan) {
            channel.copy_into(&mut self.scratch);
            filtered.push(median(&mut self.scratch).unwrap_or(latest));
        }
        Ok(filtered)
    }

    /// Effective depth (previous scans kept besides the current one)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum readings per channel window (`depth + 1`)
    pub fn window_size(&self) -> usize {
        self.history.capacity()
    }

    /// Channel count, once latched by the first scan
    pub fn channel_count(&self) -> Option<usize> {
        self.history.channel_count()
    }

    /// Readings currently retained per channel
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Retained readings of one channel, oldest first
    pub fn channel_history(&self, index: usize) -> Option<&ChannelHistory> {
        self.history.channel(index)
    }
}
