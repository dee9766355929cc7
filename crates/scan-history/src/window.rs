//! Bounded Scan Window Implementation

use crate::HistoryError;
use std::collections::VecDeque;

/// Upper bound on per-channel storage reserved up front; deeper windows grow on demand
const PREALLOCATED_READINGS: usize = 1024;

/// Trailing readings of a single channel, oldest first
#[derive(Debug, Clone, Default)]
pub struct ChannelHistory {
    readings: VecDeque<f64>,
}

impl ChannelHistory {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity.min(PREALLOCATED_READINGS)),
        }
    }

    /// Record a reading, dropping the oldest one once `capacity` is reached
    fn record(&mut self, value: f64, capacity: usize) {
        if self.readings.len() >= capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(value);
    }

    /// Number of retained readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if no reading has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Retained readings, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().copied()
    }

    /// Replace the contents of `out` with the retained readings
    pub fn copy_into(&self, out: &mut Vec<f64>) {
        out.clear();
        out.extend(self.readings.iter().copied());
    }
}

/// History of a scan stream: one bounded window per channel, all advancing together.
///
/// The channel count is latched by the first recorded scan and never changes
/// afterwards. Windows start empty and grow by one reading per scan until they
/// hold `capacity` readings, after which every scan evicts the oldest one.
#[derive(Debug, Clone)]
pub struct ScanHistory {
    /// One window per channel, in scan order
    channels: Vec<ChannelHistory>,
    /// Maximum readings retained per channel
    capacity: usize,
    /// Channel count latched by the first scan
    channel_count: Option<usize>,
    /// Readings currently retained per channel
    len: usize,
}

impl ScanHistory {
    /// Create an empty history retaining up to `capacity` scans (at least one)
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Vec::new(),
            capacity: capacity.max(1),
            channel_count: None,
            len: 0,
        }
    }

    /// Record one scan.
    ///
    /// The first scan fixes the channel count. A later scan of a different
    /// width is rejected and leaves the history untouched.
    pub fn record(&mut self, scan: &[f64]) -> Result<(), HistoryError> {
        match self.channel_count {
            Some(expected) if expected != scan.len() => {
                return Err(HistoryError::ChannelCountMismatch {
                    expected,
                    actual: scan.len(),
                });
            }
            Some(_) => {}
            None => {
                self.channels = (0..scan.len())
                    .map(|_| ChannelHistory::with_capacity(self.capacity))
                    .collect();
                self.channel_count = Some(scan.len());
            }
        }

        for (history, &value) in self.channels.iter_mut().zip(scan) {
            history.record(value, self.capacity);
        }

        self.len = (self.len + 1).min(self.capacity);
        Ok(())
    }

    /// Number of readings retained per channel
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no scan has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum readings retained per channel
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Channel count, once latched by the first scan
    pub fn channel_count(&self) -> Option<usize> {
        self.channel_count
    }

    /// Window of a single channel
    pub fn channel(&self, index: usize) -> Option<&ChannelHistory> {
        self.channels.get(index)
    }

    /// All channel windows, in scan order
    pub fn channels(&self) -> &[ChannelHistory] {
        &self.channels
    }
}
