//! Clamp → Temporal Median Pipeline

use crate::clamp::BoundsClamp;
use crate::error::FilterError;
use crate::median::TemporalMedianWindow;
use crate::settings::{MedianConfig, PipelineConfig, RangeConfig};
use crate::Scan;
use tracing::info;

/// Range clamp followed by temporal median, one scan in, one scan out
#[derive(Debug, Clone)]
pub struct Pipeline {
    clamp: BoundsClamp,
    median: TemporalMedianWindow,
}

impl Pipeline {
    /// Create a pipeline from its configuration
    pub fn new(config: PipelineConfig) -> Self {
        let clamp = BoundsClamp::from_config(config.range);
        let median = TemporalMedianWindow::from_config(config.median);
        info!(
            "Scan pipeline created: range [{}, {}], depth {}",
            clamp.range_min(),
            clamp.range_max(),
            median.depth()
        );
        Self { clamp, median }
    }

    /// Create a pipeline from raw parameters
    pub fn with_params(range_min: f64, range_max: f64, depth: i64) -> Self {
        Self::new(PipelineConfig::new(
            RangeConfig::new(range_min, range_max),
            MedianConfig::new(depth),
        ))
    }

    /// Filter one scan
    pub fn update(&mut self, scan: &[f64]) -> Result<Scan, FilterError> {
        let clamped = self.clamp.update(scan);
        self.median.update(&clamped)
    }

    /// Clamp stage
    pub fn clamp(&self) -> &BoundsClamp {
        &self.clamp
    }

    /// Median stage
    pub fn median(&self) -> &TemporalMedianWindow {
        &self.median
    }
}
