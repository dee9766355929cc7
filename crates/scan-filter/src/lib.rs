//! LIDAR Scan Filtering
//!
//! Preprocesses streaming range scans before perception:
//! - Range clamping of every reading into the valid sensor range
//! - Temporal median smoothing of every channel over its recent scans
//!
//! [`Pipeline`] chains both stages; each stage is usable on its own.

mod clamp;
mod error;
mod median;
mod pipeline;
mod settings;

pub use clamp::BoundsClamp;
pub use error::{ConfigWarning, FilterError};
pub use median::{median, TemporalMedianWindow};
pub use pipeline::Pipeline;
pub use scan_history::ChannelHistory;
pub use settings::{
    MedianConfig, PipelineConfig, RangeConfig, DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN,
};

/// One scan: a reading per channel, in channel order
pub type Scan = Vec<f64>;
