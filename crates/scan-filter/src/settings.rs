//! Filter Configuration
//!
//! Plain configuration values plus the soft validation applied when a filter
//! is built from them. Validation never fails: invalid values are swapped for
//! safe defaults and reported as a [`ConfigWarning`].

use crate::error::{ConfigWarning, FilterError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default lower bound of the valid sensor range
pub const DEFAULT_RANGE_MIN: f64 = 0.03;

/// Default upper bound of the valid sensor range
pub const DEFAULT_RANGE_MAX: f64 = 50.0;

/// Environment variable prefix for overrides, e.g. `SCAN_FILTER__MEDIAN__DEPTH=4`
const ENV_PREFIX: &str = "SCAN_FILTER";

/// Valid sensor range used by the clamp stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Readings below this are raised to it
    pub range_min: f64,
    /// Readings above this are lowered to it
    pub range_max: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            range_min: DEFAULT_RANGE_MIN,
            range_max: DEFAULT_RANGE_MAX,
        }
    }
}

impl RangeConfig {
    pub fn new(range_min: f64, range_max: f64) -> Self {
        Self {
            range_min,
            range_max,
        }
    }

    /// Return the effective range: `self` if `range_min < range_max`, the defaults otherwise
    pub fn validate(self) -> (Self, Option<ConfigWarning>) {
        if self.range_min < self.range_max {
            (self, None)
        } else {
            (
                Self::default(),
                Some(ConfigWarning::InvalidRange {
                    range_min: self.range_min,
                    range_max: self.range_max,
                }),
            )
        }
    }
}

/// Temporal window of the median stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedianConfig {
    /// Prior scans kept besides the current one (window size is `depth + 1`)
    pub depth: i64,
}

impl MedianConfig {
    pub fn new(depth: i64) -> Self {
        Self { depth }
    }

    /// Return the effective depth; negative depths become 0
    pub fn validate(self) -> (usize, Option<ConfigWarning>) {
        match usize::try_from(self.depth) {
            Ok(depth) => (depth, None),
            Err(_) if self.depth < 0 => (0, Some(ConfigWarning::NegativeDepth(self.depth))),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Configuration of the full clamp → median chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Clamp stage; defaults apply when omitted
    #[serde(default)]
    pub range: RangeConfig,
    /// Median stage; always caller-supplied
    pub median: MedianConfig,
}

impl PipelineConfig {
    pub fn new(range: RangeConfig, median: MedianConfig) -> Self {
        Self { range, median }
    }

    /// Load from a file (format picked by extension), with environment overrides
    /// under the `SCAN_FILTER__` prefix
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        Self::load_with_env_prefix(path.as_ref(), ENV_PREFIX)
    }

    /// Parse an inline TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, FilterError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    fn load_with_env_prefix(path: &Path, prefix: &str) -> Result<Self, FilterError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
