//! Range Clamp for LIDAR Readings

use crate::settings::RangeConfig;
use crate::Scan;
use tracing::{info, warn};

/// Clamps every reading of a scan into the valid sensor range.
///
/// Readings below `range_min` become `range_min`, readings above `range_max`
/// become `range_max`. An invalid range (`range_min >= range_max`) never fails
/// construction; the default range `[0.03, 50.0]` is used instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsClamp {
    range_min: f64,
    range_max: f64,
}

impl BoundsClamp {
    /// Create a clamp for `[range_min, range_max]`
    pub fn new(range_min: f64, range_max: f64) -> Self {
        Self::from_config(RangeConfig::new(range_min, range_max))
    }

    /// Create a clamp from a range configuration
    pub fn from_config(config: RangeConfig) -> Self {
        let (range, warning) = config.validate();
        if let Some(warning) = warning {
            warn!("{}", warning);
        }
        info!(
            "Range clamp created with range [{}, {}]",
            range.range_min, range.range_max
        );
        Self {
            range_min: range.range_min,
            range_max: range.range_max,
        }
    }

    /// Clamp a scan, returning a new scan of the same length
    pub fn update(&self, scan: &[f64]) -> Scan {
        scan.iter().map(|&x| self.clamp(x)).collect()
    }

    /// Clamp a single reading. NaN passes through unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.range_min > value {
            self.range_min
        } else if value > self.range_max {
            self.range_max
        } else {
            value
        }
    }

    /// Effective lower bound
    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    /// Effective upper bound
    pub fn range_max(&self) -> f64 {
        self.range_max
    }
}

impl Default for BoundsClamp {
    fn default() -> Self {
        Self::from_config(RangeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_RANGE_MAX, DEFAULT_RANGE_MIN};
    use proptest::prelude::*;

    #[test]
    fn test_clamps_below_and_above() {
        let clamp = BoundsClamp::new(0.0, 10.0);
        assert_eq!(
            clamp.update(&[-1.0, 0.0, 5.5, 10.0, 15.0]),
            vec![0.0, 0.0, 5.5, 10.0, 10.0]
        );
    }

    #[test]
    fn test_keeps_configured_bounds() {
        let clamp = BoundsClamp::new(1.5, 42.0);
        assert_eq!(clamp.range_min(), 1.5);
        assert_eq!(clamp.range_max(), 42.0);
    }

    #[test]
    fn test_empty_scan() {
        let clamp = BoundsClamp::default();
        assert!(clamp.update(&[]).is_empty());
    }

    #[test]
    fn test_does_not_mutate_input() {
        let clamp = BoundsClamp::new(0.0, 1.0);
        let scan = vec![-3.0, 0.5, 3.0];
        let _ = clamp.update(&scan);
        assert_eq!(scan, vec![-3.0, 0.5, 3.0]);
    }

    #[test]
    fn test_inverted_range_uses_defaults() {
        let fallback = BoundsClamp::new(50.0, 0.03);
        let reference = BoundsClamp::new(0.03, 50.0);
        assert_eq!(fallback, reference);
        assert_eq!(fallback.range_min(), DEFAULT_RANGE_MIN);
        assert_eq!(fallback.range_max(), DEFAULT_RANGE_MAX);

        let scan = [-5.0, 0.01, 0.03, 25.0, 50.0, 60.0];
        assert_eq!(fallback.update(&scan), reference.update(&scan));
    }

    #[test]
    fn test_nan_reading_passes_through() {
        let clamp = BoundsClamp::new(0.0, 10.0);
        assert!(clamp.clamp(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn prop_clamp_is_idempotent(scan in prop::collection::vec(-100.0f64..100.0, 0..64)) {
            let clamp = BoundsClamp::new(-2.0, 40.0);
            let once = clamp.update(&scan);
            prop_assert_eq!(clamp.update(&once), once);
        }

        #[test]
        fn prop_output_within_range(
            scan in prop::collection::vec(-1.0e6f64..1.0e6, 0..64),
            low in -50.0f64..50.0,
            width in 0.001f64..100.0,
        ) {
            let clamp = BoundsClamp::new(low, low + width);
            let out = clamp.update(&scan);
            prop_assert_eq!(out.len(), scan.len());
            for x in out {
                prop_assert!(clamp.range_min() <= x && x <= clamp.range_max());
            }
        }
    }
}
