//! Configuration for building histograms from samples

use crate::types::{Bounds, OutOfBoundsPolicy};
use serde::{Deserialize, Serialize};

/// Everything a sample-to-histogram build needs besides the sample itself
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use ndhist_histogram::{HistogramConfig, OutOfBoundsPolicy};
///
/// let config: HistogramConfig =
///     serde_json::from_str(r#"{ "size": [7, 13, 7], "out_of_bounds": "drop" }"#).unwrap();
/// assert_eq!(config.size, Some(vec![7, 13, 7]));
/// assert_eq!(config.bounds, None);
/// assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Drop);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Bins per dimension; required before any build
    pub size: Option<Vec<usize>>,
    /// Explicit per-dimension bounds; derived from the sample when absent
    pub bounds: Option<Vec<Bounds>>,
    /// Handling of measurements outside the bounds
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl HistogramConfig {
    /// Create a configuration with the given bins per dimension
    pub fn with_size(size: impl Into<Vec<usize>>) -> Self {
        Self {
            size: Some(size.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistogramConfig::default();
        assert_eq!(config.size, None);
        assert_eq!(config.bounds, None);
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Clamp);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "size": [35, 39],
            "bounds": [{ "min": -17.5, "max": 17.5 }, { "min": -19.5, "max": 19.5 }],
            "out_of_bounds": "clamp"
        }"#;
        let config: HistogramConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.size, Some(vec![35, 39]));
        assert_eq!(
            config.bounds,
            Some(vec![
                Bounds::new(-17.5, 17.5).unwrap(),
                Bounds::new(-19.5, 19.5).unwrap()
            ])
        );
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let json = r#"{ "out_of_bounds": "wrap" }"#;
        assert!(serde_json::from_str::<HistogramConfig>(json).is_err());
    }
}
