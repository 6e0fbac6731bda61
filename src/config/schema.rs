use serde::{Deserialize, Serialize};

use crate::rating::RatingConfig;

/// Config file contents: a set of named rating scales.
///
/// Example YAML:
/// ```yaml
/// default_scale: seven-star
/// scales:
///   - name: seven-star
///     rating:
///       max_score: 130
///       star_count: 7
///       distributor: half-star
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scale used when none is named on the command line (default: first scale)
    #[serde(default)]
    pub default_scale: Option<String>,

    #[serde(default)]
    pub scales: Vec<ScaleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    pub name: String,
    #[serde(default)]
    pub rating: RatingConfig,
}

impl ScaleConfig {
    pub fn new(name: &str, rating: RatingConfig) -> Self {
        Self {
            name: name.to_string(),
            rating,
        }
    }
}

/// Built-in scales, used when no config file exists.
impl Default for Config {
    fn default() -> Self {
        Self {
            default_scale: Some("half".to_string()),
            scales: vec![
                ScaleConfig::new("full-only", RatingConfig::full_only()),
                ScaleConfig::new("half", RatingConfig::half_stars()),
                ScaleConfig::new("seven-star", RatingConfig::seven_star()),
            ],
        }
    }
}

impl Config {
    /// Find a scale by name, falling back to `default_scale`, then the first scale.
    pub fn scale(&self, name: Option<&str>) -> Option<&ScaleConfig> {
        match name.or(self.default_scale.as_deref()) {
            Some(wanted) => self.scales.iter().find(|s| s.name == wanted),
            None => self.scales.first(),
        }
    }

    pub fn scale_names(&self) -> Vec<&str> {
        self.scales.iter().map(|s| s.name.as_str()).collect()
    }
}
