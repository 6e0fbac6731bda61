use serde::{Deserialize, Serialize};

use super::distributor::DistributorKind;
use super::formatter::GlyphSet;
use super::normalizer::NormalizerKind;

/// Rating scale configuration.
///
/// Built once and shared across render calls. Every field is optional in
/// YAML and falls back to the 5-star, half-enabled scale.
///
/// Example YAML:
/// ```yaml
/// max_score: 130
/// star_count: 7
/// glyphs: { filled: "✪", half: "◐", empty: "·" }
/// allow_half: true
/// half_threshold: 0.25
/// distributor: half-star
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RatingConfig {
    /// Upper bound of the raw score range (default: 100)
    pub max_score: u32,

    /// Number of star positions on the scale (default: 5)
    pub star_count: u32,

    /// Glyphs for filled, half and empty stars (default: ★ ⯪ ☆)
    pub glyphs: GlyphSet,

    /// Whether half stars may be shown at all (default: true)
    pub allow_half: bool,

    /// Minimum fractional remainder that earns a half star, in [0, 1] (default: 0.25)
    pub half_threshold: f64,

    pub normalizer: NormalizerKind,

    /// Distribution policy (default: strict-full)
    pub distributor: DistributorKind,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_score: 100,
            star_count: 5,
            glyphs: GlyphSet::default(),
            allow_half: true,
            half_threshold: 0.25,
            normalizer: NormalizerKind::Linear,
            distributor: DistributorKind::StrictFull,
        }
    }
}

impl RatingConfig {
    /// 5 stars over 0..=100, whole stars only.
    pub fn full_only() -> Self {
        Self {
            allow_half: false,
            distributor: DistributorKind::FullOnly,
            ..Self::default()
        }
    }

    /// 5 stars over 0..=100 with half stars and a guaranteed all-full maximum.
    pub fn half_stars() -> Self {
        Self::default()
    }

    /// 7 stars over 0..=130 drawn with circle glyphs.
    pub fn seven_star() -> Self {
        Self {
            max_score: 130,
            star_count: 7,
            glyphs: GlyphSet::circles(),
            distributor: DistributorKind::HalfStar,
            ..Self::default()
        }
    }
}
