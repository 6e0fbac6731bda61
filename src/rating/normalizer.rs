use serde::{Deserialize, Serialize};

/// Maps a raw score in `[0, max_score]` onto the star scale `[0, star_count]`.
///
/// Callers guarantee `max_score > 0` and that `score` was range-checked.
pub trait Normalizer {
    fn normalize(&self, score: f64, max_score: u32, star_count: u32) -> f64;
}

impl<F> Normalizer for F
where
    F: Fn(f64, u32, u32) -> f64,
{
    fn normalize(&self, score: f64, max_score: u32, star_count: u32) -> f64 {
        self(score, max_score, star_count)
    }
}

/// Built-in normalizers, selectable by name in config files.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizerKind {
    /// `(score / max_score) * star_count`
    #[default]
    Linear,
}

impl Normalizer for NormalizerKind {
    fn normalize(&self, score: f64, max_score: u32, star_count: u32) -> f64 {
        match self {
            NormalizerKind::Linear => linear(score, max_score, star_count),
        }
    }
}

pub fn linear(score: f64, max_score: u32, star_count: u32) -> f64 {
    (score / f64::from(max_score)) * f64::from(star_count)
}

/// Round to `places` decimal places.
///
/// Applied to the normalized value before distribution so float noise
/// (e.g. 4.0999999) cannot flip a half-threshold comparison. Rounds the
/// exact binary value through decimal formatting, so 0.24949999... stays
/// below 0.25 instead of being pushed up by a scale-and-round step.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
