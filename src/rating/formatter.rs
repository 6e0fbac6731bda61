use serde::{Deserialize, Serialize};

use super::distributor::StarDistribution;

/// Turns a star distribution into display text.
pub trait RatingFormatter {
    fn format(&self, full: u32, half: u32, empty: u32) -> String;

    fn format_distribution(&self, dist: StarDistribution) -> String {
        self.format(dist.full, dist.half, dist.empty)
    }
}

impl<F> RatingFormatter for F
where
    F: Fn(u32, u32, u32) -> String,
{
    fn format(&self, full: u32, half: u32, empty: u32) -> String {
        self(full, half, empty)
    }
}

/// The three glyphs a rating is drawn with.
///
/// Glyphs are arbitrary short strings; their display width is the caller's
/// concern.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphSet {
    pub filled: String,
    pub half: String,
    pub empty: String,
}

impl GlyphSet {
    pub fn new(filled: &str, half: &str, empty: &str) -> Self {
        Self {
            filled: filled.to_string(),
            half: half.to_string(),
            empty: empty.to_string(),
        }
    }

    /// `✪ ◐ ·`, used by the seven-star preset
    pub fn circles() -> Self {
        Self::new("✪", "◐", "·")
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::new("★", "⯪", "☆")
    }
}

impl RatingFormatter for GlyphSet {
    fn format(&self, full: u32, half: u32, empty: u32) -> String {
        let mut out = String::with_capacity(
            self.filled.len() * full as usize
                + self.half.len() * half as usize
                + self.empty.len() * empty as usize,
        );
        out.push_str(&self.filled.repeat(full as usize));
        out.push_str(&self.half.repeat(half as usize));
        out.push_str(&self.empty.repeat(empty as usize));
        out
    }
}
