use serde::Serialize;
use tracing::debug;

use super::config::RatingConfig;
use super::distributor::{StarDistribution, StarDistributor};
use super::formatter::RatingFormatter;
use super::normalizer::{round_to, Normalizer};
use crate::error::RatingError;

/// Decimal places the normalized star value is rounded to before distribution.
pub const STAR_PRECISION: usize = 3;

/// A rendered rating with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rating {
    pub score: f64,
    /// Normalized star value after rounding
    pub stars: f64,
    pub distribution: StarDistribution,
    pub text: String,
}

/// Draws ratings for one scale configuration.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RatingConfig,
}

impl Renderer {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn draw_rating(&self, score: f64) -> Result<String, RatingError> {
        Ok(self.rate(score)?.text)
    }

    pub fn rate(&self, score: f64) -> Result<Rating, RatingError> {
        let config = &self.config;
        rate_with(
            score,
            config.max_score,
            config.star_count,
            config.allow_half,
            config.half_threshold,
            &config.normalizer,
            &config.distributor,
            &config.glyphs,
        )
    }
}

/// Render `score` with a one-off configuration.
pub fn render(config: &RatingConfig, score: f64) -> Result<String, RatingError> {
    Ok(Renderer::new(config.clone()).rate(score)?.text)
}

/// Render with caller-supplied pipeline stages.
#[allow(clippy::too_many_arguments)]
pub fn render_with(
    score: f64,
    max_score: u32,
    star_count: u32,
    allow_half: bool,
    half_threshold: f64,
    normalizer: &impl Normalizer,
    distributor: &impl StarDistributor,
    formatter: &impl RatingFormatter,
) -> Result<String, RatingError> {
    let rating = rate_with(
        score,
        max_score,
        star_count,
        allow_half,
        half_threshold,
        normalizer,
        distributor,
        formatter,
    )?;
    Ok(rating.text)
}

#[allow(clippy::too_many_arguments)]
fn rate_with(
    score: f64,
    max_score: u32,
    star_count: u32,
    allow_half: bool,
    half_threshold: f64,
    normalizer: &impl Normalizer,
    distributor: &impl StarDistributor,
    formatter: &impl RatingFormatter,
) -> Result<Rating, RatingError> {
    // NaN fails the range check too
    if !(0.0..=f64::from(max_score)).contains(&score) {
        return Err(RatingError::InvalidScore { score, max_score });
    }

    let stars = round_to(
        normalizer.normalize(score, max_score, star_count),
        STAR_PRECISION,
    );
    let distribution = distributor.distribute(stars, allow_half, half_threshold, star_count);
    let text = formatter.format_distribution(distribution);

    debug!(
        score,
        stars,
        full = distribution.full,
        half = distribution.half,
        empty = distribution.empty,
        "rendered rating"
    );

    Ok(Rating {
        score,
        stars,
        distribution,
        text,
    })
}
