use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::config::ScaleConfig;
use crate::rating::{GlyphSet, Rating, RatingConfig};

/// Output format for rendered ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One aligned line per score
    #[default]
    Plain,
    /// Tab-separated: score, stars, full, half, empty, text
    Tsv,
    /// JSON array of rating objects
    Json,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score without a trailing ".0" (76, 76.5)
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        let formatted = format!("{:.3}", score);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Draw the glyphs of a rating, coloring filled and half stars
fn colored_glyphs(rating: &Rating, glyphs: &GlyphSet) -> String {
    let dist = rating.distribution;
    format!(
        "{}{}{}",
        glyphs.filled.repeat(dist.full as usize).yellow(),
        glyphs.half.repeat(dist.half as usize).yellow(),
        glyphs.empty.repeat(dist.empty as usize).dimmed()
    )
}

/// Format one rating as "{score}/{max}  {glyphs}"
/// Score column is right-aligned to the width of max_score.
pub fn format_rating_line(rating: &Rating, config: &RatingConfig, use_colors: bool) -> String {
    let max = config.max_score.to_string();
    let score = format!("{:>width$}", format_score(rating.score), width = max.len());

    if use_colors {
        format!(
            "{}{}  {}",
            score.bold(),
            format!("/{}", max).dimmed(),
            colored_glyphs(rating, &config.glyphs)
        )
    } else {
        format!("{}/{}  {}", score, max, rating.text)
    }
}

/// Format ratings as one line each
pub fn format_rating_lines(ratings: &[Rating], config: &RatingConfig, use_colors: bool) -> String {
    ratings
        .iter()
        .map(|r| format_rating_line(r, config, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ratings as tab-separated values for scripting
/// Columns: score, stars, full, half, empty, text (no headers, no colors)
pub fn format_tsv(ratings: &[Rating]) -> String {
    ratings
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                format_score(r.score),
                format_score(r.stars),
                r.distribution.full,
                r.distribution.half,
                r.distribution.empty,
                r.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(ratings: &[Rating]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ratings)
}

/// Format a scale as a one-line summary for `scales` listing
pub fn format_scale_summary(scale: &ScaleConfig, is_default: bool, use_colors: bool) -> String {
    let rating = &scale.rating;
    let half = if rating.allow_half {
        format!("half >= {}", rating.half_threshold)
    } else {
        "no half".to_string()
    };
    let glyphs = format!(
        "{}{}{}",
        rating.glyphs.filled, rating.glyphs.half, rating.glyphs.empty
    );
    let marker = if is_default { "*" } else { " " };
    let details = format!(
        "{} stars, max {}, {:?}, {}, {}",
        rating.star_count, rating.max_score, rating.distributor, half, glyphs
    );

    if use_colors {
        format!("{} {}  {}", marker, scale.name.cyan(), details.dimmed())
    } else {
        format!("{} {}  {}", marker, scale.name, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Renderer;

    fn sample_ratings() -> (RatingConfig, Vec<Rating>) {
        let config = RatingConfig::half_stars();
        let renderer = Renderer::new(config.clone());
        let ratings = vec![renderer.rate(76.0).unwrap(), renderer.rate(5.5).unwrap()];
        (config, ratings)
    }

    #[test]
    fn test_format_score_integer() {
        assert_eq!(format_score(76.0), "76");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_format_score_fraction() {
        assert_eq!(format_score(76.5), "76.5");
        assert_eq!(format_score(4.362), "4.362");
        assert_eq!(format_score(2.0001), "2");
    }

    #[test]
    fn test_format_rating_line_plain() {
        let (config, ratings) = sample_ratings();
        assert_eq!(format_rating_line(&ratings[0], &config, false), " 76/100  ★★★⯪☆");
        assert_eq!(format_rating_line(&ratings[1], &config, false), "5.5/100  ⯪☆☆☆☆");
    }

    #[test]
    fn test_format_rating_line_colored_keeps_glyphs() {
        let (config, ratings) = sample_ratings();
        let line = format_rating_line(&ratings[0], &config, true);
        assert!(line.contains("★★★"));
        assert!(line.contains("⯪"));
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_format_rating_lines_joins() {
        let (config, ratings) = sample_ratings();
        let output = format_rating_lines(&ratings, &config, false);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_format_tsv() {
        let (_, ratings) = sample_ratings();
        let output = format_tsv(&ratings);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "76\t3.8\t3\t1\t1\t★★★⯪☆");
    }

    #[test]
    fn test_format_json() {
        let (_, ratings) = sample_ratings();
        let json = format_json(&ratings).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["distribution"]["half"], 1);
        assert_eq!(parsed[0]["text"], "★★★⯪☆");
    }

    #[test]
    fn test_format_scale_summary() {
        let scale = ScaleConfig::new("seven-star", RatingConfig::seven_star());
        let line = format_scale_summary(&scale, true, false);
        assert_eq!(line, "* seven-star  7 stars, max 130, HalfStar, half >= 0.25, ✪◐·");
    }

    #[test]
    fn test_format_scale_summary_full_only() {
        let scale = ScaleConfig::new("full-only", RatingConfig::full_only());
        let line = format_scale_summary(&scale, false, false);
        assert!(line.starts_with("  full-only"));
        assert!(line.contains("no half"));
    }
}
