use super::config::RatingConfig;

/// Validate a rating configuration.
/// Returns all validation errors at once (not just the first).
///
/// `prefix` names the config location in messages, e.g. `scales[0].rating`.
pub fn validate_rating(config: &RatingConfig, prefix: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.max_score == 0 {
        errors.push(format!("{}.max_score: must be greater than 0", prefix));
    }

    if config.star_count == 0 {
        errors.push(format!("{}.star_count: must be greater than 0", prefix));
    }

    // NaN fails contains() as well
    if !(0.0..=1.0).contains(&config.half_threshold) {
        errors.push(format!(
            "{}.half_threshold: must be between 0 and 1, got {}",
            prefix, config.half_threshold
        ));
    }

    let glyphs = [
        ("filled", &config.glyphs.filled),
        ("half", &config.glyphs.half),
        ("empty", &config.glyphs.empty),
    ];
    for (name, glyph) in glyphs {
        if glyph.is_empty() {
            errors.push(format!("{}.glyphs.{}: must not be empty", prefix, name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
