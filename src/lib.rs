//! Render bounded numeric scores as fixed-width glyph star ratings.
//!
//! ```
//! use star_rating::{render, RatingConfig};
//!
//! let config = RatingConfig::half_stars();
//! assert_eq!(render(&config, 76.0).unwrap(), "★★★⯪☆");
//! assert!(render(&config, 101.0).is_err());
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod rating;

pub use error::RatingError;
pub use rating::{
    render, render_with, DistributorKind, GlyphSet, NormalizerKind, Rating, RatingConfig,
    Renderer, StarDistribution,
};
