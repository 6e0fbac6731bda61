pub mod config;
pub mod distributor;
pub mod formatter;
pub mod normalizer;
pub mod renderer;
pub mod validation;

pub use config::RatingConfig;
pub use distributor::{DistributorKind, StarDistribution, StarDistributor};
pub use formatter::{GlyphSet, RatingFormatter};
pub use normalizer::{Normalizer, NormalizerKind};
pub use renderer::{render, render_with, Rating, Renderer};
pub use validation::validate_rating;
