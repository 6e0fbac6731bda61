use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use star_rating::config::{self, Config};
use star_rating::output::{self, OutputFormat};
use star_rating::{RatingConfig, Renderer};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_SCORE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render scores as star ratings
    Render {
        /// Scores to render, each within 0..=max_score of the scale
        #[arg(required = true, allow_negative_numbers = true)]
        scores: Vec<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// List configured scales (default marked with *)
    Scales,
    /// Show sample ratings for the built-in scales (default if no subcommand)
    Demo,
    /// Write the built-in scales to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "star-rating")]
#[command(about = "Render scores as glyph star ratings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/star-rating/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Scale to render with (defaults to the config's default_scale)
    #[arg(short, long, global = true)]
    scale: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Demo);
    let use_colors = output::should_use_colors();

    // Route based on subcommand
    match command {
        Commands::Demo => run_demo(use_colors),
        Commands::Init { force } => std::process::exit(run_init(cli.config, force)),
        Commands::Render { scores, format } => {
            let config = load_validated_config(cli.config);
            let Some(scale) = config.scale(cli.scale.as_deref()) else {
                eprintln!(
                    "Unknown scale '{}'. Available: {}",
                    cli.scale.as_deref().unwrap_or_default(),
                    config.scale_names().join(", ")
                );
                std::process::exit(EXIT_CONFIG);
            };

            if cli.verbose {
                eprintln!("Using scale '{}'", scale.name);
            }

            std::process::exit(run_render(&scale.rating, &scores, format, use_colors));
        }
        Commands::Scales => {
            let config = load_validated_config(cli.config);
            let default = config.scale(None).map(|s| s.name.as_str());
            for scale in &config.scales {
                println!(
                    "{}",
                    output::format_scale_summary(
                        scale,
                        Some(scale.name.as_str()) == default,
                        use_colors
                    )
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the config file, exiting with EXIT_CONFIG on failure.
fn load_validated_config(path: Option<PathBuf>) -> Config {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

/// Render every score, printing successes and reporting out-of-range scores.
/// Returns the process exit code.
fn run_render(rating: &RatingConfig, scores: &[f64], format: OutputFormat, use_colors: bool) -> i32 {
    let renderer = Renderer::new(rating.clone());
    let mut ratings = Vec::new();
    let mut any_failed = false;

    for &score in scores {
        match renderer.rate(score) {
            Ok(r) => ratings.push(r),
            Err(e) => {
                // Continue with other scores
                eprintln!("Invalid score: {}", e);
                any_failed = true;
            }
        }
    }

    if !ratings.is_empty() {
        match format {
            OutputFormat::Plain => {
                println!(
                    "{}",
                    output::format_rating_lines(&ratings, renderer.config(), use_colors)
                )
            }
            OutputFormat::Tsv => println!("{}", output::format_tsv(&ratings)),
            OutputFormat::Json => match output::format_json(&ratings) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Failed to serialize ratings: {}", e);
                    return EXIT_CONFIG;
                }
            },
        }
    }

    if any_failed {
        EXIT_INVALID_SCORE
    } else {
        EXIT_SUCCESS
    }
}

fn run_demo(use_colors: bool) {
    let samples: [(&str, RatingConfig, &[f64]); 3] = [
        ("Full only", RatingConfig::full_only(), &[76.0]),
        ("With half stars", RatingConfig::half_stars(), &[87.0, 100.0, 82.0]),
        ("7-star scale (max 130)", RatingConfig::seven_star(), &[117.0, 81.0]),
    ];

    for (i, (title, rating, scores)) in samples.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", title);
        let renderer = Renderer::new(rating.clone());
        for &score in scores.iter() {
            match renderer.rate(score) {
                Ok(r) => println!(
                    "{}",
                    output::format_rating_line(&r, renderer.config(), use_colors)
                ),
                Err(e) => eprintln!("Invalid score: {}", e),
            }
        }
    }
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path.map_or_else(config::get_config_path, Ok) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if path.exists() && !force {
        eprintln!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
        return EXIT_CONFIG;
    }

    match config::write_config(&path, &Config::default()) {
        Ok(()) => {
            println!("Wrote config to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}
