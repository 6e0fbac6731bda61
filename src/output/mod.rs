pub mod formatter;

pub use formatter::{
    format_json, format_rating_line, format_rating_lines, format_scale_summary, format_score,
    format_tsv, should_use_colors, OutputFormat,
};
