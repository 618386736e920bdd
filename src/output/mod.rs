pub mod formatter;

pub use formatter::{
    degree_comment, format_json, format_report, format_tsv, should_use_colors,
};
