pub mod formatter;

pub use formatter::{
    describe_condition, format_conditions, format_domains, format_placements, format_score,
    format_score_report, format_score_table, format_tsv, format_yogas, should_use_colors,
};
