pub mod filter;
pub mod formatter;

pub use filter::{filter_records, sort_records, SortOrder};
pub use formatter::{
    format_currency, format_record_detail, format_record_table, format_stats, short_decision,
    should_use_colors,
};
