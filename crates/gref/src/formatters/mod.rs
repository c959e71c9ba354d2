//! Output formatting.

pub mod csv;
pub mod text;

pub use text::{adjust, article_label, article_summary, article_summary_wide, wrap};
