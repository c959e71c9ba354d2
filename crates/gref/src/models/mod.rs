//! Data models.
//!
//! `Paper` and friends mirror the Semantic Scholar API schema (camelCase,
//! `#[serde(default)]` on optional fields). `Article` and `Collection` are
//! the records gref keeps on disk.

mod article;
mod author;
mod collection;
mod paper;

pub use article::Article;
pub use author::AuthorRef;
pub use collection::Collection;
pub use paper::{
    ExternalIds, Paper, PaperRef, RecommendationResult, SearchResult,
};
