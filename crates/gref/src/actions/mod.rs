//! Command implementations.
//!
//! Each module does one job for the command loop:
//! 1. `search`: query the provider and fetch articles into a collection
//! 2. `grow`: expand a collection along its citation links
//! 3. `export` / `graph`: project a collection into CSV, text or Graphviz
//! 4. `render`: hand the Graphviz source to the external renderer

mod export;
mod graph;
mod grow;
mod render;
mod search;

pub use export::{csv_table, text_summaries, word_pair_report};
pub use graph::CitationGraph;
pub use grow::{GrowReport, frontier, grow};
pub use render::{DotRenderer, GraphRenderer, ImageFormat, RenderJob};
pub use search::{AddReport, add_articles, fetch_article, search};

use std::sync::Arc;

use crate::client::SemanticScholarClient;
use crate::config::Config;
use crate::store::RecordStore;

/// Everything a command needs besides the session.
pub struct Context {
    /// API client.
    pub client: Arc<SemanticScholarClient>,

    /// Collection storage.
    pub store: RecordStore,

    /// Graph image renderer.
    pub renderer: Arc<dyn GraphRenderer>,

    /// Search results displayed per query.
    pub search_limit: i32,

    /// Articles fetched per GROW cycle.
    pub grow_batch: usize,

    /// Recommendations stored per article.
    pub similar_limit: i32,
}

impl Context {
    /// Build the client, store and `dot` renderer described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = SemanticScholarClient::new(config)?;
        Ok(Self {
            client: Arc::new(client),
            store: RecordStore::new(&config.data_dir),
            renderer: Arc::new(DotRenderer::new(&config.dot_program)),
            search_limit: config.search_limit,
            grow_batch: config.grow_batch,
            similar_limit: config.similar_limit,
        })
    }

    /// Replace the renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn GraphRenderer>) -> Self {
        self.renderer = renderer;
        self
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("client", &self.client)
            .field("store", &self.store)
            .field("renderer", &self.renderer.program())
            .finish()
    }
}
