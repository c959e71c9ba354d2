//! gref
//!
//! Interactive explorer for the Semantic Scholar citation graph. Search for
//! articles, collect them into named files, grow the collection along
//! references, citations and recommendations, then export it as CSV, text
//! or a Graphviz citation graph.
//!
//! # Example
//!
//! ```no_run
//! use gref::{Config, Console, Context, Repl};
//! use tokio::io::BufReader;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let ctx = Context::new(&config)?;
//!
//!     let mut repl = Repl::new(ctx, Console::stdio());
//!     repl.run(BufReader::new(tokio::io::stdin())).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod formatters;
pub mod models;
pub mod repl;
pub mod similarity;
pub mod store;

pub use actions::Context;
pub use client::SemanticScholarClient;
pub use config::Config;
pub use console::Console;
pub use error::{ClientError, CommandError, RenderError, StoreError};
pub use repl::{Command, Repl, Session, State};
pub use store::RecordStore;
