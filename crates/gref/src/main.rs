//! gref - interactive citation-graph explorer.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gref::{Config, Console, Context, Repl, config::defaults};

#[derive(Parser, Debug)]
#[command(name = "gref")]
#[command(about = "Search Semantic Scholar, collect articles and graph their citations")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Directory holding collections and exports
    #[arg(long, env = "GREF_HOME", default_value = defaults::DATA_DIR)]
    data_dir: PathBuf,

    /// Graphviz executable used for PNG/SVG/PDF
    #[arg(long = "dot", env = "GREF_DOT", default_value = defaults::DOT_PROGRAM)]
    dot_program: String,

    /// Articles fetched per GROW cycle
    #[arg(
        long,
        default_value_t = defaults::GROW_BATCH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=100)
    )]
    grow_batch: usize,

    /// Results shown per SEARCH
    #[arg(long, default_value_t = defaults::SEARCH_LIMIT, value_parser = clap::value_parser!(i32).range(1..=100))]
    search_limit: i32,

    /// Similar papers recorded per article (0 disables)
    #[arg(long, default_value_t = defaults::SIMILAR_LIMIT, value_parser = clap::value_parser!(i32).range(0..=500))]
    similar_limit: i32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs share the terminal with the prompt, so keep them off stdout.
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %cli.data_dir.display(),
        "Starting gref"
    );

    let config = Config::new(cli.api_key)
        .with_data_dir(cli.data_dir)
        .with_dot_program(cli.dot_program)
        .with_grow_batch(cli.grow_batch)
        .with_search_limit(cli.search_limit)
        .with_similar_limit(cli.similar_limit);
    let ctx = Context::new(&config)?;

    let mut repl = Repl::new(ctx, Console::stdio());
    repl.run(BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}
