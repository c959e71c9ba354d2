//! Interactive command loop.

mod command;
mod session;

pub use command::{Command, DEFAULT_TOP_PAIRS, Scope, Verb};
pub use session::{Session, State};

use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::actions::{
    self, CitationGraph, Context, RenderJob, add_articles, csv_table, grow, text_summaries,
    word_pair_report,
};
use crate::console::Console;
use crate::error::{CommandError, CommandResult};
use crate::formatters::article_summary;
use crate::models::Collection;

/// Export kind of the Graphviz source.
const GRAPH_KIND: &str = "gv";
/// Export kind of word-pair statistics.
const PAIRS_KIND: &str = "diwords";

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command loop over a context, a session and a console.
pub struct Repl<O, E> {
    ctx: Context,
    session: Session,
    console: Console<O, E>,
}

impl<O: Write, E: Write> Repl<O, E> {
    /// Start idle.
    pub fn new(ctx: Context, console: Console<O, E>) -> Self {
        Self { ctx, session: Session::new(), console }
    }

    /// Current session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Console, for inspecting captured output.
    pub const fn console(&self) -> &Console<O, E> {
        &self.console
    }

    /// Prompt for the current state, e.g. `α > `.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("\n{} > ", self.session.state().symbol())
    }

    /// Read and execute lines until `EXIT`, end of input or Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns only fatal errors (console or store I/O).
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> CommandResult<()> {
        let mut lines = input.lines();
        self.console.blank()?;
        self.console.say("Welcome :-)")?;

        loop {
            let prompt = self.prompt();
            self.console.prompt(&prompt)?;
            let next = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    self.console.warn("\n\nPrompt killed!")?;
                    None
                }
            };
            self.console.blank()?;

            let flow = match next {
                Some(line) => self.handle_line(&line).await?,
                // End of input behaves like EXIT.
                None => self.handle_command(Command::Exit).await?,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parse and execute one line, printing non-fatal errors.
    ///
    /// # Errors
    ///
    /// Returns fatal errors only.
    pub async fn handle_line(&mut self, line: &str) -> CommandResult<Flow> {
        match Command::parse(line, self.session.state()) {
            Ok(command) => self.handle_command(command).await,
            Err(e) => self.report(e),
        }
    }

    /// Execute a parsed command, printing non-fatal errors.
    ///
    /// # Errors
    ///
    /// Returns fatal errors only.
    pub async fn handle_command(&mut self, command: Command) -> CommandResult<Flow> {
        match self.execute(command).await {
            Ok(flow) => Ok(flow),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: CommandError) -> CommandResult<Flow> {
        if error.is_fatal() {
            tracing::error!(error = %error, "Fatal error");
            return Err(error);
        }
        tracing::debug!(error = %error, "Command failed");
        self.console.warn(error.to_user_message())?;
        Ok(Flow::Continue)
    }

    async fn execute(&mut self, command: Command) -> CommandResult<Flow> {
        match command {
            Command::Exit => {
                self.save_active()?;
                return Ok(Flow::Exit);
            }
            Command::Help => {
                self.console.say("Helping...")?;
                self.console.say(help_table())?;
            }
            Command::Search { query } => {
                self.console.say("Searching...")?;
                let results = actions::search(&self.ctx, &query).await?;
                if results.is_empty() {
                    self.console.warn("No results!")?;
                } else {
                    let summaries: Vec<String> = results.iter().map(article_summary).collect();
                    self.console.say(summaries.join("\n\n"))?;
                }
            }
            Command::Create { name } => {
                let collection = self.ctx.store.create(&name)?;
                self.console.say("Making...")?;
                self.session.activate(collection);
            }
            Command::Load { name } => {
                let collection = self.ctx.store.load(&name)?;
                self.console.say("Loading...")?;
                self.console.say(format!("{} articles", collection.len()))?;
                self.session.activate(collection);
            }
            Command::Remove { name } => {
                for path in self.ctx.store.remove(&name)? {
                    self.console.say(format!("Removed {}...", path.display()))?;
                }
            }
            Command::List => {
                let names = self.ctx.store.peek()?;
                if names.is_empty() {
                    self.console.warn("No files found!")?;
                } else {
                    let lines: Vec<String> = names.iter().map(|n| format!("  - {n}")).collect();
                    self.console.say(format!("Files found:\n{}", lines.join("\n")))?;
                }
            }
            Command::Unload => {
                self.save_active()?;
                self.console.say("Unloading...")?;
                self.session.deactivate();
            }
            Command::Status => {
                let collection = self.active()?;
                let text = format!("{}: {} articles", collection.name, collection.len());
                self.console.say("Peeking...")?;
                self.console.say(text)?;
            }
            Command::Fetch { ids } => {
                self.console.say("Adding...")?;
                let collection = self.session.active_mut().ok_or_else(no_active)?;
                let report = add_articles(&self.ctx, collection, &ids, &mut self.console).await?;
                self.save_active()?;
                tracing::info!(
                    added = report.added.len(),
                    skipped = report.skipped.len(),
                    failed = report.failed.len(),
                    "Add finished"
                );
            }
            Command::Grow { cycles } => {
                self.console.say("Growing...")?;
                let collection = self.session.active_mut().ok_or_else(no_active)?;
                let finished = tokio::select! {
                    report = grow(&self.ctx, collection, cycles, &mut self.console) => Some(report?),
                    _ = tokio::signal::ctrl_c() => None,
                };
                match finished {
                    Some(report) => self.console.say(format!(
                        "Grew by {} articles in {} cycles ({} failed).",
                        report.added.len(),
                        report.cycles,
                        report.failed.len()
                    ))?,
                    None => {
                        tracing::info!("Grow interrupted");
                        self.console.warn("Aborted!")?;
                    }
                }
                self.save_active()?;
            }
            Command::Graph => {
                let path = self.write_graph()?;
                self.wrote(&path)?;
            }
            Command::Render { format, dpi } => {
                let source = self.write_graph()?;
                let name = self.active()?.name.clone();
                let output = self.ctx.store.export_path(&name, format.extension())?;
                let job = RenderJob { source, output, format, dpi };
                self.console.say(job.command_line(self.ctx.renderer.program()))?;
                self.ctx.renderer.render(&job).await?;
                self.wrote(&job.output)?;
            }
            Command::Table => {
                let collection = self.active()?;
                let path = self.ctx.store.write_export(&collection.name, "csv", &csv_table(collection))?;
                self.wrote(&path)?;
            }
            Command::Text => {
                let collection = self.active()?;
                let path =
                    self.ctx.store.write_export(&collection.name, "txt", &text_summaries(collection))?;
                self.wrote(&path)?;
            }
            Command::WordPairs { top } => {
                let collection = self.active()?;
                let (body, ranked) = word_pair_report(collection);
                let path = self.ctx.store.write_export(&collection.name, PAIRS_KIND, &body)?;
                self.wrote(&path)?;

                let lines: Vec<String> =
                    ranked.iter().take(top).map(|(pair, count)| format!("{count:>6}  {pair}")).collect();
                if !lines.is_empty() {
                    self.console.say(lines.join("\n"))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn active(&self) -> CommandResult<&Collection> {
        self.session.active().ok_or_else(no_active)
    }

    fn save_active(&self) -> CommandResult<()> {
        if let Some(collection) = self.session.active() {
            self.ctx.store.save(collection)?;
        }
        Ok(())
    }

    fn write_graph(&self) -> CommandResult<PathBuf> {
        let collection = self.active()?;
        let graph = CitationGraph::build(collection);
        tracing::debug!(
            nodes = graph.articles().len(),
            edges = graph.edge_count(),
            "Built citation graph"
        );
        Ok(self.ctx.store.write_export(&collection.name, GRAPH_KIND, &graph.to_dot())?)
    }

    fn wrote(&mut self, path: &std::path::Path) -> CommandResult<()> {
        self.console.say(format!("Wrote {}...", path.display()))?;
        Ok(())
    }
}

impl<O, E> std::fmt::Debug for Repl<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repl")
            .field("ctx", &self.ctx)
            .field("session", &self.session)
            .finish()
    }
}

fn no_active() -> CommandError {
    CommandError::usage("No file loaded! (try `ADD` or `LOAD`)")
}

/// Verb table for HELP.
#[must_use]
pub fn help_table() -> String {
    let rows: Vec<String> = Verb::ALL
        .iter()
        .map(|verb| {
            let states = match verb.scope() {
                Scope::Any => "αδ",
                Scope::Idle => "α ",
                Scope::Active => " δ",
            };
            let synopsis = format!("{} {}", verb.name(), verb.usage());
            format!("{states}  {synopsis:<26}{}", verb.summary())
        })
        .collect();
    rows.join("\n")
}
