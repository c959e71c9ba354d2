//! Command parsing and the per-state legality table.

use std::fmt;
use std::str::FromStr;

use crate::actions::ImageFormat;
use crate::error::{CommandError, CommandResult};

use super::session::State;

/// Word pairs printed by `TXT DIWORDS` when no count is given.
pub const DEFAULT_TOP_PAIRS: usize = 10;

/// States in which a verb may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Both states.
    Any,
    /// Only with no collection active.
    Idle,
    /// Only with a collection active.
    Active,
}

impl Scope {
    /// Whether this scope includes `state`.
    #[must_use]
    pub const fn allows(self, state: State) -> bool {
        matches!(
            (self, state),
            (Self::Any, _) | (Self::Idle, State::Idle) | (Self::Active, State::Active)
        )
    }
}

/// First word of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Exit,
    Help,
    Search,
    Add,
    Load,
    Rm,
    Peek,
    Unload,
    Grow,
    Gv,
    Png,
    Svg,
    Pdf,
    Csv,
    Txt,
}

impl Verb {
    /// Every verb, in help order.
    pub const ALL: [Self; 15] = [
        Self::Exit,
        Self::Help,
        Self::Search,
        Self::Add,
        Self::Load,
        Self::Rm,
        Self::Peek,
        Self::Unload,
        Self::Grow,
        Self::Gv,
        Self::Png,
        Self::Svg,
        Self::Pdf,
        Self::Csv,
        Self::Txt,
    ];

    /// Upper-case spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exit => "EXIT",
            Self::Help => "HELP",
            Self::Search => "SEARCH",
            Self::Add => "ADD",
            Self::Load => "LOAD",
            Self::Rm => "RM",
            Self::Peek => "PEEK",
            Self::Unload => "UNLOAD",
            Self::Grow => "GROW",
            Self::Gv => "GV",
            Self::Png => "PNG",
            Self::Svg => "SVG",
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Txt => "TXT",
        }
    }

    /// Where the verb is legal.
    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Exit | Self::Help | Self::Search | Self::Add | Self::Peek => Scope::Any,
            Self::Load | Self::Rm => Scope::Idle,
            Self::Unload
            | Self::Grow
            | Self::Gv
            | Self::Png
            | Self::Svg
            | Self::Pdf
            | Self::Csv
            | Self::Txt => Scope::Active,
        }
    }

    /// Whether the verb may be used in `state`.
    #[must_use]
    pub const fn allowed_in(self, state: State) -> bool {
        self.scope().allows(state)
    }

    /// Argument synopsis for HELP.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Exit | Self::Help | Self::Peek | Self::Unload | Self::Gv | Self::Csv => "",
            Self::Search => "<query>",
            Self::Add => "<name> | <id>...",
            Self::Load | Self::Rm => "<name>",
            Self::Grow => "[cycles]",
            Self::Png | Self::Svg | Self::Pdf => "[dpi]",
            Self::Txt => "[DIWORDS [n]]",
        }
    }

    /// One-line description for HELP.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Exit => "save and quit",
            Self::Help => "show this table",
            Self::Search => "search for articles",
            Self::Add => "create a file (α) or add articles by ID (δ)",
            Self::Load => "open a file",
            Self::Rm => "delete a file and its exports",
            Self::Peek => "list files (α) or count articles (δ)",
            Self::Unload => "save and close the file",
            Self::Grow => "add the most-linked missing articles",
            Self::Gv => "write the citation graph",
            Self::Png => "render the graph as PNG",
            Self::Svg => "render the graph as SVG",
            Self::Pdf => "render the graph as PDF",
            Self::Csv => "write a table of articles",
            Self::Txt => "write summaries, or word-pair counts",
        }
    }

    fn state_error(self, state: State) -> CommandError {
        let hint = match state {
            State::Idle => "No file loaded! (try `ADD` or `LOAD`)",
            State::Active => "Close the file first! (try `UNLOAD`)",
        };
        CommandError::usage(format!("`{}` is not available here. {hint}", self.name()))
    }
}

impl FromStr for Verb {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommandError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed, state-checked command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Search { query: String },
    /// `ADD <name>` while idle.
    Create { name: String },
    Load { name: String },
    Remove { name: String },
    /// `PEEK` while idle.
    List,
    Unload,
    /// `ADD <id>...` while active.
    Fetch { ids: Vec<String> },
    /// `PEEK` while active.
    Status,
    Grow { cycles: u32 },
    Graph,
    Render { format: ImageFormat, dpi: Option<u32> },
    Table,
    Text,
    WordPairs { top: usize },
}

impl Command {
    /// Parse one input line in the context of `state`.
    ///
    /// # Errors
    ///
    /// Returns a usage error for an empty line, a verb illegal in `state`,
    /// or missing or malformed arguments, and [`CommandError::Unknown`] for
    /// an unrecognized verb.
    pub fn parse(line: &str, state: State) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::usage("No command provided! (try `HELP`)"));
        };
        let verb: Verb = first.parse()?;
        if !verb.allowed_in(state) {
            return Err(verb.state_error(state));
        }
        let args: Vec<&str> = words.collect();

        let command = match verb {
            Verb::Exit => Self::Exit,
            Verb::Help => Self::Help,
            Verb::Search => {
                if args.is_empty() {
                    return Err(CommandError::usage("No query provided!"));
                }
                Self::Search { query: args.join(" ") }
            }
            Verb::Add => match state {
                State::Idle => Self::Create { name: single_name(&args)? },
                State::Active => {
                    if args.is_empty() {
                        return Err(CommandError::usage("No IDs provided!"));
                    }
                    Self::Fetch { ids: args.iter().map(ToString::to_string).collect() }
                }
            },
            Verb::Load => Self::Load { name: single_name(&args)? },
            Verb::Rm => Self::Remove { name: single_name(&args)? },
            Verb::Peek => match state {
                State::Idle => Self::List,
                State::Active => Self::Status,
            },
            Verb::Unload => Self::Unload,
            Verb::Grow => Self::Grow { cycles: number(args.first().copied())?.unwrap_or(1) },
            Verb::Gv => Self::Graph,
            Verb::Png => Self::Render { format: ImageFormat::Png, dpi: number(args.first().copied())? },
            Verb::Svg => Self::Render { format: ImageFormat::Svg, dpi: number(args.first().copied())? },
            Verb::Pdf => Self::Render { format: ImageFormat::Pdf, dpi: number(args.first().copied())? },
            Verb::Csv => Self::Table,
            Verb::Txt => match args.as_slice() {
                [] => Self::Text,
                [option, rest @ ..] if option.eq_ignore_ascii_case("DIWORDS") => Self::WordPairs {
                    top: number(rest.first().copied())?.unwrap_or(DEFAULT_TOP_PAIRS),
                },
                [option, ..] => {
                    return Err(CommandError::usage(format!(
                        "Unknown option `{option}`! (try `TXT DIWORDS`)"
                    )));
                }
            },
        };

        tracing::debug!(?command, %state, "Parsed command");
        Ok(command)
    }
}

fn single_name(args: &[&str]) -> CommandResult<String> {
    match args {
        [] => Err(CommandError::usage("No filename provided!")),
        [name] => Ok((*name).to_string()),
        _ => Err(CommandError::usage("Filenames cannot contain spaces!")),
    }
}

fn number<T: FromStr>(arg: Option<&str>) -> CommandResult<Option<T>> {
    arg.map(|a| a.parse().map_err(|_| CommandError::usage("Non-numeric argument!")))
        .transpose()
}
