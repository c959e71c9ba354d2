//! Prompt-side output.
//!
//! Normal output goes to `out`, problems to `err`; both are indented by
//! four spaces so answers stand apart from the prompt line.

use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

const INDENT: &str = "    ";

/// Indented writer pair used by the command loop.
#[derive(Debug)]
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console over the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    /// Create a console over arbitrary writers.
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Print an indented message.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", indent(&text.to_string()))
    }

    /// Print an indented problem report.
    pub fn warn(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.err, "{}", indent(&text.to_string()))?;
        self.err.flush()
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print the prompt without a newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Normal output writer.
    pub fn out(&self) -> &O {
        &self.out
    }

    /// Problem output writer.
    pub fn err(&self) -> &E {
        &self.err
    }
}

fn indent(text: &str) -> String {
    format!("{INDENT}{}", text.replace('\n', &format!("\n{INDENT}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_say_indents_every_line() {
        let mut console = Console::new(Vec::new(), Vec::new());
        console.say("one\ntwo").unwrap();
        assert_eq!(String::from_utf8_lossy(console.out()), "    one\n    two\n");
        assert!(console.err().is_empty());
    }

    #[test]
    fn test_warn_goes_to_err() {
        let mut console = Console::new(Vec::new(), Vec::new());
        console.warn("File does not exist!").unwrap();
        assert!(console.out().is_empty());
        assert_eq!(String::from_utf8_lossy(console.err()), "    File does not exist!\n");
    }
}
