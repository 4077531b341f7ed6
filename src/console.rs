//! Line-based console boundary
//!
//! The session only talks to the player through [`Console`], so the game can run
//! against the real terminal or against a scripted transcript.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Read and write whole lines
pub trait Console {
    /// Show `prompt` and read one line, without the trailing newline
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying streams.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output
    ///
    /// # Errors
    /// Returns any I/O error from the underlying stream.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over any reader and writer; stdin/stdout by default
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// In-memory console fed from a fixed list of input lines
///
/// Everything written (prompts included) is kept for inspection.
///
/// # Examples
/// ```
/// use hangman::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["yes"]);
/// let answer = console.read_line("Continue? ").unwrap();
/// assert_eq!(answer.as_deref(), Some("yes"));
/// assert_eq!(console.output(), ["Continue? "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every prompt and line written so far
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output joined with newlines
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not consumed yet
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
