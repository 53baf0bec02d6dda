use std::io::{BufRead, Write};

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::backend::Backend;

/// Prompt shown before each line: the current result in brackets, if any.
pub fn prompt(result: Option<f64>) -> String {
    match result {
        Some(value) => format!("[{}] > ", value),
        None => "> ".to_string(),
    }
}

/// Source of input lines. `Ok(None)` means the input is exhausted.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read input line"),
        }
    }
}

/// Reads lines from a non-interactive source without echoing prompts.
pub struct Piped<R>(pub R);

impl<R: BufRead> LineReader for Piped<R> {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        let mut line = Vec::new();
        let read = self
            .0
            .read_until(b'\n', &mut line)
            .context("failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and are rejected by the evaluator.
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

enum Command<'a> {
    Exit,
    Clear,
    Blank,
    Token(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Command::Blank
        } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            Command::Exit
        } else if line.eq_ignore_ascii_case("clear") {
            Command::Clear
        } else {
            Command::Token(line)
        }
    }
}

/// Interactive read-eval-print loop over one backend.
pub struct Session {
    backend: Box<dyn Backend>,
}

impl Session {
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Runs until the user exits or the input ends.
    ///
    /// # Arguments
    ///
    /// * `reader` - Where lines come from.
    /// * `out` - Banner, confirmations and the farewell.
    /// * `err` - Evaluation errors.
    pub fn run<R, O, E>(&mut self, reader: &mut R, out: &mut O, err: &mut E) -> anyhow::Result<()>
    where
        R: LineReader + ?Sized,
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        writeln!(out, "RPN calculator - {} mode", self.backend.mode_name())?;
        writeln!(out, "Enter numbers and operators (+, -, *, /), one per line")?;
        writeln!(
            out,
            "Type \"exit\" or \"quit\" to leave, \"clear\" to empty the stack"
        )?;

        loop {
            out.flush()?;
            let Some(line) = reader.read_line(&prompt(self.backend.result()))? else {
                log::debug!("input exhausted, ending session");
                break;
            };

            match Command::parse(&line) {
                Command::Blank => {}
                Command::Exit => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Command::Clear => {
                    self.backend.reset();
                    writeln!(out, "Stack cleared")?;
                }
                Command::Token(token) => {
                    if let Err(e) = self.backend.execute(token) {
                        log::info!("rejected {:?}: {}", token, e);
                        writeln!(err, "Error: {}", e)?;
                    }
                }
            }
        }

        out.flush()?;
        Ok(())
    }
}
