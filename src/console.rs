//! Line-oriented operator I/O shared by the prompts, reporters and pager.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::config::DIVIDER_WIDTH;

/// Failures talking to the operator.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Standard input reached end-of-file while an answer was expected.
    #[error("input closed before an answer was given")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A prompt/response channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print the dashed section divider.
    pub fn divider(&mut self) -> Result<(), ConsoleError> {
        self.say("-".repeat(DIVIDER_WIDTH))
    }

    /// Print `prompt` without a newline and read one answer line.
    ///
    /// The returned answer has its line terminator removed but is otherwise
    /// verbatim.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_owned();
        log::trace!("prompt {prompt:?} answered {answer:?}");
        Ok(answer)
    }

    /// Wait for the operator to press enter; the answer is ignored.
    pub fn pause(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        self.ask(prompt).map(|_| ())
    }

    /// Consume the console, returning the writer (used to inspect output).
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Whether `answer` is the quit keyword.
pub fn is_quit(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(crate::config::QUIT_KEYWORD)
}
