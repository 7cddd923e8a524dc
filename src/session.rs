use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::config::RESTART_KEYWORD;
use crate::console::{is_quit, Console};
use crate::data::loader::load_data;
use crate::prompt::get_filters;
use crate::report::{duration, raw, station, time, user};

const CONFIRM_PROMPT: &str = "Press enter to continue, or quit to stop the program.";
const RAW_PROMPT: &str = "Would you like to see the raw data [y/n]?";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

// ---------------------------------------------------------------------------
// Session outcome
// ---------------------------------------------------------------------------

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator typed the quit keyword at a confirm gate.
    Quit,
    /// The operator declined to restart.
    Finished,
}

/// Result of one pass through the statistics.
enum Iteration {
    Restart,
    End(SessionEnd),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The interactive explore loop over one console.
pub struct Session<R, W> {
    console: Console<R, W>,
    data_dir: PathBuf,
    iterations: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            console,
            data_dir: data_dir.into(),
            iterations: 0,
        }
    }

    /// Run iterations until the operator quits or declines to restart.
    ///
    /// Dataset and console failures end the session with an error.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.iterations += 1;
            log::debug!("session iteration {}", self.iterations);
            match self.iteration()? {
                Iteration::Restart => continue,
                Iteration::End(end) => {
                    log::info!(
                        "session ended ({end:?}) after {} iteration(s)",
                        self.iterations
                    );
                    return Ok(end);
                }
            }
        }
    }

    /// Number of iterations started so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consume the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// `PROMPT_FILTERS → LOAD → TIME → STATION → DURATION → USER → RAW? → RESTART?`,
    /// with a quit gate after each of the first three reporters.
    fn iteration(&mut self) -> Result<Iteration> {
        let selection = get_filters(&mut self.console)?;
        let table = load_data(&self.data_dir, &selection)?;

        time::report(&mut self.console, &table, &selection)?;
        if self.quit_requested()? {
            return Ok(Iteration::End(SessionEnd::Quit));
        }

        station::report(&mut self.console, &table)?;
        if self.quit_requested()? {
            return Ok(Iteration::End(SessionEnd::Quit));
        }

        duration::report(&mut self.console, &table)?;
        if self.quit_requested()? {
            return Ok(Iteration::End(SessionEnd::Quit));
        }

        user::report(&mut self.console, &table)?;

        let see_raw = self.console.ask(RAW_PROMPT)?;
        if wants_raw(&see_raw) {
            raw::page_through(&mut self.console, &table)?;
        }

        let restart = self.console.ask(RESTART_PROMPT)?;
        if restart.trim().eq_ignore_ascii_case(RESTART_KEYWORD) {
            Ok(Iteration::Restart)
        } else {
            Ok(Iteration::End(SessionEnd::Finished))
        }
    }

    fn quit_requested(&mut self) -> Result<bool> {
        let answer = self.console.ask(CONFIRM_PROMPT)?;
        Ok(is_quit(&answer))
    }
}

fn wants_raw(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
