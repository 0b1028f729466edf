//! Line-oriented terminal I/O used by the interactive game.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{bail, Context};

/// Prompts and messages over any reader/writer pair, so games can be scripted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message).context("writing to console")?;
        Ok(())
    }

    /// Print `message` and read the reply, trimmed. End of input is an error.
    pub fn prompt(&mut self, message: impl Display) -> anyhow::Result<String> {
        self.say(message)?;
        self.output.flush().context("flushing console")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from console")?;
        if read == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Show `message` and wait for any line.
    pub fn pause(&mut self, message: impl Display) -> anyhow::Result<()> {
        self.prompt(message).map(|_| ())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
