//! Synchronous questions to the user

use crossbeam_channel::Receiver;
use std::io::{self, Write};

/// Asks the user for a line of text
pub trait Prompter {
    /// Show `message` and wait for an answer; `None` when cancelled
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Prompts on stdout and takes the next line from the input channel
pub struct ConsolePrompter<'a> {
    lines: &'a Receiver<String>,
}

impl<'a> ConsolePrompter<'a> {
    pub fn new(lines: &'a Receiver<String>) -> Self {
        Self { lines }
    }
}

impl Prompter for ConsolePrompter<'_> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{}: ", message);
        let _ = io::stdout().flush();

        self.lines
            .recv()
            .ok()
            .map(|line| line.trim_end_matches(['\r', '\n']).to_string())
    }
}
