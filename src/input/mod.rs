//! Console input: command parsing, the stdin reader and prompts

pub mod command;
pub mod console;
pub mod prompt;

pub use command::{Command, HELP};
pub use console::spawn_stdin_reader;
pub use prompt::{ConsolePrompter, Prompter};
