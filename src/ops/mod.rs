//! Script-facing surface: command parsing, report formatting, execution.

pub mod command;
pub mod report;
mod runner;

pub use command::Command;
pub use runner::ScriptRunner;
