//! Script execution.
//!
//! [`ScriptRunner`] feeds a command script through a catalog and collects
//! the transcript. Transcript shape:
//!
//! - every command's output body ends with a newline, then a separator
//!   line;
//! - `InsertBook` is silent: no body, no separator;
//! - a failed `DeleteBook` and an empty `FindClosestBook` have empty
//!   bodies, so only their separator appears;
//! - `Quit` prints its notice and a final separator with no trailing
//!   newline, and the rest of the script is ignored;
//! - unrecognized lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::LibraryCatalog;
use crate::common::config::OUTPUT_SUFFIX;
use crate::common::Result;
use crate::ops::command::Command;
use crate::ops::report;

/// Runs command scripts against an owned catalog.
///
/// # Example
/// ```
/// use shelfdb::ops::ScriptRunner;
///
/// let mut runner = ScriptRunner::new();
/// let transcript = runner.run_script(
///     "InsertBook(1, \"Dune\", \"Herbert\", \"Yes\")\nBorrowBook(7, 1, 1)\n",
/// );
/// assert!(transcript.starts_with("Book 1 borrowed by Patron 7\n"));
/// ```
#[derive(Debug, Default)]
pub struct ScriptRunner {
    catalog: LibraryCatalog,
}

impl ScriptRunner {
    /// Create a runner over an empty catalog.
    pub fn new() -> Self {
        Self {
            catalog: LibraryCatalog::new(),
        }
    }

    /// The catalog state after the scripts run so far.
    pub fn catalog(&self) -> &LibraryCatalog {
        &self.catalog
    }

    /// Execute every command in `script` and return the transcript.
    pub fn run_script(&mut self, script: &str) -> String {
        let mut out = String::new();

        for line in script.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse_line(line) {
                Ok(command) => command,
                Err(error) => {
                    warn!(%error, "skipping script line");
                    continue;
                }
            };

            let body = match command {
                Command::InsertBook {
                    id,
                    title,
                    author,
                    availability,
                } => {
                    if let Err(error) = self.catalog.insert_book(id, title, author, availability) {
                        warn!(%error, "insert rejected");
                    }
                    continue;
                }
                Command::Quit => {
                    out.push_str(report::quit_report());
                    out.push('\n');
                    out.push_str(report::SEPARATOR);
                    break;
                }
                Command::PrintBook { id } => {
                    report::print_book_report(self.catalog.book(id).as_ref())
                }
                Command::PrintBooks { lo, hi } => {
                    report::range_report(&self.catalog.books_in_range(lo, hi), lo, hi)
                }
                Command::BorrowBook {
                    patron,
                    id,
                    priority,
                } => report::borrow_report(self.catalog.borrow_book(patron, id, priority), patron, id),
                Command::ReturnBook { patron, id } => {
                    report::return_report(self.catalog.return_book(patron, id), patron, id)
                }
                Command::DeleteBook { id } => match self.catalog.delete_book(id) {
                    Ok(cancelled) => report::delete_report(id, &cancelled),
                    Err(error) => {
                        warn!(%error, "delete rejected");
                        String::new()
                    }
                },
                Command::FindClosestBook { id } => {
                    report::closest_report(&self.catalog.nearest_books(id))
                }
                Command::ColorFlipCount => report::flip_report(self.catalog.color_flip_count()),
            };

            if !body.is_empty() {
                out.push_str(&body);
                out.push('\n');
            }
            out.push_str(report::SEPARATOR);
            out.push('\n');
        }

        out
    }

    /// Run the script in `input` and write the transcript next to it.
    ///
    /// The output file name is the input's stem plus `_output_file.txt`.
    /// Returns the output path.
    ///
    /// # Errors
    /// Returns `Error::Io` if the script cannot be read or the transcript
    /// cannot be written.
    pub fn process_script_file(&mut self, input: &Path) -> Result<PathBuf> {
        let script = fs::read_to_string(input)?;
        let transcript = self.run_script(&script);

        let output = output_path_for(input);
        fs::write(&output, transcript)?;
        info!(input = %input.display(), output = %output.display(), "script processed");
        Ok(output)
    }
}

fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_os_string();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}
