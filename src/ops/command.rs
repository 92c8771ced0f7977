//! Script command parsing.
//!
//! One command per line, `Name(arg, arg, ...)` shaped. Titles and authors
//! are double-quoted and may contain commas; the splitter only breaks on
//! commas outside quotes.

use crate::catalog::Availability;
use crate::common::{BookId, Error, PatronId, Result};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `InsertBook(id, "title", "author", "Yes"|"No")`
    InsertBook {
        id: BookId,
        title: String,
        author: String,
        availability: Availability,
    },
    /// `PrintBook(id)`
    PrintBook { id: BookId },
    /// `PrintBooks(lo, hi)`
    PrintBooks { lo: BookId, hi: BookId },
    /// `BorrowBook(patron, id, priority)`
    BorrowBook {
        patron: PatronId,
        id: BookId,
        priority: u32,
    },
    /// `ReturnBook(patron, id)`
    ReturnBook { patron: PatronId, id: BookId },
    /// `DeleteBook(id)`
    DeleteBook { id: BookId },
    /// `FindClosestBook(id)`
    FindClosestBook { id: BookId },
    /// `ColorFlipCount()`
    ColorFlipCount,
    /// `Quit()`
    Quit,
}

impl Command {
    /// Parse one script line.
    ///
    /// # Errors
    /// Returns `Error::BadCommand` when the line is not a well-formed
    /// command: unknown name, wrong arity, unparseable number, or a
    /// malformed quoted string.
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = line.split_once('(').ok_or_else(|| bad(line))?;
        let args_text = rest.strip_suffix(')').ok_or_else(|| bad(line))?;
        let args = split_args(args_text);

        match (name, args.as_slice()) {
            ("InsertBook", [id, title, author, availability]) => Ok(Command::InsertBook {
                id: BookId::new(parse_number(id, line)?),
                title: parse_quoted(title, line)?,
                author: parse_quoted(author, line)?,
                availability: parse_availability(availability, line)?,
            }),
            ("PrintBook", [id]) => Ok(Command::PrintBook {
                id: BookId::new(parse_number(id, line)?),
            }),
            ("PrintBooks", [lo, hi]) => Ok(Command::PrintBooks {
                lo: BookId::new(parse_number(lo, line)?),
                hi: BookId::new(parse_number(hi, line)?),
            }),
            ("BorrowBook", [patron, id, priority]) => Ok(Command::BorrowBook {
                patron: PatronId::new(parse_number(patron, line)?),
                id: BookId::new(parse_number(id, line)?),
                priority: parse_number(priority, line)?,
            }),
            ("ReturnBook", [patron, id]) => Ok(Command::ReturnBook {
                patron: PatronId::new(parse_number(patron, line)?),
                id: BookId::new(parse_number(id, line)?),
            }),
            ("DeleteBook", [id]) => Ok(Command::DeleteBook {
                id: BookId::new(parse_number(id, line)?),
            }),
            ("FindClosestBook", [id]) => Ok(Command::FindClosestBook {
                id: BookId::new(parse_number(id, line)?),
            }),
            ("ColorFlipCount", []) => Ok(Command::ColorFlipCount),
            ("Quit", []) => Ok(Command::Quit),
            _ => Err(bad(line)),
        }
    }
}

fn bad(line: &str) -> Error {
    Error::BadCommand(line.to_string())
}

/// Split the text between the parentheses on commas outside quotes.
///
/// Empty input yields no arguments; a dangling comma yields an empty
/// argument, which the arity match then rejects.
fn split_args(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                args.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !args.is_empty() || !current.trim().is_empty() {
        args.push(current.trim().to_string());
    }
    args
}

fn parse_number(text: &str, line: &str) -> Result<u32> {
    text.parse().map_err(|_| bad(line))
}

fn parse_quoted(text: &str, line: &str) -> Result<String> {
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .ok_or_else(|| bad(line))?;
    if inner.is_empty() {
        return Err(bad(line));
    }
    Ok(inner.to_string())
}

fn parse_availability(text: &str, line: &str) -> Result<Availability> {
    let flag = parse_quoted(text, line)?;
    Availability::parse(&flag).ok_or_else(|| bad(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert() {
        let command = Command::parse_line(r#"InsertBook(1, "Dune", "Herbert", "Yes")"#).unwrap();
        assert_eq!(
            command,
            Command::InsertBook {
                id: BookId::new(1),
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                availability: Availability::Available,
            }
        );
    }

    #[test]
    fn test_parse_insert_with_comma_in_title() {
        let command =
            Command::parse_line(r#"InsertBook(2, "Dune, Part Two", "Herbert", "No")"#).unwrap();
        assert_eq!(
            command,
            Command::InsertBook {
                id: BookId::new(2),
                title: "Dune, Part Two".to_string(),
                author: "Herbert".to_string(),
                availability: Availability::Borrowed,
            }
        );
    }

    #[test]
    fn test_parse_numeric_commands() {
        assert_eq!(
            Command::parse_line("PrintBook(42)").unwrap(),
            Command::PrintBook { id: BookId::new(42) }
        );
        assert_eq!(
            Command::parse_line("PrintBooks(10, 60)").unwrap(),
            Command::PrintBooks {
                lo: BookId::new(10),
                hi: BookId::new(60),
            }
        );
        assert_eq!(
            Command::parse_line("BorrowBook(7, 42, 1)").unwrap(),
            Command::BorrowBook {
                patron: PatronId::new(7),
                id: BookId::new(42),
                priority: 1,
            }
        );
        assert_eq!(
            Command::parse_line("ReturnBook(7, 42)").unwrap(),
            Command::ReturnBook {
                patron: PatronId::new(7),
                id: BookId::new(42),
            }
        );
        assert_eq!(
            Command::parse_line("DeleteBook(42)").unwrap(),
            Command::DeleteBook { id: BookId::new(42) }
        );
        assert_eq!(
            Command::parse_line("FindClosestBook(42)").unwrap(),
            Command::FindClosestBook { id: BookId::new(42) }
        );
    }

    #[test]
    fn test_parse_nullary_commands() {
        assert_eq!(
            Command::parse_line("ColorFlipCount()").unwrap(),
            Command::ColorFlipCount
        );
        assert_eq!(Command::parse_line("Quit()").unwrap(), Command::Quit);
        assert_eq!(Command::parse_line("  Quit()  ").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        for line in [
            "",
            "Quit",
            "Quit(now)",
            "OpenLibrary()",
            "PrintBook()",
            "PrintBook(a)",
            "PrintBooks(1)",
            "PrintBooks(1,)",
            r#"InsertBook(1, Dune, "Herbert", "Yes")"#,
            r#"InsertBook(1, "", "Herbert", "Yes")"#,
            r#"InsertBook(1, "Dune", "Herbert", "Maybe")"#,
        ] {
            assert!(Command::parse_line(line).is_err(), "accepted: {:?}", line);
        }
    }
}
