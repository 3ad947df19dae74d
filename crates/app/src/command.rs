//! Line commands read from stdin.

use thiserror::Error;

pub const HELP: &str = "\
commands:
  add <record>     submit <record> through the form
  remove <record>  press remove next to <record> in the list
  list             print the records held by the store
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a record")]
    MissingRecord(&'static str),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" if rest.is_empty() => return Err(CommandError::MissingRecord("add")),
            "add" => Self::Add(rest.to_string()),
            "remove" | "rm" if rest.is_empty() => {
                return Err(CommandError::MissingRecord("remove"));
            }
            "remove" | "rm" => Self::Remove(rest.to_string()),
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}
