//! Shell commands
//!
//! One line of input maps to one [`Command`], the terminal counterpart of a
//! button press or an input change.

use bookshelf_core::{BookId, BookshelfError, FormField};
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  set <field> <value>   change a form field (id, title, author, genre, price, publishedYear, stock)
  add                   add the book in the form
  update                save the book being edited
  submit                add or update, depending on the form mode
  cancel                clear the form and leave edit mode
  edit <id>             load a listed book into the form
  delete <id>           delete a book
  lookup [id]           fetch a single book (optionally setting the ID first)
  refresh               reload the book list
  show                  redraw the screen
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FormField, value: String },
    Add,
    Update,
    Submit,
    Cancel,
    Edit(BookId),
    Delete(BookId),
    Lookup(Option<String>),
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a book ID: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Field(#[from] BookshelfError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        argument: "field",
                    });
                }
                Ok(Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "add" => Ok(Command::Add),
            "update" => Ok(Command::Update),
            "submit" => Ok(Command::Submit),
            "cancel" | "reset" => Ok(Command::Cancel),
            "edit" => parse_id("edit", rest).map(Command::Edit),
            "delete" => parse_id("delete", rest).map(Command::Delete),
            "lookup" | "get" => Ok(Command::Lookup(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "refresh" | "list" => Ok(Command::Refresh),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<BookId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "id",
        });
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}
