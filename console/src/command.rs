//! Line commands typed at the prompt.

use student_core::{Field, StudentId};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list | refresh        reload students from the server
  add                   open the form for a new student
  edit <id>             open the form pre-filled with a student
  delete <id>           delete a student (asks first)
  set <field> <value>   fill a form field (name, email, age)
  show                  print the table and the open form again
  submit                save the open form
  close                 close the form without saving
  help                  this text
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Add,
    Edit(StudentId),
    Delete(StudentId),
    Set(Field, String),
    Show,
    Submit,
    Close,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("unknown field `{0}`, expected name, email or age")]
    UnknownField(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "refresh" | "ls" => Command::Refresh,
        "add" | "new" => Command::Add,
        "edit" => Command::Edit(id_arg("edit", rest)?),
        "delete" | "rm" => Command::Delete(id_arg("delete", rest)?),
        "set" => set_arg(rest)?,
        "show" => Command::Show,
        "submit" | "save" => Command::Submit,
        "close" | "cancel" => Command::Close,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn id_arg(command: &'static str, rest: &str) -> Result<StudentId, ParseError> {
    // Accept the `#7` form the table prints.
    let id = rest.strip_prefix('#').unwrap_or(rest);
    if id.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            what: "a student id",
        });
    }
    Ok(StudentId::new(id))
}

fn set_arg(rest: &str) -> Result<Command, ParseError> {
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    let field = match name.to_ascii_lowercase().as_str() {
        "" => {
            return Err(ParseError::MissingArgument {
                command: "set",
                what: "a field and a value",
            })
        }
        "name" => Field::Name,
        "email" => Field::Email,
        "age" => Field::Age,
        other => return Err(ParseError::UnknownField(other.to_string())),
    };
    Ok(Command::Set(field, value.to_string()))
}
