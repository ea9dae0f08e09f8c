//! Line commands typed at the prompt.

use thiserror::Error;
use todo_core::TodoId;

pub const HELP: &str = "\
commands:
  add <title>   add a todo
  done <id>     mark a todo done
  rm <id>       delete a todo (asks first)
  list          refresh and redraw now
  help          show this text
  quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Title exactly as typed; blank titles are dropped by the app.
    Add(String),
    Done(TodoId),
    Remove(TodoId),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs a todo id")]
    MissingId(&'static str),

    #[error("`{0}` is not a todo id")]
    BadId(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match word {
            "add" | "a" => Command::Add(rest.to_string()),
            "done" | "d" => Command::Done(parse_id("done", rest)?),
            "rm" | "delete" => Command::Remove(parse_id("rm", rest)?),
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<TodoId, CommandError> {
    let raw = raw.trim().trim_start_matches('#');
    if raw.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    raw.parse::<i64>()
        .map(TodoId)
        .map_err(|_| CommandError::BadId(raw.to_string()))
}
