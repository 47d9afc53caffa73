use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::RecordId;

/// A single parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { id: RecordId, content: String },
    Search { word: String, limit: i64 },
    End,
}

impl Command {
    /// Parses one command line.
    ///
    /// `ADD` takes the id as the second whitespace-delimited token; everything
    /// after the single space following the id is verbatim content, so the
    /// content itself may contain spaces. `SEARCH` takes exactly a word and a
    /// limit. Malformed numeric fields report `ErrorKind::Parse`, unknown
    /// verbs `ErrorKind::InvalidInput`.
    pub fn parse(line: &str) -> Result<Command> {
        if line == "END" {
            return Ok(Command::End);
        }
        if let Some(rest) = line.strip_prefix("ADD ") {
            return parse_add(rest);
        }
        if let Some(rest) = line.strip_prefix("SEARCH ") {
            return parse_search(rest);
        }
        Err(Error::new(
            ErrorKind::InvalidInput,
            format!("unknown command: {}", line),
        ))
    }
}

fn parse_add(rest: &str) -> Result<Command> {
    let (id_token, content) = match rest.split_once(' ') {
        Some((id_token, content)) => (id_token, content),
        None => (rest, ""),
    };
    let id: i64 = id_token.parse().map_err(|_| {
        Error::new(ErrorKind::Parse, format!("invalid record id: {}", id_token))
    })?;
    Ok(Command::Add {
        id: RecordId(id),
        content: content.to_string(),
    })
}

fn parse_search(rest: &str) -> Result<Command> {
    let mut tokens = rest.split(' ');
    let word = tokens.next().unwrap_or_default();
    let limit_token = tokens.next().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("SEARCH expects a word and a limit, got: {}", rest),
        )
    })?;
    let limit: i64 = limit_token.parse().map_err(|_| {
        Error::new(
            ErrorKind::Parse,
            format!("invalid search limit: {}", limit_token),
        )
    })?;
    Ok(Command::Search {
        word: word.to_string(),
        limit,
    })
}
