use std::io::{BufRead, Write};

use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::store::Store;
use crate::core::types::Record;
use crate::protocol::command::Command;

/// Runs one line-protocol session to completion.
///
/// The first line carries the store capacity; every following line is a
/// command. `SEARCH` renders the matching ids space-joined, or `NONE` when
/// nothing matches; `END` echoes `END` and finishes the session. All
/// responses are CRLF-terminated. Malformed numeric fields are reported on
/// `diag` and the offending command is skipped; any other bad input aborts
/// the session with an error.
pub fn run_session<R, W, D>(input: R, output: &mut W, diag: &mut D) -> Result<()>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut lines = input.lines();
    let capacity_line = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "empty session: missing capacity line".to_string(),
            ));
        }
    };
    let capacity: usize = capacity_line.trim().parse().map_err(|_| {
        Error::new(
            ErrorKind::Parse,
            format!("invalid capacity: {}", capacity_line),
        )
    })?;

    let mut store = Store::new(Config::with_capacity(capacity));
    for line in lines {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        match Command::parse(line) {
            Ok(Command::Add { id, content }) => store.upsert(id, content),
            Ok(Command::Search { word, limit }) => {
                render_search(output, &store.search(&word, limit))?;
            }
            Ok(Command::End) => {
                output.write_all(b"END\r\n")?;
                return Ok(());
            }
            Err(err) if matches!(err.kind, ErrorKind::Parse) => {
                writeln!(diag, "{}", err)?;
            }
            Err(err) => return Err(err),
        }
    }
    Err(Error::new(
        ErrorKind::InvalidInput,
        "session ended without END".to_string(),
    ))
}

fn render_search<W: Write>(output: &mut W, matches: &[Record]) -> Result<()> {
    if matches.is_empty() {
        output.write_all(b"NONE\r\n")?;
        return Ok(());
    }
    let ids: Vec<String> = matches
        .iter()
        .map(|record| record.id.value().to_string())
        .collect();
    output.write_all(ids.join(" ").as_bytes())?;
    output.write_all(b"\r\n")?;
    Ok(())
}
