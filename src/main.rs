use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use wordlog::protocol::driver::run_session;

/// Reads a command session from the file given as the first argument, or
/// from stdin when no argument is given, and writes responses to stdout.
fn main() {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let mut diag = io::stderr();

    let result = match env::args().nth(1) {
        Some(path) => match File::open(&path) {
            Ok(file) => run_session(BufReader::new(file), &mut output, &mut diag),
            Err(err) => {
                eprintln!("cannot open {}: {}", path, err);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            run_session(stdin.lock(), &mut output, &mut diag)
        }
    };

    if let Err(err) = result {
        eprintln!("session failed: {}", err);
        process::exit(1);
    }
}
