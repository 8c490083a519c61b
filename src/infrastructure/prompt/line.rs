//! Line Confirmer
//!
//! Reads one answer line per question. Used when stdin is not a terminal
//! and in tests.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use crate::domain::ports::Confirmer;

const RETRY_HINT: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').";

/// Interpret one answer line. `None` means the answer is not valid.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

struct Io<R, W> {
    input: R,
    output: W,
}

/// Yes/no confirmer over a reader and writer.
///
/// Invalid answers re-ask; end of input answers with the default.
pub struct LineConfirmer<R, W> {
    io: Mutex<Io<R, W>>,
}

impl<R: BufRead + Send, W: Write + Send> LineConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new(Io { input, output }),
        }
    }
}

impl LineConfirmer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> Confirmer for LineConfirmer<R, W> {
    fn confirm(&self, question: &str, default: bool) -> bool {
        let Ok(mut io) = self.io.lock() else {
            return default;
        };
        let Io { input, output } = &mut *io;
        let hint = if default { "[Y/n]" } else { "[y/N]" };

        loop {
            let _ = write!(output, "{question} {hint} ");
            let _ = output.flush();

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let _ = writeln!(output);
                    return default;
                }
                Ok(_) => {}
            }

            match parse_answer(&line, default) {
                Some(answer) => return answer,
                None => {
                    let _ = writeln!(output, "{RETRY_HINT}");
                }
            }
        }
    }
}
