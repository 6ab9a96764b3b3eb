//! Response framing for the cmus socket protocol.
//!
//! A response is zero or more non-empty lines closed by a blank line. An
//! error is a single `Error: <message>` line with no guaranteed terminator
//! after it, so every line has to be inspected as it arrives. File names and
//! tags are raw bytes on cmus' side, so lines are decoded lossily.

use std::io::BufRead;
use std::io::ErrorKind;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ClientError;

#[allow(clippy::expect_used)]
fn error_line_regex() -> &'static Regex {
    static ERROR_LINE: OnceLock<Regex> = OnceLock::new();
    ERROR_LINE.get_or_init(|| Regex::new(r"^Error:\s+(.+)\s*$").expect("error line pattern is valid"))
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    End,
    Error(&'a str),
    Data(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::End;
    }
    match error_line_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
    {
        Some(message) => Line::Error(message.as_str()),
        None => Line::Data(line),
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Reads one complete response from `reader`.
///
/// Returns the body lines joined with `\n`. Anything read before an error
/// line, end of stream, or read failure is discarded. After an `Io` error the
/// reader may sit mid-response and must not be reused.
pub(crate) fn read_response<R: BufRead>(reader: &mut R) -> Result<String, ClientError> {
    let mut lines: Vec<String> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ClientError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "connection closed before end of response ({} lines read)",
                    lines.len()
                ),
            )));
        }

        let line = String::from_utf8_lossy(&buf);
        match classify(strip_terminator(&line)) {
            Line::End => return Ok(lines.join("\n")),
            Line::Error(message) => {
                return Err(ClientError::Daemon {
                    message: message.to_string(),
                });
            }
            Line::Data(text) => lines.push(text.to_string()),
        }
    }
}
