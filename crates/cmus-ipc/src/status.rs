//! The `status` dump and its typed form.
//!
//! cmus answers `status` with one `keyword value...` line per field. Track
//! metadata and player settings use a second name column:
//!
//! ```text
//! status playing
//! file /music/The Naked and Famous/07 Young Blood.m4a
//! duration 246
//! position 13
//! tag artist The Naked and Famous
//! set shuffle false
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ClientError;

/// Snapshot of cmus state at the time `status` was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub playing: bool,
    pub file: String,
    /// Track length in seconds.
    pub duration: u64,
    /// Playback position in seconds.
    pub position: u64,
    pub tags: BTreeMap<String, String>,
    pub settings: BTreeMap<String, String>,
}

impl Status {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    pub fn setting(&self, name: &str) -> Option<&str> {
        self.settings.get(name).map(String::as_str)
    }

    /// Position and duration as `MM:SS / MM:SS`, e.g. `01:30 / 02:00`.
    pub fn time(&self) -> String {
        format_time(self.position, self.duration)
    }
}

impl FromStr for Status {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_status(s)
    }
}

/// Formats a pair of second counts as `MM:SS / MM:SS`.
///
/// Minutes are not wrapped into hours, so long tracks read `166:40`.
pub fn format_time(position: u64, duration: u64) -> String {
    format!(
        "{:02}:{:02} / {:02}:{:02}",
        position / 60,
        position % 60,
        duration / 60,
        duration % 60
    )
}

fn parse_seconds(value: &str, field: &str) -> Result<u64, ClientError> {
    value
        .parse::<u64>()
        .map_err(|_| ClientError::parse(format!("{field} not numeric: {value:?}")))
}

/// Parses the body of a `status` response.
///
/// An empty body is a valid status with nothing loaded. Unknown keywords are
/// skipped.
pub fn parse_status(raw: &str) -> Result<Status, ClientError> {
    let mut status = Status::default();

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(status);
    }

    for line in raw.split('\n') {
        let Some((keyword, rest)) = line.split_once(' ') else {
            return Err(ClientError::parse(format!("malformed status line: {line:?}")));
        };

        match keyword {
            "tag" | "set" => {
                let Some((name, value)) = rest.split_once(' ') else {
                    return Err(ClientError::parse(format!(
                        "malformed status line: {line:?}"
                    )));
                };
                let target = if keyword == "tag" {
                    &mut status.tags
                } else {
                    &mut status.settings
                };
                target.insert(name.to_string(), value.to_string());
            }
            "status" => status.playing = rest == "playing",
            "file" => status.file = rest.to_string(),
            "duration" => status.duration = parse_seconds(rest, "duration")?,
            "position" => status.position = parse_seconds(rest, "position")?,
            _ => {}
        }
    }

    Ok(status)
}
