use std::os::unix::net::UnixStream;
use std::path::Path;
use std::path::PathBuf;

use crate::connection::Connection;
use crate::error::ClientError;
use crate::status::Status;
use crate::status::parse_status;

/// Commands understood by cmus' remote interface.
///
/// Implementors only provide [`cmd`](CmusRemote::cmd); everything else is a
/// fixed command string sent through it.
pub trait CmusRemote {
    /// Sends a raw command and returns cmus' response body.
    fn cmd(&self, command: &str) -> Result<String, ClientError>;

    /// Current track, playback position and settings.
    fn status(&self) -> Result<Status, ClientError> {
        let body = self.cmd("status")?;
        parse_status(&body)
    }

    /// Plays `file`, or restarts the current track when `None`.
    fn play(&self, file: Option<&str>) -> Result<(), ClientError> {
        let command = match file {
            Some(file) => format!("player-play {file}"),
            None => "player-play".to_string(),
        };
        self.cmd(&command).map(drop)
    }

    /// Toggles pause.
    fn play_pause(&self) -> Result<(), ClientError> {
        self.cmd("player-pause").map(drop)
    }

    fn stop(&self) -> Result<(), ClientError> {
        self.cmd("player-stop").map(drop)
    }

    fn prev(&self) -> Result<(), ClientError> {
        self.cmd("player-prev").map(drop)
    }

    fn next(&self) -> Result<(), ClientError> {
        self.cmd("player-next").map(drop)
    }

    /// Seeks to an absolute or relative position.
    ///
    /// `position` uses cmus' syntax, `[+-](<num>[mh] | [HH:]MM:SS)`: `-1m`
    /// seeks a minute back, `+5` five seconds forward, `1h` to the one hour
    /// mark, `+1:30` ninety seconds forward.
    fn seek(&self, position: &str) -> Result<(), ClientError> {
        self.cmd(&format!("seek {position}")).map(drop)
    }

    /// Sets, raises or lowers the volume.
    ///
    /// A `+` or `-` prefix makes the change relative. Values may be
    /// percentages (`50%`) or raw mixer units.
    fn volume(&self, level: &str) -> Result<(), ClientError> {
        self.cmd(&format!("vol {level}")).map(drop)
    }

    fn shuffle(&self) -> Result<(), ClientError> {
        self.cmd("toggle shuffle").map(drop)
    }

    fn repeat(&self) -> Result<(), ClientError> {
        self.cmd("toggle repeat").map(drop)
    }
}

/// Client for a running cmus instance.
///
/// All methods take `&self`; share one client between threads with an
/// `Arc` and commands are sent one at a time in lock order.
#[derive(Default)]
pub struct CmusClient {
    conn: Connection<UnixStream>,
}

impl CmusClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-connected stream.
    pub fn with_stream(stream: UnixStream) -> Self {
        Self {
            conn: Connection::with_stream(stream),
        }
    }

    /// Connects to cmus, locating the socket the way cmus does. Returns the
    /// socket path used.
    pub fn connect(&self) -> Result<PathBuf, ClientError> {
        self.conn.connect()
    }

    pub fn connect_to(&self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        self.conn.connect_to(path)
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_connected()
    }

    pub fn disconnect(&self) {
        self.conn.disconnect();
    }
}

impl CmusRemote for CmusClient {
    fn cmd(&self, command: &str) -> Result<String, ClientError> {
        self.conn.execute(command)
    }
}
