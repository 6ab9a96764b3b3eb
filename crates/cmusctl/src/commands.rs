use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

const LONG_ABOUT: &str = r#"cmusctl controls a running cmus instance through its remote-control socket.

SOCKET:
    The socket is located the same way cmus creates it: $CMUS_SOCKET, then
    $HOME/.cmus if it exists, then $XDG_RUNTIME_DIR/cmus-socket, then
    $HOME/.config/cmus/socket. Use --socket to point somewhere else.

EXAMPLES:
    cmusctl status
    cmusctl status --format json
    cmusctl play ~/music/track.flac
    cmusctl seek -- -10
    cmusctl vol +5%
    cmusctl raw view 2"#;

#[derive(Parser)]
#[command(name = "cmusctl")]
#[command(author, version)]
#[command(about = "Remote control for the cmus music player")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the cmus socket (default: discovered like cmus does)
    #[arg(long, global = true, env = "CMUS_SOCKET", value_name = "PATH")]
    pub socket: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// The socket given on the command line or through `CMUS_SOCKET`.
    pub fn explicit_socket(&self) -> Option<&PathBuf> {
        self.socket
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the current track, position, tags and settings
    Status,

    /// Play FILE, or restart the current track
    Play {
        /// File to play
        file: Option<String>,
    },

    /// Toggle pause
    Pause,

    /// Stop playback
    Stop,

    /// Skip to the previous track
    Prev,

    /// Skip to the next track
    Next,

    /// Seek to an absolute or relative position
    ///
    /// Format: [+-](<num>[mh] | [HH:]MM:SS), e.g. -1m, +5, 1h, +1:30
    Seek {
        #[arg(allow_hyphen_values = true)]
        position: String,
    },

    /// Set, raise or lower the volume, e.g. 50%, +5%, -10
    Vol {
        #[arg(allow_hyphen_values = true)]
        level: String,
    },

    /// Toggle shuffle
    Shuffle,

    /// Toggle repeat
    Repeat,

    /// Send a raw command and print the response
    Raw {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print the socket path that would be used
    Socket,
}
