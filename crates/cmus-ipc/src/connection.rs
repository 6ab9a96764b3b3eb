use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;
use tracing::warn;

use crate::error::ClientError;
use crate::framer::read_response;
use crate::socket::socket_path;
use crate::sync::lock_or_reset;

struct Channel<S> {
    reader: BufReader<S>,
}

impl<S: Read + Write> Channel<S> {
    fn new(stream: S) -> Self {
        Self {
            reader: BufReader::new(stream),
        }
    }

    fn exchange(&mut self, command: &str) -> Result<String, ClientError> {
        let mut request = String::with_capacity(command.len() + 1);
        request.push_str(command);
        request.push('\n');

        let stream = self.reader.get_mut();
        stream.write_all(request.as_bytes())?;
        stream.flush()?;

        read_response(&mut self.reader)
    }
}

/// A single connection to cmus, shared by every caller that holds it.
///
/// cmus answers requests strictly in order and has no request ids, so each
/// [`execute`](Connection::execute) holds an exclusive lock from the write
/// until the response is fully read. Callers block while waiting for the lock
/// and while waiting for cmus; there are no timeouts. Set read/write
/// timeouts on the stream before [`attach`](Connection::attach)ing it if a
/// stalled daemon must not block forever.
pub struct Connection<S = UnixStream> {
    channel: Mutex<Option<Channel<S>>>,
}

impl<S> Default for Connection<S> {
    fn default() -> Self {
        Self {
            channel: Mutex::new(None),
        }
    }
}

impl<S: Read + Write> Connection<S> {
    /// Creates a connection with no stream bound.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream(stream: S) -> Self {
        Self {
            channel: Mutex::new(Some(Channel::new(stream))),
        }
    }

    /// Binds an already-open stream, replacing any previous one.
    pub fn attach(&self, stream: S) {
        *lock_or_reset(&self.channel) = Some(Channel::new(stream));
    }

    pub fn is_connected(&self) -> bool {
        lock_or_reset(&self.channel).is_some()
    }

    /// Drops the bound stream. Later commands fail with
    /// [`ClientError::NotConnected`] until a new stream is bound.
    pub fn disconnect(&self) {
        lock_or_reset(&self.channel).take();
    }

    /// Sends `command` and returns the response body.
    ///
    /// The body is every line cmus sent before the terminating blank line,
    /// joined with `\n`. A daemon `Error:` line becomes
    /// [`ClientError::Daemon`] and the stream stays usable. Any I/O failure,
    /// including a stream that ends early, becomes [`ClientError::Io`] and
    /// drops the stream: the rest of the response (or a half-written command)
    /// may still be on the wire, so later commands get
    /// [`ClientError::NotConnected`] instead of someone else's data.
    pub fn execute(&self, command: &str) -> Result<String, ClientError> {
        let mut guard = lock_or_reset(&self.channel);
        let channel = guard.as_mut().ok_or(ClientError::NotConnected)?;

        debug!(command = %command, "sending command to cmus");
        let result = channel.exchange(command);
        match &result {
            Ok(body) => debug!(
                command = %command,
                lines = body.lines().count(),
                "cmus response received"
            ),
            Err(err @ ClientError::Io(_)) => {
                guard.take();
                warn!(command = %command, error = %err, "dropping cmus stream after I/O failure");
            }
            Err(err) => debug!(command = %command, error = %err, "cmus command failed"),
        }
        result
    }
}

impl Connection<UnixStream> {
    /// Connects to the socket cmus is expected to be listening on.
    pub fn connect(&self) -> Result<PathBuf, ClientError> {
        let path = socket_path()?;
        self.connect_to(&path)?;
        Ok(path)
    }

    pub fn connect_to(&self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        let path = path.as_ref();
        let stream = UnixStream::connect(path).map_err(|source| ClientError::ConnectionFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "connected to cmus");
        self.attach(stream);
        Ok(())
    }
}
