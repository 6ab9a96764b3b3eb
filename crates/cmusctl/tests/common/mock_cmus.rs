//! Mock cmus for testing CLI behavior without a real player.
//!
//! Listens on a Unix socket in a temporary directory and answers each
//! request line with a configured response, recording every request.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::oneshot;

/// Configuration for how the mock should respond
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Body lines followed by the terminating blank line
    Body(String),
    /// A single `Error: <message>` line
    Error(String),
    /// Some lines, then the connection is closed without a terminator
    Truncated(String),
    /// Close connection immediately
    Disconnect,
}

impl MockResponse {
    fn wire(&self) -> Option<String> {
        match self {
            MockResponse::Body(body) if body.is_empty() => Some("\n".to_string()),
            MockResponse::Body(body) => Some(format!("{body}\n\n")),
            MockResponse::Error(message) => Some(format!("Error: {message}\n")),
            MockResponse::Truncated(partial) => Some(format!("{partial}\n")),
            MockResponse::Disconnect => None,
        }
    }

    fn closes_after_reply(&self) -> bool {
        matches!(self, MockResponse::Truncated(_) | MockResponse::Disconnect)
    }
}

type Handlers = Arc<Mutex<HashMap<String, MockResponse>>>;

pub struct MockCmus {
    _temp_dir: TempDir,
    socket_path: PathBuf,
    shutdown_tx: Option<oneshot::Sender<()>>,
    requests: Arc<Mutex<Vec<String>>>,
    handlers: Handlers,
}

impl MockCmus {
    pub async fn start() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let socket_path = temp_dir.path().join("cmus-socket");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let handlers: Handlers = Arc::new(Mutex::new(HashMap::new()));
        handlers.lock().unwrap().insert(
            "status".to_string(),
            MockResponse::Body(super::STATUS_BODY.to_string()),
        );

        let listener = UnixListener::bind(&socket_path).expect("Failed to bind mock socket");
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let task_requests = Arc::clone(&requests);
        let task_handlers = Arc::clone(&handlers);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { break };
                        let requests = Arc::clone(&task_requests);
                        let handlers = Arc::clone(&task_handlers);
                        tokio::spawn(serve(stream, requests, handlers));
                    }
                }
            }
        });

        Self {
            _temp_dir: temp_dir,
            socket_path,
            shutdown_tx: Some(shutdown_tx),
            requests,
            handlers,
        }
    }

    pub fn socket_path(&self) -> &PathBuf {
        &self.socket_path
    }

    pub fn env_vars(&self) -> Vec<(String, String)> {
        vec![(
            "CMUS_SOCKET".to_string(),
            self.socket_path.to_string_lossy().into_owned(),
        )]
    }

    pub fn set_response(&self, command: &str, response: MockResponse) {
        self.handlers
            .lock()
            .unwrap()
            .insert(command.to_string(), response);
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockCmus {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve(stream: UnixStream, requests: Arc<Mutex<Vec<String>>>, handlers: Handlers) {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        requests.lock().unwrap().push(line.clone());

        let response = handlers
            .lock()
            .unwrap()
            .get(&line)
            .cloned()
            .unwrap_or_else(|| MockResponse::Body(String::new()));

        if let Some(wire) = response.wire() {
            if writer.write_all(wire.as_bytes()).await.is_err() {
                return;
            }
        }
        if response.closes_after_reply() {
            return;
        }
    }
}
