use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::client::CmusRemote;
use crate::error::ClientError;
use crate::sync::mutex_lock_or_recover;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Error(String),
}

/// An in-memory [`CmusRemote`] for testing code that drives cmus.
///
/// Responses are configured per exact command string, and every command sent
/// is recorded for later assertions.
///
/// # Example
///
/// ```ignore
/// use cmus_ipc::{CmusRemote, MockClient};
///
/// let mock = MockClient::new();
/// mock.set_response("status", "status playing\nduration 90");
///
/// assert!(mock.status().unwrap().playing);
/// assert_eq!(mock.call_count("status"), 1);
/// ```
#[derive(Clone)]
pub struct MockClient {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    calls: Arc<Mutex<Vec<String>>>,
    default_body: String,
    error_on_missing: bool,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    /// Answers unconfigured commands with an empty body.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            default_body: String::new(),
            error_on_missing: false,
        }
    }

    /// Answers unconfigured commands the way cmus answers unknown ones.
    pub fn new_strict() -> Self {
        Self {
            error_on_missing: true,
            ..Self::new()
        }
    }

    pub fn set_response(&self, command: &str, body: &str) {
        self.insert(command, Reply::Body(body.to_string()));
    }

    /// Makes `command` fail with a daemon error carrying `message`.
    pub fn set_error(&self, command: &str, message: &str) {
        self.insert(command, Reply::Error(message.to_string()));
    }

    pub fn set_default_response(&mut self, body: &str) {
        self.default_body = body.to_string();
    }

    fn insert(&self, command: &str, reply: Reply) {
        mutex_lock_or_recover(&self.replies).insert(command.to_string(), reply);
    }

    /// Every command received, in order.
    pub fn calls(&self) -> Vec<String> {
        mutex_lock_or_recover(&self.calls).clone()
    }

    pub fn call_count(&self, command: &str) -> usize {
        self.calls().iter().filter(|c| *c == command).count()
    }

    pub fn last_call(&self) -> Option<String> {
        self.calls().pop()
    }

    pub fn clear_calls(&self) {
        mutex_lock_or_recover(&self.calls).clear();
    }

    pub fn reset(&self) {
        self.clear_calls();
        mutex_lock_or_recover(&self.replies).clear();
    }
}

impl CmusRemote for MockClient {
    fn cmd(&self, command: &str) -> Result<String, ClientError> {
        mutex_lock_or_recover(&self.calls).push(command.to_string());

        let reply = mutex_lock_or_recover(&self.replies).get(command).cloned();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Error(message)) => Err(ClientError::Daemon { message }),
            None if self.error_on_missing => Err(ClientError::Daemon {
                message: format!("unknown command: {command}"),
            }),
            None => Ok(self.default_body.clone()),
        }
    }
}
