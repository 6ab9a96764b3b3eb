use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Broad classification of a [`ClientError`], used by front ends to pick
/// exit codes and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Unavailable,
    Io,
    Daemon,
    Protocol,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Config => "config",
            ErrorCategory::Unavailable => "unavailable",
            ErrorCategory::Io => "io",
            ErrorCategory::Daemon => "daemon",
            ErrorCategory::Protocol => "protocol",
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Unable to locate cmus socket: {message}")]
    Config { message: String },

    #[error("Failed to connect to cmus at {}: {source}", path.display())]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Client is not connected to cmus")]
    NotConnected,

    #[error("I/O error while talking to cmus: {0}")]
    Io(#[from] std::io::Error),

    #[error("cmus error: {message}")]
    Daemon { message: String },

    #[error("Unable to parse cmus status: {message}")]
    Parse { message: String },
}

impl ClientError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ClientError::Config {
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        ClientError::Parse {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Config { .. } => ErrorCategory::Config,
            ClientError::ConnectionFailed { .. } | ClientError::NotConnected => {
                ErrorCategory::Unavailable
            }
            ClientError::Io(_) => ErrorCategory::Io,
            ClientError::Daemon { .. } => ErrorCategory::Daemon,
            ClientError::Parse { .. } => ErrorCategory::Protocol,
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ClientError::Config { .. } => {
                Some("Set CMUS_SOCKET to the path of the cmus socket")
            }
            ClientError::ConnectionFailed { .. } => {
                Some("Make sure cmus is running and the socket is readable")
            }
            ClientError::NotConnected => Some("Call connect() before sending commands"),
            ClientError::Io(_) | ClientError::Daemon { .. } | ClientError::Parse { .. } => None,
        }
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::json!({
            "category": self.category().as_str(),
            "message": self.to_string(),
        });
        if let ClientError::Daemon { message } = self {
            obj["daemon_message"] = serde_json::json!(message);
        }
        if let Some(suggestion) = self.suggestion() {
            obj["suggestion"] = serde_json::json!(suggestion);
        }
        obj
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
    }
}
