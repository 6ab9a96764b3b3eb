//! Client for the cmus music player's remote-control socket.
//!
//! ```ignore
//! use cmus_ipc::{CmusClient, CmusRemote};
//!
//! let client = CmusClient::new();
//! client.connect()?;
//! let status = client.status()?;
//! println!("{} {}", status.file, status.time());
//! ```
#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod client;
mod connection;
mod error;
mod framer;
mod mock_client;
mod socket;
mod status;
mod sync;

pub use client::CmusClient;
pub use client::CmusRemote;
pub use connection::Connection;
pub use error::ClientError;
pub use error::ErrorCategory;
pub use mock_client::MockClient;
pub use socket::SocketEnv;
pub use socket::socket_path;
pub use status::Status;
pub use status::format_time;
pub use status::parse_status;
pub use sync::poison_reset_count;

pub type Result<T> = std::result::Result<T, ClientError>;
