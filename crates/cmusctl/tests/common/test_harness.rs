//! Test harness for CLI tests with a mock cmus
//!
//! Provides a synchronous interface to the async MockCmus,
//! bridging async infrastructure with sync `#[test]` functions.

#![allow(dead_code)]

use super::mock_cmus::{MockCmus, MockResponse};
use assert_cmd::Command;
use tokio::runtime::Runtime;

pub struct TestHarness {
    cmus: MockCmus,
    runtime: Runtime,
}

impl TestHarness {
    pub fn new() -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        let cmus = runtime.block_on(MockCmus::start());
        Self { cmus, runtime }
    }

    /// A cmusctl command whose environment points at the mock socket.
    pub fn cli_command(&self) -> Command {
        let mut cmd = super::cmusctl_cmd();
        cmd.env_remove("RUST_LOG").env_remove("CMUSCTL_LOG");
        for (key, value) in self.cmus.env_vars() {
            cmd.env(key, value);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cli_command().args(args).assert()
    }

    pub fn set_response(&self, command: &str, response: MockResponse) {
        self.cmus.set_response(command, response);
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.cmus.get_requests()
    }

    pub fn socket_path(&self) -> String {
        self.cmus.socket_path().to_string_lossy().into_owned()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
