#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

pub mod mock_cmus;
pub mod test_harness;

pub use mock_cmus::{MockCmus, MockResponse};
pub use test_harness::TestHarness;

use assert_cmd::Command;

pub fn cmusctl_cmd() -> Command {
    Command::cargo_bin("cmusctl").expect("cmusctl binary is built")
}

pub const STATUS_BODY: &str = "status playing
file /music/The Naked and Famous/Passive Me Aggressive You/07 Young Blood.m4a
duration 246
position 13
tag artist The Naked and Famous
tag album Passive Me Aggressive You
tag title Young Blood
set repeat true
set shuffle false
set vol_left 100";
