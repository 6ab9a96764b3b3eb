use std::ffi::OsString;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
///
/// With `CMUSCTL_LOG` set, events go to that file through a background
/// writer; the returned guard must be dropped before the process exits or
/// buffered lines are lost. Otherwise events go to stderr.
pub fn init_tracing(default_level: &str) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match std::env::var_os("CMUSCTL_LOG").and_then(open_log_file) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            fmt.with_ansi(false)
                .with_writer(writer)
                .try_init()
                .ok()
                .map(|()| guard)
        }
        None => {
            let _ = fmt
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
    }
}

fn open_log_file(path: OsString) -> Option<File> {
    if path.is_empty() {
        return None;
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!(
                "Warning: failed to open log file {}: {err}",
                Path::new(&path).display()
            );
            None
        }
    }
}
