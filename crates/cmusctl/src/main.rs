#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod commands;
mod handlers;
mod telemetry;

use std::io::Write;

use clap::Parser;
use cmus_ipc::ClientError;
use cmus_ipc::CmusClient;
use cmus_ipc::ErrorCategory;
use cmus_ipc::socket_path;
use tracing::debug;

use crate::commands::Cli;
use crate::commands::Commands;
use crate::commands::OutputFormat;
use crate::handlers::HandlerContext;

fn main() {
    let cli = Cli::parse();
    let log_guard = telemetry::init_tracing("warn");
    let format = cli.effective_format();

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(err) => {
            report(&err, format);
            exit_code_for_client_error(&err)
        }
    };

    // `process::exit` skips destructors; flush the log writer first.
    drop(log_guard);
    if code != 0 {
        std::process::exit(code);
    }
}

fn exit_code_for_client_error(error: &ClientError) -> i32 {
    match error.category() {
        ErrorCategory::Config => 78,      // EX_CONFIG
        ErrorCategory::Unavailable => 69, // EX_UNAVAILABLE
        ErrorCategory::Io => 74,          // EX_IOERR
        ErrorCategory::Protocol => 65,    // EX_DATAERR
        ErrorCategory::Daemon => 1,
    }
}

fn report(error: &ClientError, format: OutputFormat) {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json_string());
        return;
    }
    eprintln!("Error: {error}");
    if let Some(suggestion) = error.suggestion() {
        eprintln!("Suggestion: {suggestion}");
    }
}

fn run(cli: &Cli) -> Result<(), ClientError> {
    let path = match cli.explicit_socket() {
        Some(path) => path.clone(),
        None => socket_path()?,
    };

    if matches!(cli.command, Commands::Socket) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", path.display())?;
        return Ok(());
    }

    let client = CmusClient::new();
    client.connect_to(&path)?;
    debug!(socket = %path.display(), "connected");

    let mut ctx = HandlerContext::new(&client, cli.effective_format(), std::io::stdout().lock());
    handlers::handle(&mut ctx, &cli.command)?;
    ctx.out.flush()?;
    Ok(())
}
