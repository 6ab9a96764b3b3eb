use std::io::Write;

use cmus_ipc::ClientError;
use cmus_ipc::CmusRemote;
use cmus_ipc::Status;
use serde_json::json;

use crate::commands::Commands;
use crate::commands::OutputFormat;

pub struct HandlerContext<'a, C: CmusRemote, W: Write> {
    pub client: &'a C,
    pub format: OutputFormat,
    pub out: W,
}

impl<'a, C: CmusRemote, W: Write> HandlerContext<'a, C, W> {
    pub fn new(client: &'a C, format: OutputFormat, out: W) -> Self {
        Self {
            client,
            format,
            out,
        }
    }

    fn acknowledge(&mut self, command: &str) -> Result<(), ClientError> {
        if self.format == OutputFormat::Json {
            writeln!(self.out, "{}", json!({ "command": command, "ok": true }))?;
        }
        Ok(())
    }
}

pub fn handle<C: CmusRemote, W: Write>(
    ctx: &mut HandlerContext<'_, C, W>,
    command: &Commands,
) -> Result<(), ClientError> {
    match command {
        Commands::Status => handle_status(ctx),
        Commands::Play { file } => {
            ctx.client.play(file.as_deref())?;
            ctx.acknowledge("player-play")
        }
        Commands::Pause => {
            ctx.client.play_pause()?;
            ctx.acknowledge("player-pause")
        }
        Commands::Stop => {
            ctx.client.stop()?;
            ctx.acknowledge("player-stop")
        }
        Commands::Prev => {
            ctx.client.prev()?;
            ctx.acknowledge("player-prev")
        }
        Commands::Next => {
            ctx.client.next()?;
            ctx.acknowledge("player-next")
        }
        Commands::Seek { position } => {
            ctx.client.seek(position)?;
            ctx.acknowledge("seek")
        }
        Commands::Vol { level } => {
            ctx.client.volume(level)?;
            ctx.acknowledge("vol")
        }
        Commands::Shuffle => {
            ctx.client.shuffle()?;
            ctx.acknowledge("toggle shuffle")
        }
        Commands::Repeat => {
            ctx.client.repeat()?;
            ctx.acknowledge("toggle repeat")
        }
        Commands::Raw { command } => handle_raw(ctx, &command.join(" ")),
        Commands::Socket => Ok(()),
    }
}

fn handle_status<C: CmusRemote, W: Write>(
    ctx: &mut HandlerContext<'_, C, W>,
) -> Result<(), ClientError> {
    let status = ctx.client.status()?;
    match ctx.format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&status).map_err(std::io::Error::from)?;
            writeln!(ctx.out, "{rendered}")?;
        }
        OutputFormat::Text => write_status_text(&mut ctx.out, &status)?,
    }
    Ok(())
}

fn handle_raw<C: CmusRemote, W: Write>(
    ctx: &mut HandlerContext<'_, C, W>,
    command: &str,
) -> Result<(), ClientError> {
    let body = ctx.client.cmd(command)?;
    match ctx.format {
        OutputFormat::Json => writeln!(ctx.out, "{}", json!({ "command": command, "body": body }))?,
        OutputFormat::Text if body.is_empty() => {}
        OutputFormat::Text => writeln!(ctx.out, "{body}")?,
    }
    Ok(())
}

fn write_status_text<W: Write>(out: &mut W, status: &Status) -> std::io::Result<()> {
    let state = if status.playing { "playing" } else { "not playing" };
    writeln!(out, "{:<10}{}", "state", state)?;
    if !status.file.is_empty() {
        writeln!(out, "{:<10}{}", "file", status.file)?;
    }
    writeln!(out, "{:<10}{}", "time", status.time())?;

    let width = status
        .tags
        .keys()
        .chain(status.settings.keys())
        .map(String::len)
        .max()
        .unwrap_or(0);
    for (name, value) in &status.tags {
        writeln!(out, "tag  {name:<width$}  {value}")?;
    }
    for (name, value) in &status.settings {
        writeln!(out, "set  {name:<width$}  {value}")?;
    }
    Ok(())
}
