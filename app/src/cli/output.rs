use crate::cli::Format;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Unified output adapter for CLI commands
pub fn emit<T: Serialize>(fmt: Format, human: impl FnOnce() -> String, json: &T) -> Result<()> {
    let stdout = std::io::stdout();
    write_to(&mut stdout.lock(), fmt, human, json)
}

fn write_to<W: Write, T: Serialize>(
    out: &mut W,
    fmt: Format,
    human: impl FnOnce() -> String,
    json: &T,
) -> Result<()> {
    let text = match fmt {
        Format::Human => human(),
        Format::Json => serde_json::to_string_pretty(json).context("serialize JSON output")?,
    };
    writeln!(out, "{text}").context("write output")?;
    Ok(())
}
