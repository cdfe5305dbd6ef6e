use crate::cli::{output, Format};
use crate::render::{render_human, DecodeReport};
use anyhow::{Context, Result};
use clap::Parser;
use ech_config::decode_ech_config;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    /// Base64 ECHConfigList; `-` or omitted reads stdin
    #[arg(conflicts_with = "file")]
    pub input: Option<String>,
    /// Read the base64 text from a file
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// Output format
    #[arg(long = "format", value_enum, default_value_t = Format::Human)]
    pub format: Format,
}

fn read_input(args: &DecodeArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()));
    }
    match args.input.as_deref() {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Returns whether the input decoded to at least one config.
pub fn run(args: DecodeArgs) -> Result<bool> {
    let text = read_input(&args)?;
    tracing::debug!(chars = text.len(), "decoding input");

    let result = decode_ech_config(&text);
    output::emit(
        args.format,
        || render_human(&result),
        &DecodeReport::from(&result),
    )?;
    Ok(result.is_success())
}
