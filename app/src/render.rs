//! Human and JSON views of a decode result.

use ech_config::{hex_dump, to_hex, CipherSuite, DecodeResult, EchConfigEntry};
use serde::Serialize;
use std::fmt::Write;

/// JSON shape of one decoded entry. Every wire field carries its hex form.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    pub version: u16,
    pub version_name: &'static str,
    pub version_hex: String,
    pub config_length: usize,
    pub config_length_hex: String,
    pub key_config_id: u8,
    pub key_config_id_hex: String,
    pub kem_id: u16,
    pub kem_name: String,
    pub kem_hex: String,
    pub public_key_hex: String,
    pub public_key_raw_hex: String,
    pub cipher_suites: Vec<CipherSuite>,
    pub cipher_suites_raw_hex: String,
    pub max_name_len: u8,
    pub max_name_len_hex: String,
    pub public_name: String,
    pub public_name_raw_hex: String,
    pub contents_hex: String,
}

impl From<&EchConfigEntry> for EntryReport {
    fn from(entry: &EchConfigEntry) -> Self {
        Self {
            version: entry.version.to_u16(),
            version_name: entry.version.name(),
            version_hex: to_hex(&entry.version.to_u16().to_be_bytes()),
            config_length: entry.config_length,
            config_length_hex: length_hex(entry.config_length),
            key_config_id: entry.key_config_id,
            key_config_id_hex: to_hex(&[entry.key_config_id]),
            kem_id: entry.kem.0,
            kem_name: entry.kem.to_string(),
            kem_hex: to_hex(&entry.kem.0.to_be_bytes()),
            public_key_hex: to_hex(&entry.public_key),
            public_key_raw_hex: to_hex(&entry.public_key_raw),
            cipher_suites: entry.cipher_suites.clone(),
            cipher_suites_raw_hex: to_hex(&entry.cipher_suites_raw),
            max_name_len: entry.max_name_len,
            max_name_len_hex: to_hex(&[entry.max_name_len]),
            public_name: entry.public_name.clone(),
            public_name_raw_hex: to_hex(&entry.public_name_raw),
            contents_hex: to_hex(&entry.contents),
        }
    }
}

/// JSON shape of a whole decode, success or failure.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_used: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_length_prefix: Option<String>,
    pub entries: Vec<EntryReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_hex: Option<String>,
}

impl From<&DecodeResult> for DecodeReport {
    fn from(result: &DecodeResult) -> Self {
        match result {
            DecodeResult::Success {
                list,
                offset_used,
                raw_bytes,
            } => Self {
                ok: true,
                offset_used: Some(*offset_used),
                list_length_prefix: list.list_length_prefix.map(|p| to_hex(&p)),
                entries: list.entries.iter().map(EntryReport::from).collect(),
                error: None,
                raw_hex: Some(to_hex(raw_bytes)),
            },
            DecodeResult::Failure { error, raw_bytes } => Self {
                ok: false,
                offset_used: None,
                list_length_prefix: None,
                entries: Vec::new(),
                error: Some(error.to_string()),
                raw_hex: raw_bytes.as_deref().map(to_hex),
            },
        }
    }
}

/// Entry lengths come off the wire as u16.
fn length_hex(length: usize) -> String {
    to_hex(&u16::try_from(length).unwrap_or(u16::MAX).to_be_bytes())
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let label = if label.is_empty() {
        String::new()
    } else {
        format!("{label}:")
    };
    let _ = writeln!(out, "  {label:<18}{value}");
}

fn raw(out: &mut String, bytes: &[u8]) {
    field(out, "", format_args!("raw: {}", to_hex(bytes)));
}

fn render_entry(out: &mut String, index: usize, entry: &EchConfigEntry) {
    let version = entry.version.to_u16();
    let _ = writeln!(out, "Config #{}", index + 1);
    field(out, "Version", format_args!("{} (0x{version:04X})", entry.version));
    field(
        out,
        "Config length",
        format_args!("{} [{}]", entry.config_length, length_hex(entry.config_length)),
    );
    field(
        out,
        "Key config ID",
        format_args!("{} [{}]", entry.key_config_id, to_hex(&[entry.key_config_id])),
    );
    field(
        out,
        "KEM",
        format_args!("{} [{}]", entry.kem, to_hex(&entry.kem.0.to_be_bytes())),
    );
    field(out, "Public key", to_hex(&entry.public_key));
    raw(out, &entry.public_key_raw);
    if entry.cipher_suites.is_empty() {
        field(out, "Cipher suites", "(none)");
    }
    for (i, suite) in entry.cipher_suites.iter().enumerate() {
        field(out, if i == 0 { "Cipher suites" } else { "" }, suite);
    }
    raw(out, &entry.cipher_suites_raw);
    field(
        out,
        "Max name length",
        format_args!("{} [{}]", entry.max_name_len, to_hex(&[entry.max_name_len])),
    );
    if entry.public_name.is_empty() {
        field(out, "Public name", "(empty)");
    } else {
        field(out, "Public name", &entry.public_name);
    }
    raw(out, &entry.public_name_raw);
    field(out, "Contents", to_hex(&entry.contents));
}

/// Multi-line text for terminals.
pub fn render_human(result: &DecodeResult) -> String {
    let mut out = String::new();
    match result {
        DecodeResult::Success {
            list, offset_used, ..
        } => {
            let plural = if list.len() == 1 { "entry" } else { "entries" };
            let _ = writeln!(out, "ECH config list: {} {}", list.len(), plural);
            if *offset_used != 0 {
                let _ = writeln!(
                    out,
                    "Note: config list recovered at offset {offset_used}; leading bytes skipped"
                );
            }
            if let Some(prefix) = list.list_length_prefix {
                let _ = writeln!(
                    out,
                    "List length: {} [{}]",
                    u16::from_be_bytes(prefix),
                    to_hex(&prefix)
                );
            }
            for (i, entry) in list.entries.iter().enumerate() {
                out.push('\n');
                render_entry(&mut out, i, entry);
            }
        }
        DecodeResult::Failure { error, raw_bytes } => {
            let _ = writeln!(out, "Error: {error}");
            if let Some(bytes) = raw_bytes {
                let _ = writeln!(out, "\nRaw bytes ({} bytes):", bytes.len());
                out.push_str(&hex_dump(bytes));
            }
        }
    }
    out.trim_end().to_string()
}
