//! Single ECHConfig entry parser
//!
//! ## Wire Format
//!
//! The list parser strips `version` and `length`; this module reads the
//! `length`-byte contents that follow:
//! ```text
//! struct {
//!     uint8 config_id;
//!     uint16 kem_id;
//!     opaque public_key<0..2^16-1>;
//!     uint16 cipher_suites<0..2^16-2>;
//!     uint8 maximum_name_length;
//!     opaque public_name<0..255>;
//!     ...                          // anything after is left unread
//! } ECHConfigContents;
//! ```
//!
//! Cipher suites are read as a flat list of 16-bit ids.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{EchError, EchResult};
use crate::tables::{CipherSuite, EchVersion, KemId};

/// One decoded ECH configuration.
///
/// The `*_raw` fields keep each length-prefixed field exactly as it appeared
/// on the wire (prefix followed by payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchConfigEntry {
    pub version: EchVersion,
    /// Declared length of the contents region
    pub config_length: usize,
    pub key_config_id: u8,
    pub kem: KemId,
    pub public_key: Vec<u8>,
    pub public_key_raw: Vec<u8>,
    /// Wire order, duplicates kept
    pub cipher_suites: Vec<CipherSuite>,
    pub cipher_suites_raw: Vec<u8>,
    pub max_name_len: u8,
    /// Lossy UTF-8 rendering of the public name
    pub public_name: String,
    pub public_name_raw: Vec<u8>,
    /// The whole contents region, including bytes left unread
    pub contents: Vec<u8>,
}

/// Parse the contents of one entry.
///
/// `contents` must be exactly the declared region; `base` is its absolute
/// position in the input and only feeds error offsets. Bytes after the public
/// name are ignored.
pub fn parse_config_entry(
    version: EchVersion,
    contents: &[u8],
    base: usize,
) -> EchResult<EchConfigEntry> {
    let mut cursor = ByteCursor::nested(contents, base);

    let key_config_id = cursor.read_u8()?;
    let kem = KemId(cursor.read_u16()?);

    let public_key_len = cursor.read_u16()?;
    if usize::from(public_key_len) > cursor.remaining() {
        return Err(EchError::InvalidPublicKeyLength {
            length: usize::from(public_key_len),
        });
    }
    let public_key = cursor.read_bytes(usize::from(public_key_len))?;

    let suites_len = cursor.read_u16()?;
    if suites_len % 2 != 0 || usize::from(suites_len) > cursor.remaining() {
        return Err(EchError::InvalidCipherSuiteLength {
            length: usize::from(suites_len),
        });
    }
    let suites = cursor.read_bytes(usize::from(suites_len))?;
    let cipher_suites = suites
        .chunks_exact(2)
        .map(|pair| CipherSuite::from_id(u16::from_be_bytes([pair[0], pair[1]])))
        .collect();

    let max_name_len = cursor.read_u8()?;

    let public_name_len = cursor.read_u8()?;
    let public_name_bytes = if public_name_len == 0 {
        &[][..]
    } else {
        cursor.read_bytes(usize::from(public_name_len))?
    };
    let public_name = String::from_utf8_lossy(public_name_bytes).into_owned();

    if cursor.remaining() > 0 {
        tracing::debug!(
            trailing = cursor.remaining(),
            offset = cursor.position(),
            "ECH config entry has unread trailing bytes"
        );
    }

    Ok(EchConfigEntry {
        version,
        config_length: contents.len(),
        key_config_id,
        kem,
        public_key: public_key.to_vec(),
        public_key_raw: with_prefix(&public_key_len.to_be_bytes(), public_key),
        cipher_suites,
        cipher_suites_raw: with_prefix(&suites_len.to_be_bytes(), suites),
        max_name_len,
        public_name,
        public_name_raw: with_prefix(&[public_name_len], public_name_bytes),
        contents: contents.to_vec(),
    })
}

fn with_prefix(prefix: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(prefix.len() + payload.len());
    raw.extend_from_slice(prefix);
    raw.extend_from_slice(payload);
    raw
}
