//! ECHConfigList parser
//!
//! ## Wire Format
//!
//! ```text
//! struct {
//!     ECHConfig configs<1..2^16-1>;
//! } ECHConfigList;
//!
//! struct {
//!     uint16 version;
//!     uint16 length;
//!     ECHConfigContents contents;   // `length` bytes
//! } ECHConfig;
//! ```
//!
//! Records found in the wild do not always carry the outer list length, so
//! the parser decides per attempt whether the first two bytes are a length
//! or already a version (all known versions start with `0xFE`).

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::entry::{parse_config_entry, EchConfigEntry};
use crate::error::{EchError, EchResult};
use crate::tables::{EchVersion, VERSION_HIGH_BYTE};

/// version + length
const ENTRY_HEADER_LEN: usize = 4;

/// Parsed ECHConfigList
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchConfigList {
    /// Outer 16-bit list length, when the input started with one
    pub list_length_prefix: Option<[u8; 2]>,
    pub entries: Vec<EchConfigEntry>,
}

impl EchConfigList {
    /// Get the first config (most preferred)
    pub fn first(&self) -> Option<&EchConfigEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Declared list length, if a prefix was read.
    pub fn declared_length(&self) -> Option<u16> {
        self.list_length_prefix.map(u16::from_be_bytes)
    }
}

/// Parse entries from `data`, starting at `offset`.
///
/// Returns an empty list (not an error) when fewer than four bytes are left
/// for an entry header; callers decide whether an empty list is acceptable.
pub fn parse_config_list_at(data: &[u8], offset: usize) -> EchResult<EchConfigList> {
    let mut cursor = ByteCursor::at(data, offset);

    let mut list_length_prefix = None;
    // any non-0xFE lead byte is a list length, even when only one byte is left
    if cursor.remaining() > 0 && cursor.peek_u8() != Some(VERSION_HIGH_BYTE) {
        let prefix = cursor.read_bytes(2)?;
        let prefix = [prefix[0], prefix[1]];
        let declared = usize::from(u16::from_be_bytes(prefix));
        if declared != cursor.remaining() {
            tracing::debug!(
                declared,
                remaining = cursor.remaining(),
                offset,
                "ECH config list length does not match remaining bytes"
            );
        }
        list_length_prefix = Some(prefix);
    }

    let mut entries = Vec::new();
    while cursor.remaining() >= ENTRY_HEADER_LEN {
        entries.push(parse_entry(&mut cursor)?);
    }

    Ok(EchConfigList {
        list_length_prefix,
        entries,
    })
}

fn parse_entry(cursor: &mut ByteCursor<'_>) -> EchResult<EchConfigEntry> {
    let version_offset = cursor.position();
    let version_u16 = cursor.read_u16()?;
    let version = EchVersion::from_u16(version_u16).ok_or(EchError::UnknownVersion {
        version: version_u16,
        offset: version_offset,
    })?;

    let length = usize::from(cursor.read_u16()?);
    if length > cursor.remaining() {
        return Err(EchError::ConfigLengthExceedsBuffer {
            length,
            remaining: cursor.remaining(),
        });
    }

    let base = cursor.position();
    let contents = cursor.read_bytes(length)?;
    parse_config_entry(version, contents, base)
}
