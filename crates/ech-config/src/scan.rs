//! Offset recovery.
//!
//! ECH blobs are sometimes published with the outer list length, sometimes
//! without it, and sometimes embedded after unrelated bytes. Instead of
//! guessing once, the scanner collects every plausible start offset and
//! takes the first one that parses to at least one entry.
//!
//! The search is greedy and order-sensitive: offset 0 first, then offsets
//! derived from `FE 0D` / `FE 0C` markers in ascending buffer order. A later
//! candidate is never tried once an earlier one succeeds.

use crate::error::{EchError, EchResult};
use crate::list::{parse_config_list_at, EchConfigList};
use crate::tables::VERSION_HIGH_BYTE;

/// Low bytes of the versions used as scan markers.
const MARKER_LOW_BYTES: [u8; 2] = [0x0d, 0x0c];

/// Successful scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch {
    pub list: EchConfigList,
    /// Offset the accepted attempt started from
    pub offset: usize,
}

/// Candidate start offsets, deduplicated in first-seen order.
///
/// For each version marker at `i`, `i - 2` (marker preceded by a list length)
/// comes before `i` (marker at the very start).
pub fn candidate_offsets(data: &[u8]) -> Vec<usize> {
    let mut offsets = vec![0];
    let mut push = |offset: usize| {
        if !offsets.contains(&offset) {
            offsets.push(offset);
        }
    };

    for (i, pair) in data.windows(2).enumerate() {
        if pair[0] == VERSION_HIGH_BYTE && MARKER_LOW_BYTES.contains(&pair[1]) {
            if i >= 2 {
                push(i - 2);
            }
            push(i);
        }
    }
    offsets
}

/// Try every candidate offset in order and return the first non-empty parse.
///
/// On total failure the error of the last failed attempt is returned, or
/// [`EchError::NoValidConfig`] when no attempt failed (they all came back
/// empty).
pub fn scan_config_list(data: &[u8]) -> EchResult<ScanMatch> {
    let mut last_error = None;

    for offset in candidate_offsets(data) {
        match parse_config_list_at(data, offset) {
            Ok(list) if !list.is_empty() => {
                tracing::debug!(offset, entries = list.len(), "ECH config list parsed");
                return Ok(ScanMatch { list, offset });
            }
            Ok(_) => {
                tracing::trace!(offset, "no ECH config entries at offset");
            }
            Err(e) => {
                tracing::debug!(offset, error = %e, "ECH config parse attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(EchError::NoValidConfig))
}
