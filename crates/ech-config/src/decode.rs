//! Text → bytes → config list.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::{EchError, EchResult};
use crate::list::EchConfigList;
use crate::scan::scan_config_list;

/// Standard alphabet, padding optional, non-zero trailing bits tolerated.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Outcome of a full decode. Raw bytes are kept on failure whenever base64
/// decoding got that far, so callers can still show a hex dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Success {
        list: EchConfigList,
        offset_used: usize,
        raw_bytes: Vec<u8>,
    },
    Failure {
        error: EchError,
        raw_bytes: Option<Vec<u8>>,
    },
}

impl DecodeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn raw_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Success { raw_bytes, .. } => Some(raw_bytes),
            Self::Failure { raw_bytes, .. } => raw_bytes.as_deref(),
        }
    }

    /// Error message of a failed decode
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error.to_string()),
        }
    }
}

/// Strip whitespace and quotes, map the URL-safe alphabet onto the standard
/// one and pad to a multiple of four.
pub fn normalize_base64(input: &str) -> String {
    let mut clean: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"' && *c != '\'')
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while clean.len() % 4 != 0 {
        clean.push('=');
    }
    clean
}

pub fn decode_base64(input: &str) -> EchResult<Vec<u8>> {
    LENIENT_BASE64
        .decode(normalize_base64(input))
        .map_err(|e| EchError::Base64Decode {
            detail: e.to_string(),
        })
}

/// Decode a base64 ECHConfigList, recovering the start offset if needed.
pub fn decode_ech_config(input: &str) -> DecodeResult {
    match decode_base64(input) {
        Ok(bytes) => decode_ech_bytes(bytes),
        Err(error) => {
            tracing::debug!(error = %error, "ECH config is not valid base64");
            DecodeResult::Failure {
                error,
                raw_bytes: None,
            }
        }
    }
}

/// Same as [`decode_ech_config`] for input that is already binary.
pub fn decode_ech_bytes(bytes: Vec<u8>) -> DecodeResult {
    match scan_config_list(&bytes) {
        Ok(found) => DecodeResult::Success {
            list: found.list,
            offset_used: found.offset,
            raw_bytes: bytes,
        },
        Err(error) => DecodeResult::Failure {
            error,
            raw_bytes: Some(bytes),
        },
    }
}
