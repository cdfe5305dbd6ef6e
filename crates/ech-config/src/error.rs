//! Decoder error taxonomy.
//!
//! Every variant except [`EchError::Base64Decode`] is local to a single
//! offset attempt: the scanner records it and moves on to the next candidate.

use thiserror::Error;

/// ECHConfigList decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EchError {
    /// Input text is not valid base64 after normalization
    #[error("Base64 decoding failed: {detail}")]
    Base64Decode { detail: String },

    /// A read needed more bytes than the buffer had left
    #[error(
        "Buffer overflow: Need {needed} bytes, but only {available} remaining at offset {offset}."
    )]
    BufferOverflow {
        needed: usize,
        available: usize,
        offset: usize,
    },

    /// Version field outside the recognized draft set
    #[error("Unknown ECH version: 0x{version:04X} at offset {offset}")]
    UnknownVersion { version: u16, offset: usize },

    /// Declared entry length runs past the end of the buffer
    #[error("Config length ({length}) exceeds remaining buffer ({remaining})")]
    ConfigLengthExceedsBuffer { length: usize, remaining: usize },

    #[error("Invalid public key length: {length}")]
    InvalidPublicKeyLength { length: usize },

    /// Cipher suite region is odd-sized or longer than the entry
    #[error("Invalid cipher suites length: {length}")]
    InvalidCipherSuiteLength { length: usize },

    /// No candidate offset produced an entry and none raised an error
    #[error("No valid ECH config found")]
    NoValidConfig,
}

impl EchError {
    /// True for errors raised by a read or a declared length that does not
    /// fit the bytes actually present.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            Self::BufferOverflow { .. }
                | Self::ConfigLengthExceedsBuffer { .. }
                | Self::InvalidPublicKeyLength { .. }
                | Self::InvalidCipherSuiteLength { .. }
        )
    }
}

pub type EchResult<T> = Result<T, EchError>;
