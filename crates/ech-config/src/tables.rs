//! Static id → label tables for versions, KEMs and cipher suites.
//!
//! Only versions are strict: an unknown version changes the byte layout that
//! follows, while unknown KEM or cipher ids are still decoded and labelled
//! [`UNKNOWN`].

use serde::Serialize;
use std::fmt;

/// Label for ids missing from a table.
pub const UNKNOWN: &str = "Unknown";

/// Every recognized version shares this high byte.
pub const VERSION_HIGH_BYTE: u8 = 0xfe;

/// ECH draft version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EchVersion {
    /// draft-ietf-tls-esni-13 (0xfe0d)
    Draft13 = 0xfe0d,
    /// draft-ietf-tls-esni-12 (0xfe0c)
    Draft12 = 0xfe0c,
    /// draft-ietf-tls-esni-11 (0xfe0b)
    Draft11 = 0xfe0b,
}

impl EchVersion {
    /// Parse ECH version from u16
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0xfe0d => Some(Self::Draft13),
            0xfe0c => Some(Self::Draft12),
            0xfe0b => Some(Self::Draft11),
            _ => None,
        }
    }

    /// Convert to u16
    pub fn to_u16(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Draft13 => "Draft-13",
            Self::Draft12 => "Draft-12",
            Self::Draft11 => "Draft-11",
        }
    }
}

impl fmt::Display for EchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// HPKE KEM identifier. Unknown ids are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KemId(pub u16);

impl KemId {
    pub fn name(self) -> &'static str {
        match self.0 {
            0x0020 => "DHKEM(X25519, HKDF-SHA256)",
            0x0021 => "DHKEM(P-256, HKDF-SHA256)",
            0x0022 => "DHKEM(P-384, HKDF-SHA384)",
            0x0023 => "DHKEM(P-521, HKDF-SHA512)",
            _ => UNKNOWN,
        }
    }

    pub fn is_known(self) -> bool {
        self.name() != UNKNOWN
    }
}

impl fmt::Display for KemId {
    /// Table label, or `Unknown (0xNNNN)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            f.write_str(self.name())
        } else {
            write!(f, "{} (0x{:04X})", UNKNOWN, self.0)
        }
    }
}

/// One cipher suite id from an entry's suite list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CipherSuite {
    pub id: u16,
    pub name: &'static str,
}

impl CipherSuite {
    pub fn from_id(id: u16) -> Self {
        let name = match id {
            0x0001 => "AES_128_GCM_SHA256",
            0x0002 => "AES_256_GCM_SHA384",
            0x0003 => "CHACHA20_POLY1305_SHA256",
            _ => UNKNOWN,
        };
        Self { id, name }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name, self.id)
    }
}
