//! # ech-config: ECHConfigList decoding for inspection
//!
//! Decodes Encrypted Client Hello configuration lists, as published in the
//! `ech` parameter of DNS HTTPS records, into a field-by-field view:
//! - bounds-checked reading of untrusted input ([`cursor`])
//! - per-entry field extraction with raw wire bytes kept for display ([`entry`])
//! - list parsing with or without the outer length prefix ([`list`])
//! - offset recovery for blobs with ambiguous leading bytes ([`scan`])
//! - base64 normalization and the top-level [`decode_ech_config`]
//!
//! Decoding only: nothing here validates key material or performs a
//! handshake.
//!
//! ```
//! use ech_config::{decode_ech_config, DecodeResult};
//!
//! let result = decode_ech_config(
//!     "AEX+DQBBtgAgACBMmGJQR02doup+5VPMjYpe5HQQ/bpntFCxDa8LT2PLAgAEAAEAAQASY2xvdWRmbGFyZS1lY2guY29tAAA=",
//! );
//! match result {
//!     DecodeResult::Success { list, offset_used, .. } => {
//!         assert_eq!(offset_used, 0);
//!         assert_eq!(list.entries[0].public_name, "cloudflare-ech.com");
//!     }
//!     DecodeResult::Failure { error, .. } => panic!("{error}"),
//! }
//! ```

pub mod cursor;
pub mod decode;
pub mod entry;
pub mod error;
pub mod hex;
pub mod list;
pub mod scan;
pub mod svc_params;
pub mod tables;

pub use cursor::ByteCursor;
pub use decode::{
    decode_base64, decode_ech_bytes, decode_ech_config, normalize_base64, DecodeResult,
};
pub use entry::{parse_config_entry, EchConfigEntry};
pub use error::{EchError, EchResult};
pub use hex::{hex_dump, to_hex};
pub use list::{parse_config_list_at, EchConfigList};
pub use scan::{candidate_offsets, scan_config_list, ScanMatch};
pub use svc_params::SvcParams;
pub use tables::{CipherSuite, EchVersion, KemId};
