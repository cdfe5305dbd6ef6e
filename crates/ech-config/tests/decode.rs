#![allow(clippy::unwrap_used, clippy::panic)]

use base64::Engine;
use ech_config::{
    decode_ech_bytes, decode_ech_config, to_hex, DecodeResult, EchConfigList, EchError,
    EchVersion, KemId,
};

/// crypto.cloudflare.com HTTPS record, `ech=` parameter
const CLOUDFLARE_ECH: &str =
    "AEX+DQBBtgAgACBMmGJQR02doup+5VPMjYpe5HQQ/bpntFCxDa8LT2PLAgAEAAEAAQASY2xvdWRmbGFyZS1lY2guY29tAAA=";

struct EntryBuilder {
    version: u16,
    config_id: u8,
    kem: u16,
    public_key: Vec<u8>,
    suites: Vec<u8>,
    max_name_len: u8,
    public_name: Vec<u8>,
}

impl EntryBuilder {
    fn new() -> Self {
        Self {
            version: 0xfe0d,
            config_id: 0x2a,
            kem: 0x0020,
            public_key: vec![0xab, 0xcd],
            suites: vec![0x00, 0x01, 0x00, 0x03],
            max_name_len: 0,
            public_name: b"public.example".to_vec(),
        }
    }

    fn contents(&self) -> Vec<u8> {
        let mut c = vec![self.config_id];
        c.extend_from_slice(&self.kem.to_be_bytes());
        c.extend_from_slice(&(self.public_key.len() as u16).to_be_bytes());
        c.extend_from_slice(&self.public_key);
        c.extend_from_slice(&(self.suites.len() as u16).to_be_bytes());
        c.extend_from_slice(&self.suites);
        c.push(self.max_name_len);
        c.push(self.public_name.len() as u8);
        c.extend_from_slice(&self.public_name);
        c
    }

    fn build(&self) -> Vec<u8> {
        let contents = self.contents();
        let mut out = self.version.to_be_bytes().to_vec();
        out.extend_from_slice(&(contents.len() as u16).to_be_bytes());
        out.extend_from_slice(&contents);
        out
    }
}

fn with_list_length(body: &[u8]) -> Vec<u8> {
    let mut out = (body.len() as u16).to_be_bytes().to_vec();
    out.extend_from_slice(body);
    out
}

fn expect_success(result: DecodeResult) -> (EchConfigList, usize, Vec<u8>) {
    match result {
        DecodeResult::Success {
            list,
            offset_used,
            raw_bytes,
        } => (list, offset_used, raw_bytes),
        DecodeResult::Failure { error, .. } => panic!("decode failed: {error}"),
    }
}

fn expect_failure(result: DecodeResult) -> EchError {
    match result {
        DecodeResult::Failure { error, .. } => error,
        DecodeResult::Success { list, .. } => panic!("unexpected success: {list:?}"),
    }
}

#[test]
fn cloudflare_record_decodes() {
    let (list, offset, raw) = expect_success(decode_ech_config(CLOUDFLARE_ECH));

    assert_eq!(offset, 0);
    assert_eq!(raw.len(), 71);
    assert_eq!(list.list_length_prefix, Some([0x00, 0x45]));
    assert_eq!(list.len(), 1);

    let entry = &list.entries[0];
    assert_eq!(entry.version, EchVersion::Draft13);
    assert_eq!(entry.config_length, 0x41);
    assert_eq!(entry.key_config_id, 0xb6);
    assert_eq!(entry.kem, KemId(0x0020));
    assert_eq!(entry.public_key.len(), 32);
    assert_eq!(entry.public_key_raw[..2], [0x00, 0x20]);
    // KDF/AEAD pairs read as a flat id list
    let ids: Vec<u16> = entry.cipher_suites.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0x0001, 0x0001]);
    assert_eq!(entry.max_name_len, 0);
    assert_eq!(entry.public_name, "cloudflare-ech.com");
    // empty extensions block is left unread
    assert_eq!(entry.contents[entry.contents.len() - 2..], [0x00, 0x00]);
}

#[test]
fn single_entry_fields_round_trip() {
    let builder = EntryBuilder::new();
    let bytes = builder.build();
    let (list, offset, raw) = expect_success(decode_ech_bytes(bytes.clone()));

    assert_eq!(offset, 0);
    assert_eq!(raw, bytes);
    assert_eq!(list.list_length_prefix, None);

    let entry = &list.entries[0];
    assert_eq!(entry.key_config_id, 0x2a);
    assert_eq!(entry.public_key, builder.public_key);
    assert_eq!(to_hex(&entry.public_key_raw), "00 02 AB CD");
    assert_eq!(to_hex(&entry.cipher_suites_raw), "00 04 00 01 00 03");
    assert_eq!(entry.cipher_suites[1].name, "CHACHA20_POLY1305_SHA256");
    assert_eq!(entry.public_name_raw[0] as usize, builder.public_name.len());
    assert_eq!(entry.public_name_raw[1..], builder.public_name[..]);
    assert_eq!(entry.contents, builder.contents());
}

#[test]
fn recognized_versions_never_rejected() {
    for version in [0xfe0d, 0xfe0c, 0xfe0b] {
        let bytes = EntryBuilder {
            version,
            ..EntryBuilder::new()
        }
        .build();
        let (list, _, _) = expect_success(decode_ech_bytes(bytes));
        assert_eq!(list.entries[0].version.to_u16(), version);
    }
}

#[test]
fn unrecognized_versions_raise_unknown_version() {
    for version in [0xfe0a, 0xfe0e, 0xfeff, 0xfe00] {
        let bytes = EntryBuilder {
            version,
            ..EntryBuilder::new()
        }
        .build();
        match expect_failure(decode_ech_bytes(bytes)) {
            EchError::UnknownVersion { version: v, offset } => {
                assert_eq!(v, version);
                assert_eq!(offset, 0);
            }
            other => panic!("expected UnknownVersion, got {other:?}"),
        }
    }
}

#[test]
fn odd_cipher_suite_length_rejected() {
    let bytes = EntryBuilder {
        suites: vec![0x00, 0x01, 0x00],
        ..EntryBuilder::new()
    }
    .build();
    assert_eq!(
        expect_failure(decode_ech_bytes(bytes)),
        EchError::InvalidCipherSuiteLength { length: 3 }
    );
}

#[test]
fn list_length_prefix_is_transparent() {
    let bare = EntryBuilder::new().build();
    let prefixed = with_list_length(&bare);

    let (bare_list, _, _) = expect_success(decode_ech_bytes(bare.clone()));
    let (prefixed_list, offset, _) = expect_success(decode_ech_bytes(prefixed));

    assert_eq!(offset, 0);
    assert_eq!(prefixed_list.list_length_prefix, Some([0x00, bare.len() as u8]));
    assert_eq!(prefixed_list.entries, bare_list.entries);
}

#[test]
fn outer_length_before_version_recovered_at_i_minus_2() {
    // FE 0D as the first two bytes makes offset 0 read it as a version;
    // the entry itself sits at 4 with a length prefix at 2.
    let inner = EntryBuilder::new().build();
    let mut bytes = vec![0xfe, 0x0d];
    bytes.extend_from_slice(&with_list_length(&inner));

    let (list, offset, _) = expect_success(decode_ech_bytes(bytes));
    assert_eq!(offset, 2);
    assert_eq!(list.list_length_prefix, Some([0x00, inner.len() as u8]));
    assert_eq!(list.entries[0].public_name, "public.example");
}

#[test]
fn two_extraneous_bytes_before_version() {
    // leading garbage breaks offset 0; the two bytes right before the
    // version are taken as a list length even though they do not match
    let inner = EntryBuilder::new().build();
    let mut bytes = vec![0x01, 0x02, 0x03, 0x99, 0x99];
    bytes.extend_from_slice(&inner);
    let marker = bytes.windows(2).position(|w| w == [0xfe, 0x0d]).unwrap();

    let (list, offset, _) = expect_success(decode_ech_bytes(bytes));
    assert_eq!(marker, 5);
    assert_eq!(offset, marker - 2);
    assert_eq!(list.list_length_prefix, Some([0x99, 0x99]));
    assert_eq!(list.len(), 1);
}

#[test]
fn first_successful_candidate_wins() {
    // two entries back to back; offset 0 already parses both, so the
    // marker of the second entry is never tried
    let mut bytes = EntryBuilder::new().build();
    bytes.extend_from_slice(
        &EntryBuilder {
            version: 0xfe0c,
            ..EntryBuilder::new()
        }
        .build(),
    );
    let (list, offset, _) = expect_success(decode_ech_bytes(bytes));
    assert_eq!(offset, 0);
    assert_eq!(list.len(), 2);
}

#[test]
fn truncating_any_field_is_a_length_error() {
    let full = EntryBuilder::new().build();
    // every cut that lands inside the entry, after the 4-byte header
    for cut in 5..full.len() {
        let truncated = full[..cut].to_vec();
        let error = expect_failure(decode_ech_bytes(truncated));
        assert!(
            error.is_length_error(),
            "cut at {cut} gave non-length error {error:?}"
        );
    }
}

#[test]
fn shortened_payload_with_matching_lengths_overflows() {
    // keep every declared length, drop the last public-name byte and shrink
    // the entry length so the entry boundary still matches the buffer
    let builder = EntryBuilder::new();
    let mut contents = builder.contents();
    contents.pop();
    let mut bytes = 0xfe0du16.to_be_bytes().to_vec();
    bytes.extend_from_slice(&(contents.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&contents);

    match expect_failure(decode_ech_bytes(bytes)) {
        EchError::BufferOverflow {
            needed, available, ..
        } => {
            assert_eq!(needed, builder.public_name.len());
            assert_eq!(available, builder.public_name.len() - 1);
        }
        other => panic!("expected BufferOverflow, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_inside_entry_are_ignored() {
    let builder = EntryBuilder::new();
    let mut contents = builder.contents();
    contents.extend_from_slice(&[0x00, 0x04, 0xde, 0xad, 0xbe, 0xef]);
    let mut bytes = 0xfe0du16.to_be_bytes().to_vec();
    bytes.extend_from_slice(&(contents.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&contents);

    let (list, _, _) = expect_success(decode_ech_bytes(bytes));
    let entry = &list.entries[0];
    assert_eq!(entry.public_name, "public.example");
    assert_eq!(entry.config_length, contents.len());
    assert_eq!(entry.contents, contents);
}

#[test]
fn unknown_kem_and_suites_still_decode() {
    let bytes = EntryBuilder {
        kem: 0x0042,
        suites: vec![0x77, 0x77],
        ..EntryBuilder::new()
    }
    .build();
    let (list, _, _) = expect_success(decode_ech_bytes(bytes));
    let entry = &list.entries[0];
    assert_eq!(entry.kem.name(), "Unknown");
    assert_eq!(entry.cipher_suites[0].id, 0x7777);
    assert_eq!(entry.cipher_suites[0].name, "Unknown");
}

#[test]
fn empty_input_reports_no_valid_config() {
    let result = decode_ech_config("");
    assert_eq!(result.message().as_deref(), Some("No valid ECH config found"));
    assert_eq!(result.raw_bytes(), Some(&[][..]));

    let result = decode_ech_bytes(Vec::new());
    assert_eq!(expect_failure(result), EchError::NoValidConfig);
}

#[test]
fn single_byte_input_overflows_reading_list_length() {
    let result = decode_ech_config("AA==");
    assert_eq!(result.raw_bytes(), Some(&[0x00][..]));
    assert_eq!(
        result.message().as_deref(),
        Some("Buffer overflow: Need 2 bytes, but only 1 remaining at offset 0.")
    );
}

#[test]
fn url_safe_quoted_input_decodes() {
    let bytes = with_list_length(&EntryBuilder::new().build());
    let text = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&bytes);
    let wrapped = format!("\"{}\n{}\"", &text[..10], &text[10..]);

    let (_, _, raw) = expect_success(decode_ech_config(&wrapped));
    assert_eq!(raw, bytes);
}

#[test]
fn invalid_base64_aborts_before_parsing() {
    let result = decode_ech_config("not*base64");
    assert!(matches!(
        expect_failure(result.clone()),
        EchError::Base64Decode { .. }
    ));
    assert_eq!(result.raw_bytes(), None);
}
