//! Hex rendering helpers

use std::fmt::Write;

const DUMP_WIDTH: usize = 16;

/// Two-digit uppercase hex, space separated: `FE 0D 00 41`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// Classic 16-bytes-per-line dump:
///
/// ```text
/// 0000: 00 45 FE 0D 00 41 B6 00 20 00 20 4C 98 62 50 47  |.E...A.. . L.bPG|
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in bytes.chunks(DUMP_WIDTH).enumerate() {
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if (32..=126).contains(&b) {
                    char::from(b)
                } else {
                    '.'
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{:04X}: {:<47}  |{}|",
            line * DUMP_WIDTH,
            to_hex(chunk),
            ascii
        );
    }
    out
}
