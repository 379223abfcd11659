//! Utility functions used across the library.

use std::fmt::Write as _;

/// Render `bytes` as a fixed-width hex-and-ASCII dump, 16 bytes per line.
///
/// Each line carries an 8-digit hex offset, the hex octets (grouped 8+8),
/// and a printable-ASCII gutter where non-printable bytes show as `.`.
/// At most `limit` bytes are rendered; shorter inputs are rendered whole.
///
/// The format is stable — diagnostic dumps produced for unidentified
/// payloads are meant to be diffed and read by humans during manual
/// analysis.
///
/// # Example
///
/// ```
/// use wacrypt_rs::utils::hex_ascii_dump;
///
/// let dump = hex_ascii_dump(b"SQLite format 3\0", 2048);
/// assert_eq!(
///     dump,
///     "00000000  53 51 4c 69 74 65 20 66  6f 72 6d 61 74 20 33 00  |SQLite format 3.|\n"
/// );
/// ```
pub fn hex_ascii_dump(bytes: &[u8], limit: usize) -> String {
    let shown = &bytes[..bytes.len().min(limit)];
    // 78 columns per rendered line
    let mut out = String::with_capacity(shown.len().div_ceil(16) * 80);

    for (line, chunk) in shown.chunks(16).enumerate() {
        let _ = write!(out, "{:08x}  ", line * 16);

        for col in 0..16 {
            match chunk.get(col) {
                Some(byte) => {
                    let _ = write!(out, "{byte:02x} ");
                }
                None => out.push_str("   "),
            }
            if col == 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push('|');
        for &byte in chunk {
            out.push(if (0x20..0x7F).contains(&byte) {
                byte as char
            } else {
                '.'
            });
        }
        out.push('|');
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_bytes_per_line() {
        let dump = hex_ascii_dump(&[0u8; 48], 2048);
        assert_eq!(dump.lines().count(), 3);
        assert!(dump.starts_with("00000000  00 00"));
        assert!(dump.lines().nth(2).unwrap().starts_with("00000020"));
    }

    #[test]
    fn limit_truncates_long_input() {
        let dump = hex_ascii_dump(&[0xFFu8; 4096], 2048);
        assert_eq!(dump.lines().count(), 2048 / 16);
    }

    #[test]
    fn partial_final_line_keeps_column_alignment() {
        let dump = hex_ascii_dump(b"ABC", 2048);
        let line = dump.lines().next().unwrap();
        assert!(line.contains("41 42 43"));
        assert!(line.ends_with("|ABC|"));
        // gutter starts at the same column as a full line's
        let full = hex_ascii_dump(&[0x41u8; 16], 2048);
        let gutter_col = full.lines().next().unwrap().find('|').unwrap();
        assert_eq!(line.find('|').unwrap(), gutter_col);
    }

    #[test]
    fn non_printable_bytes_render_as_dots() {
        let dump = hex_ascii_dump(&[0x00, 0x1F, 0x7F, b'a'], 2048);
        assert!(dump.contains("|...a|"));
    }
}
