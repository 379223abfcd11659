//! # Magic-Prefix Detection
//!
//! Fast-path layout selection from the first bytes of a container.
//!
//! Two container generations are recognizable without probing:
//!
//! - the earliest GCM generation opens with the `00 01` cipher-version
//!   prefix;
//! - protobuf-wrapped generations open with the length-delimited field-1
//!   marker (`0x0A`) followed by a one-byte submessage length.
//!
//! A match only selects the *first* layout to try; it is a hint, not a
//! verdict. If the hinted layout fails authentication, the engine falls back
//! to the full catalog scan, so a false-positive prefix match costs one
//! wasted attempt and nothing else.

use crate::consts::{CIPHER_VERSION_PREFIX, PROTO_FIELD1_MARKER};
use crate::layout::{layout_by_id, ContainerLayout};

/// Inspect the leading bytes of `raw` for a known magic prefix.
///
/// Returns the associated catalog layout, or `None` when the prefix is
/// unrecognized and the engine must scan the whole catalog.
///
/// # Example
///
/// ```
/// use wacrypt_rs::header::detect_layout;
///
/// // cipher-version prefix of the earliest GCM generation
/// let container = [0x00, 0x01, 0x03, 0x17];
/// assert_eq!(detect_layout(&container).unwrap().id, "crypt12-v1");
///
/// // no recognizable prefix
/// assert!(detect_layout(&[0xDE, 0xAD, 0xBE, 0xEF]).is_none());
/// ```
pub fn detect_layout(raw: &[u8]) -> Option<&'static ContainerLayout> {
    if raw.len() < 2 {
        return None;
    }

    if raw[..2] == CIPHER_VERSION_PREFIX {
        return layout_by_id("crypt12-v1");
    }

    // Protobuf wrapper: field-1 marker plus a plausible varint length. A
    // length with the continuation bit set would mean a preamble larger than
    // any known header, so it is treated as noise.
    if raw[0] == PROTO_FIELD1_MARKER && raw[1] < 0x80 {
        return layout_by_id("crypt15-proto");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cipher_version_prefix_selects_earliest_gcm_layout() {
        let raw = [0x00, 0x01, 0x05, 0x00, 0x2A];
        assert_eq!(detect_layout(&raw).unwrap().id, "crypt12-v1");
    }

    #[test]
    fn protobuf_marker_selects_wrapped_layout() {
        let raw = [0x0A, 0x22, 0x08, 0x01];
        assert_eq!(detect_layout(&raw).unwrap().id, "crypt15-proto");
    }

    #[test]
    fn continuation_bit_in_length_is_noise() {
        let raw = [0x0A, 0x80, 0x08, 0x01];
        assert!(detect_layout(&raw).is_none());
    }

    #[test]
    fn sqlite_plaintext_is_not_misdetected() {
        assert!(detect_layout(b"SQLite format 3\0").is_none());
    }

    #[test]
    fn tiny_buffer_is_noise() {
        assert!(detect_layout(&[0x0A]).is_none());
        assert!(detect_layout(&[]).is_none());
    }
}
