//! Payload classification after decryption.
//!
//! Decrypted bytes are one of: a raw SQLite database, a zlib-deflated one
//! (the producer compressed payloads for most of its history), a
//! zstd-framed one (newer generations), or something this crate does not
//! recognize. Classification is pure and knows nothing about which layout
//! produced the bytes; diagnostic persistence for unidentified payloads
//! lives in the session layer.
//!
//! Detection is deliberately heuristic — sniff, try the codec, check the
//! signature — and every branch falls through deterministically to
//! [`ResolvedPayload::Unidentified`] rather than erroring on benign but
//! unknown input.

use std::io::Read;

use flate2::read::ZlibDecoder;
use tracing::{debug, trace};

use crate::consts::{SQLITE_MAGIC, ZSTD_FRAME_MAGIC};

/// Secondary encoding found between decryption and the database bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// zlib/deflate stream (`flate2`).
    Zlib,
    /// zstd frame.
    Zstd,
}

/// Final classified output of one decryption session.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolvedPayload {
    /// The bytes are a SQLite database as-is.
    Sqlite(Vec<u8>),
    /// The bytes were compressed; `bytes` holds the *decompressed* database.
    CompressedSqlite {
        /// Decompressed database bytes, starting with the SQLite signature.
        bytes: Vec<u8>,
        /// Codec that was unwrapped.
        codec: Codec,
    },
    /// Decryption succeeded but no known structure matched. The original
    /// decrypted bytes are kept for diagnostics.
    Unidentified(Vec<u8>),
}

impl ResolvedPayload {
    /// The database bytes, if classification succeeded.
    pub fn database_bytes(&self) -> Option<&[u8]> {
        match self {
            ResolvedPayload::Sqlite(bytes) => Some(bytes),
            ResolvedPayload::CompressedSqlite { bytes, .. } => Some(bytes),
            ResolvedPayload::Unidentified(_) => None,
        }
    }

    /// Codec unwrapped on the way to the database, if any.
    pub fn codec(&self) -> Option<Codec> {
        match self {
            ResolvedPayload::CompressedSqlite { codec, .. } => Some(*codec),
            _ => None,
        }
    }
}

/// Does `bytes` begin with the canonical SQLite 3 signature?
///
/// Public because downstream consumers of a recovered database are expected
/// to re-verify the signature themselves instead of trusting this crate.
#[inline(always)]
pub fn is_sqlite(bytes: &[u8]) -> bool {
    bytes.len() >= SQLITE_MAGIC.len() && bytes[..SQLITE_MAGIC.len()] == SQLITE_MAGIC
}

/// Classify decrypted bytes and unwrap their secondary encoding.
///
/// Terminal states, in probe order:
/// 1. leading SQLite signature → [`ResolvedPayload::Sqlite`]
/// 2. zlib-inflates to a signed database → [`ResolvedPayload::CompressedSqlite`]
/// 3. zstd-decodes to a signed database → [`ResolvedPayload::CompressedSqlite`]
/// 4. anything else → [`ResolvedPayload::Unidentified`]
pub fn resolve(bytes: Vec<u8>) -> ResolvedPayload {
    if is_sqlite(&bytes) {
        trace!(len = bytes.len(), "payload is a raw database");
        return ResolvedPayload::Sqlite(bytes);
    }

    if let Some(inflated) = inflate_zlib(&bytes) {
        if is_sqlite(&inflated) {
            debug!(
                compressed = bytes.len(),
                inflated = inflated.len(),
                "payload was a zlib-deflated database"
            );
            return ResolvedPayload::CompressedSqlite {
                bytes: inflated,
                codec: Codec::Zlib,
            };
        }
    }

    if let Some(decoded) = decode_zstd_frame(&bytes) {
        if is_sqlite(&decoded) {
            debug!(
                compressed = bytes.len(),
                decoded = decoded.len(),
                "payload was a zstd-framed database"
            );
            return ResolvedPayload::CompressedSqlite {
                bytes: decoded,
                codec: Codec::Zstd,
            };
        }
    }

    debug!(len = bytes.len(), "payload did not match any known structure");
    ResolvedPayload::Unidentified(bytes)
}

/// Try to inflate a zlib stream. Trailing bytes past the stream end are
/// tolerated — several producer generations pad the compressed payload.
fn inflate_zlib(bytes: &[u8]) -> Option<Vec<u8>> {
    let mut inflated = Vec::new();
    ZlibDecoder::new(bytes).read_to_end(&mut inflated).ok()?;
    Some(inflated)
}

/// Try to decode a zstd frame. The frame magic is checked first so that
/// arbitrary garbage is not fed through the decoder at all.
fn decode_zstd_frame(bytes: &[u8]) -> Option<Vec<u8>> {
    if bytes.len() < ZSTD_FRAME_MAGIC.len() || bytes[..ZSTD_FRAME_MAGIC.len()] != ZSTD_FRAME_MAGIC {
        return None;
    }
    zstd::stream::decode_all(bytes).ok()
}
