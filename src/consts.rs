//! Global constants for container recovery.
//!
//! Magic signatures, fixed cryptographic sizes, and diagnostic defaults.

/// Canonical 16-byte SQLite 3 file signature (`"SQLite format 3\0"`).
///
/// This is the success oracle for the whole crate: a decryption attempt is
/// only structurally valid once its output (raw or decompressed) starts with
/// these bytes.
pub const SQLITE_MAGIC: [u8; 16] = *b"SQLite format 3\0";

/// Required symmetric key length (AES-256).
pub const AES_KEY_LEN: usize = 32;

/// GCM authentication tag length.
pub const GCM_TAG_LEN: usize = 16;

/// zstd frame magic (little-endian `0xFD2FB528`).
pub const ZSTD_FRAME_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Protobuf length-delimited field-1 marker that opens every
/// protobuf-wrapped backup header.
pub const PROTO_FIELD1_MARKER: u8 = 0x0A;

/// Two-byte cipher-version prefix of the earliest GCM container generation.
pub const CIPHER_VERSION_PREFIX: [u8; 2] = [0x00, 0x01];

/// Minimum number of bytes covered by the diagnostic hex dump.
pub const HEX_DUMP_MIN: usize = 2048;
