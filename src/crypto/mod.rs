//! Low-level decryption primitives.
//!
//! One entry point, [`attempt`]: authenticated AES-256-GCM when the layout
//! carries a trailing tag, unauthenticated AES-256-CBC otherwise. The tag,
//! when present, is always verified — a buffer that fails authentication is
//! rejected, never returned as plaintext. Untagged output is labeled
//! [`Trust::Unverified`] and must survive structural validation before a
//! caller may accept it.

pub(crate) mod cbc;
pub(crate) mod gcm;

use crate::error::AuthFailure;
use crate::key::KeyMaterial;

/// How much integrity protection the recovered plaintext actually had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trust {
    /// GCM tag verified over the full ciphertext.
    Verified,
    /// Legacy untagged layout: the bytes decrypted, nothing vouches for
    /// them. Structural validation is the only check such output gets.
    Unverified,
}

/// Plaintext recovered from one decryption attempt, with its trust label.
#[derive(Debug)]
pub struct Recovered {
    /// The decrypted bytes.
    pub bytes: Vec<u8>,
    /// Integrity level of `bytes`.
    pub trust: Trust,
}

/// Decrypt one `(iv, ciphertext, tag)` triple under `key`.
///
/// The IV is used exactly as supplied by the layout (12 or 16 bytes for
/// GCM, 16 for CBC); no nonce derivation or reuse detection happens here —
/// every container carries its own IV.
///
/// CPU-bound only; this function performs no I/O.
///
/// # Errors
///
/// [`AuthFailure`] when the tag does not verify, or when an untagged
/// layout's ciphertext cannot be a CBC stream (not block-aligned). Both mean
/// "this layout does not fit the container" to the scan loop.
pub fn attempt(
    key: &KeyMaterial,
    iv: &[u8],
    ciphertext: &[u8],
    tag: Option<&[u8]>,
) -> Result<Recovered, AuthFailure> {
    match tag {
        Some(tag) => gcm::decrypt_detached(key.expose_secret(), iv, ciphertext, tag).map(|bytes| {
            Recovered {
                bytes,
                trust: Trust::Verified,
            }
        }),
        None => cbc::decrypt_unauthenticated(key.expose_secret(), iv, ciphertext).map(|bytes| {
            Recovered {
                bytes,
                trust: Trust::Unverified,
            }
        }),
    }
}
