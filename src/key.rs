//! Key loading and normalization.
//!
//! The producer stores a key blob that is frequently longer than the 32
//! bytes actually used for AES-256 (historic blobs carry a version preamble
//! and padding). Exactly which 32-byte window is the cipher key changed
//! between producer generations and was never documented, so the window is
//! an explicit, caller-visible policy rather than a baked-in guess.

use std::path::Path;

use secure_gate::RevealSecret;

use crate::aliases::Aes256Key32;
use crate::consts::AES_KEY_LEN;
use crate::error::WacryptError;

/// Which end of the key blob holds the 32-byte AES key.
///
/// The producer's own history is self-contradictory here: some generations
/// read the first 32 bytes of the blob, others the last 32. [`KeyEnd::Last`]
/// is the default because it matches the most widely observed generation,
/// but callers handling older exports may need [`KeyEnd::First`]. There is
/// no reliable in-band way to tell the two apart — if decryption exhausts
/// the layout catalog with one policy, retrying with the other is a
/// legitimate recovery step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyEnd {
    /// Use `blob[..32]`.
    First,
    /// Use `blob[len-32..]` (default).
    #[default]
    Last,
}

/// A normalized 256-bit symmetric key.
///
/// Immutable after creation; the underlying bytes live in a
/// [`secure-gate`](crate::aliases) buffer and are zeroized on drop.
#[derive(Debug)]
pub struct KeyMaterial {
    key: Aes256Key32,
}

impl KeyMaterial {
    /// Load and normalize a key from `path`.
    ///
    /// Reads the whole blob, then slices exactly 32 bytes from the end
    /// selected by `end`.
    ///
    /// # Errors
    ///
    /// - [`WacryptError::KeyNotFound`] — the file cannot be opened or read
    /// - [`WacryptError::KeyTooShort`] — fewer than 32 bytes present
    pub fn load(path: &Path, end: KeyEnd) -> Result<Self, WacryptError> {
        let blob = std::fs::read(path).map_err(|source| WacryptError::KeyNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_blob(&blob, end)
    }

    /// Normalize an in-memory key blob. Same policy as [`KeyMaterial::load`].
    ///
    /// # Errors
    ///
    /// [`WacryptError::KeyTooShort`] if `blob` holds fewer than 32 bytes.
    pub fn from_blob(blob: &[u8], end: KeyEnd) -> Result<Self, WacryptError> {
        if blob.len() < AES_KEY_LEN {
            return Err(WacryptError::KeyTooShort { actual: blob.len() });
        }
        let window = match end {
            KeyEnd::First => &blob[..AES_KEY_LEN],
            KeyEnd::Last => &blob[blob.len() - AES_KEY_LEN..],
        };
        let mut key = [0u8; AES_KEY_LEN];
        key.copy_from_slice(window);
        Ok(Self {
            key: Aes256Key32::new(key),
        })
    }

    /// Expose the raw key bytes for cipher construction.
    pub fn expose_secret(&self) -> &[u8; AES_KEY_LEN] {
        self.key.expose_secret()
    }
}
