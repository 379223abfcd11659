//! AES-256-GCM with detached tags.
//!
//! The container family uses both 128-bit IVs (all early generations) and
//! 96-bit nonces (late generations), so both instantiations are kept.

use aes::Aes256;
use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::{AesGcm, KeyInit};

use crate::consts::GCM_TAG_LEN;
use crate::error::AuthFailure;

type Aes256Gcm12 = AesGcm<Aes256, U12>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Decrypt `ciphertext` and verify the detached `tag`.
///
/// Returns the plaintext only when the tag verifies. A nonce length other
/// than 12 or 16, or a malformed tag, is reported as [`AuthFailure`] — to
/// the scan loop it is indistinguishable from a layout mismatch.
pub(crate) fn decrypt_detached(
    key: &[u8; 32],
    iv: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, AuthFailure> {
    if tag.len() != GCM_TAG_LEN {
        return Err(AuthFailure);
    }
    let tag = GenericArray::from_slice(tag);
    let key = GenericArray::from_slice(key);
    let mut buffer = ciphertext.to_vec();

    let verified = match iv.len() {
        12 => Aes256Gcm12::new(key).decrypt_in_place_detached(
            GenericArray::from_slice(iv),
            b"",
            &mut buffer,
            tag,
        ),
        16 => Aes256Gcm16::new(key).decrypt_in_place_detached(
            GenericArray::from_slice(iv),
            b"",
            &mut buffer,
            tag,
        ),
        _ => return Err(AuthFailure),
    };

    match verified {
        Ok(()) => Ok(buffer),
        Err(_) => Err(AuthFailure),
    }
}
