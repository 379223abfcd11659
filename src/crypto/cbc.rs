//! Unauthenticated AES-256-CBC for the oldest container generation.
//!
//! These exports predate authenticated encryption: the file is a bare IV
//! followed by CBC ciphertext, no padding, no tag. Anything recovered here
//! is `Unverified` by construction.

use aes::Aes256;
use cipher::block_padding::NoPadding;
use cipher::{BlockDecryptMut, KeyIvInit};

use crate::error::AuthFailure;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypt a legacy CBC ciphertext with the supplied 16-byte IV.
///
/// Ciphertext that is empty or not a multiple of the block size cannot have
/// been produced by this generation at all, so it is rejected as
/// [`AuthFailure`] and the scan moves on.
pub(crate) fn decrypt_unauthenticated(
    key: &[u8; 32],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, AuthFailure> {
    if iv.len() != 16 || ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
        return Err(AuthFailure);
    }

    let decryptor = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| AuthFailure)?;
    let mut buffer = ciphertext.to_vec();
    decryptor
        .decrypt_padded_mut::<NoPadding>(&mut buffer)
        .map_err(|_| AuthFailure)?;
    Ok(buffer)
}
