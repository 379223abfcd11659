//! tests/common.rs
//! Shared constants and container builders used across test files

use aes::Aes256;
use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::{AesGcm, KeyInit};

use wacrypt_rs::consts::SQLITE_MAGIC;
use wacrypt_rs::ContainerLayout;

/// Standard 32-byte test key used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY: [u8; 32] = [0x42; 32];

/// Header filler that matches no magic prefix
#[allow(dead_code)]
pub const HEADER_FILLER: u8 = 0xB7;

/// A minimal database image: the canonical signature plus padding.
#[allow(dead_code)]
pub fn sqlite_payload(len: usize) -> Vec<u8> {
    assert!(len >= SQLITE_MAGIC.len());
    let mut bytes = SQLITE_MAGIC.to_vec();
    bytes.resize(len, 0x5A);
    bytes
}

/// AES-256-GCM seal with a detached tag, for 12- or 16-byte IVs.
#[allow(dead_code)]
pub fn gcm_seal(key: &[u8; 32], iv: &[u8], plaintext: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let key = GenericArray::from_slice(key);
    let mut buffer = plaintext.to_vec();
    let tag = match iv.len() {
        12 => AesGcm::<Aes256, U12>::new(key)
            .encrypt_in_place_detached(GenericArray::from_slice(iv), b"", &mut buffer)
            .unwrap()
            .as_slice()
            .to_vec(),
        16 => AesGcm::<Aes256, U16>::new(key)
            .encrypt_in_place_detached(GenericArray::from_slice(iv), b"", &mut buffer)
            .unwrap()
            .as_slice()
            .to_vec(),
        other => panic!("unsupported test IV length: {other}"),
    };
    (buffer, tag)
}

/// Assemble a container for a tagged GCM layout: filler preamble, IV at the
/// layout's offset, ciphertext, trailing tag.
#[allow(dead_code)]
pub fn build_gcm_container(
    layout: &ContainerLayout,
    key: &[u8; 32],
    iv_byte: u8,
    plaintext: &[u8],
) -> Vec<u8> {
    assert!(layout.has_trailing_tag);
    let iv = vec![iv_byte; layout.iv_len];
    let (ciphertext, tag) = gcm_seal(key, &iv, plaintext);

    let mut raw = vec![HEADER_FILLER; layout.header_len];
    raw[layout.iv_offset..layout.iv_offset + layout.iv_len].copy_from_slice(&iv);
    raw.extend_from_slice(&ciphertext);
    raw.extend_from_slice(&tag);
    raw
}
