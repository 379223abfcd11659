//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! Hard failures surface as [`WacryptError`]; the two per-layout conditions
//! that the scan loop recovers from locally ([`OutOfRange`], [`AuthFailure`])
//! are separate types so callers can never confuse a skipped layout with a
//! terminal failure.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all container recovery operations.
///
/// This enum covers I/O errors, input-file access errors, and the terminal
/// cryptographic failure reached when every known layout has been tried.
#[derive(Error, Debug)]
pub enum WacryptError {
    /// I/O error occurred during file operations.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when output persistence fails (e.g., destination not writable).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key file could not be opened or read.
    #[error("key file unreadable: {path}")]
    KeyNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key file holds fewer than the 32 bytes required for AES-256.
    #[error("key file too short: need 32 bytes, found {actual}")]
    KeyTooShort {
        /// Number of bytes actually present.
        actual: usize,
    },

    /// The container file could not be opened or read.
    #[error("container file unreadable: {path}")]
    ContainerNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Every layout in the catalog was attempted and none produced an
    /// accepted plaintext.
    ///
    /// `tried` lists the id of every layout that was attempted, in trial
    /// order, so callers know the whole catalog was exhausted rather than
    /// just seeing the last failure.
    #[error("no layout produced a valid database (tried: {})", tried.join(", "))]
    DecryptionFailed {
        /// Ids of all attempted layouts, in order.
        tried: Vec<&'static str>,
    },

    /// Cryptographic operation failed for a reason other than tag
    /// verification (e.g., malformed cipher parameters).
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// A layout's geometry does not fit the container buffer.
///
/// Recovered locally by the scan loop: the layout is skipped, never aborting
/// the session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("container too small for layout: need at least {needed} bytes, have {actual}")]
pub struct OutOfRange {
    /// Minimum buffer length the layout requires.
    pub needed: usize,
    /// Actual buffer length.
    pub actual: usize,
}

/// Authenticated decryption rejected the ciphertext.
///
/// Covers a GCM tag mismatch and, for untagged legacy layouts, ciphertext
/// that cannot be a CBC stream at all (not block-aligned). Either way the
/// layout did not match the container; the scan moves on. Plaintext from a
/// failed authentication is never returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("authentication failed: ciphertext rejected for this layout")]
pub struct AuthFailure;

impl From<&'static str> for WacryptError {
    fn from(msg: &'static str) -> Self {
        WacryptError::Crypto(msg.to_string())
    }
}
