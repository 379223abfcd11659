//! High-level decryption facade.
//!
//! Core API: `decrypt(&key, &raw)?` for in-memory recovery, [`Session`] for
//! full file-to-file handling including diagnostic artifacts.

pub(crate) mod decrypt;
pub(crate) mod session;

pub use decrypt::{decrypt, Decrypted};
pub use session::{Outcome, Session, SessionConfig};
