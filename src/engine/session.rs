//! File-level decryption sessions.
//!
//! A [`Session`] owns exactly one (key file, container file, destination)
//! triple, all injected — the engine holds no ambient path state. Output is
//! never partially written: the payload is fully resolved in memory before
//! any file is created, and exactly one artifact set is produced per
//! session (the recovered database, or the diagnostic pair).

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::HEX_DUMP_MIN;
use crate::crypto::Trust;
use crate::engine::decrypt::decrypt;
use crate::error::WacryptError;
use crate::key::{KeyEnd, KeyMaterial};
use crate::resolver::{Codec, ResolvedPayload};
use crate::utils::hex_ascii_dump;

/// Everything one session needs, supplied by the caller.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key blob to load and normalize.
    pub key_path: PathBuf,
    /// Encrypted container to recover.
    pub container_path: PathBuf,
    /// Destination for the recovered database. Diagnostic artifact names
    /// derive from this path, which also keeps concurrent sessions writing
    /// to distinct destinations collision-free.
    pub output_path: PathBuf,
    /// Key normalization policy (see [`KeyEnd`]).
    pub key_end: KeyEnd,
}

/// What a completed session produced.
#[derive(Debug)]
pub enum Outcome {
    /// A database was recovered and written to `path`.
    Recovered {
        /// Where the database bytes were written.
        path: PathBuf,
        /// Layout that opened the container.
        layout: &'static str,
        /// Secondary codec that was unwrapped, if any.
        codec: Option<Codec>,
        /// Whether the plaintext was authenticated. `Unverified` output
        /// passed structural validation but deserves less trust.
        trust: Trust,
    },
    /// Decryption succeeded but the payload matched no known structure.
    /// Downstream export must not proceed; the artifacts support manual
    /// analysis.
    Unidentified {
        /// Raw decrypted bytes, verbatim.
        raw_path: PathBuf,
        /// Fixed-width hex-and-ASCII dump of the leading bytes.
        dump_path: PathBuf,
        /// Layout that produced the bytes.
        layout: &'static str,
    },
}

impl Outcome {
    /// Did the session end with a usable database?
    pub fn is_database(&self) -> bool {
        matches!(self, Outcome::Recovered { .. })
    }
}

/// One file-to-file decryption session.
pub struct Session {
    config: SessionConfig,
}

impl Session {
    /// Create a session over the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Run the session to completion.
    ///
    /// Reads both inputs, recovers and classifies the payload, then
    /// persists either the database or the diagnostic pair.
    ///
    /// # Errors
    ///
    /// - [`WacryptError::KeyNotFound`] / [`WacryptError::KeyTooShort`] —
    ///   key file problems
    /// - [`WacryptError::ContainerNotFound`] — container unreadable
    /// - [`WacryptError::DecryptionFailed`] — every layout rejected
    /// - [`WacryptError::Io`] — output persistence failed
    ///
    /// An unidentified payload is *not* an error: it completes the session
    /// with [`Outcome::Unidentified`].
    pub fn run(&self) -> Result<Outcome, WacryptError> {
        let key = KeyMaterial::load(&self.config.key_path, self.config.key_end)?;
        let raw = fs::read(&self.config.container_path).map_err(|source| {
            WacryptError::ContainerNotFound {
                path: self.config.container_path.clone(),
                source,
            }
        })?;
        debug!(
            container = %self.config.container_path.display(),
            len = raw.len(),
            "container loaded"
        );

        let decrypted = decrypt(&key, &raw)?;

        match decrypted.payload {
            ResolvedPayload::Sqlite(ref bytes)
            | ResolvedPayload::CompressedSqlite { ref bytes, .. } => {
                fs::write(&self.config.output_path, bytes)?;
                if decrypted.trust == Trust::Unverified {
                    warn!(
                        layout = decrypted.layout,
                        "database recovered from an untagged layout; integrity rests on \
                         structural validation only"
                    );
                }
                debug!(
                    output = %self.config.output_path.display(),
                    layout = decrypted.layout,
                    "database written"
                );
                Ok(Outcome::Recovered {
                    path: self.config.output_path.clone(),
                    layout: decrypted.layout,
                    codec: decrypted.payload.codec(),
                    trust: decrypted.trust,
                })
            }
            ResolvedPayload::Unidentified(bytes) => {
                let raw_path = suffixed(&self.config.output_path, ".unidentified.bin");
                let dump_path = suffixed(&self.config.output_path, ".unidentified.hex");
                fs::write(&raw_path, &bytes)?;
                fs::write(&dump_path, hex_ascii_dump(&bytes, HEX_DUMP_MIN))?;
                warn!(
                    layout = decrypted.layout,
                    raw = %raw_path.display(),
                    dump = %dump_path.display(),
                    "payload unidentified; diagnostic artifacts written"
                );
                Ok(Outcome::Unidentified {
                    raw_path,
                    dump_path,
                    layout: decrypted.layout,
                })
            }
        }
    }
}

/// Append a suffix to a path's final component (`msgstore.db` →
/// `msgstore.db.unidentified.bin`).
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_appends_to_full_name() {
        let path = Path::new("/tmp/out/msgstore.db");
        assert_eq!(
            suffixed(path, ".unidentified.hex"),
            PathBuf::from("/tmp/out/msgstore.db.unidentified.hex")
        );
    }
}
