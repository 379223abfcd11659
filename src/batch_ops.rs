#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::engine::{Outcome, Session, SessionConfig};
#[cfg(feature = "batch-ops")]
use crate::error::WacryptError;

/// Run many independent decryption sessions in parallel.
///
/// Safe without locking: the layout catalog is immutable and every session
/// owns its buffers and writes to its own destination. The first hard error
/// aborts the batch; unidentified payloads do not (they are degraded
/// successes, reported per session in the returned outcomes).
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch(jobs: &[SessionConfig]) -> Result<Vec<Outcome>, WacryptError> {
    jobs.par_iter()
        .map(|config| Session::new(config.clone()).run())
        .collect()
}
