//! Layout trial sequencing: magic fast path, then the ordered catalog scan.

use tracing::{debug, trace};

use crate::crypto::{self, Trust};
use crate::error::WacryptError;
use crate::header::detect_layout;
use crate::key::KeyMaterial;
use crate::layout::{ContainerLayout, LAYOUT_CATALOG};
use crate::resolver::{self, ResolvedPayload};

/// Result of a completed decryption session, before any persistence.
#[derive(Debug)]
pub struct Decrypted {
    /// Classified payload.
    pub payload: ResolvedPayload,
    /// Id of the layout that produced it.
    pub layout: &'static str,
    /// Whether the plaintext was authenticated.
    pub trust: Trust,
}

/// Recover and classify the plaintext of one container buffer.
///
/// Selection logic:
/// 1. If the container's leading bytes match a known magic prefix, that
///    layout is tried first and alone (fast path). On authentication
///    failure the engine falls back to the full scan.
/// 2. Otherwise every layout in [`LAYOUT_CATALOG`] is tried in order.
///    Layouts whose geometry does not fit (`OutOfRange`) or whose tag does
///    not verify (`AuthFailure`) are skipped; the first accepted plaintext
///    stops the scan.
///
/// Acceptance depends on trust: tag-verified plaintext is accepted
/// unconditionally (an unrecognizable payload is still a *successful*
/// decryption — a degraded one, surfaced as
/// [`ResolvedPayload::Unidentified`]). Untagged plaintext is accepted only
/// when structural classification finds a database; otherwise the bytes
/// prove nothing and the scan continues.
///
/// # Errors
///
/// [`WacryptError::DecryptionFailed`] listing every attempted layout id
/// when the catalog is exhausted.
pub fn decrypt(key: &KeyMaterial, raw: &[u8]) -> Result<Decrypted, WacryptError> {
    let mut tried: Vec<&'static str> = Vec::new();

    if let Some(layout) = detect_layout(raw) {
        debug!(layout = layout.id, "magic prefix matched, taking fast path");
        if let Some(decrypted) = attempt_layout(key, raw, layout, &mut tried) {
            return Ok(decrypted);
        }
        debug!(layout = layout.id, "fast path failed, scanning catalog");
    }

    for layout in LAYOUT_CATALOG {
        if tried.contains(&layout.id) {
            continue; // already burned on the fast path
        }
        if let Some(decrypted) = attempt_layout(key, raw, layout, &mut tried) {
            return Ok(decrypted);
        }
    }

    debug!(?tried, "catalog exhausted");
    Err(WacryptError::DecryptionFailed { tried })
}

/// Try exactly one layout. Records the attempt in `tried`; returns `None`
/// on any locally-recoverable failure so the caller keeps scanning.
fn attempt_layout(
    key: &KeyMaterial,
    raw: &[u8],
    layout: &'static ContainerLayout,
    tried: &mut Vec<&'static str>,
) -> Option<Decrypted> {
    tried.push(layout.id);

    let slices = match layout.slice(raw) {
        Ok(slices) => slices,
        Err(err) => {
            trace!(layout = layout.id, %err, "layout skipped");
            return None;
        }
    };

    let recovered = match crypto::attempt(key, slices.iv, slices.ciphertext, slices.tag) {
        Ok(recovered) => recovered,
        Err(err) => {
            debug!(layout = layout.id, %err, "layout rejected");
            return None;
        }
    };

    let trust = recovered.trust;
    let payload = resolver::resolve(recovered.bytes);

    if trust == Trust::Unverified && payload.database_bytes().is_none() {
        // Nothing vouched for these bytes and they look like nothing we
        // know. Treat as a layout mismatch, not as a degraded success.
        debug!(
            layout = layout.id,
            "unauthenticated plaintext failed structural validation"
        );
        return None;
    }

    debug!(layout = layout.id, ?trust, "layout accepted");
    Some(Decrypted {
        payload,
        layout: layout.id,
        trust,
    })
}
