//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate). Key material
//! is zeroized on drop and requires explicit `.expose_secret()` at use
//! sites, so the raw key never leaks through `Debug` or accidental copies.

use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // normalized backup key

/// Generic secure stack buffer (direct alias to secure-gate's `Fixed`).
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;
