// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod engine;
pub mod error;
pub mod header;
pub mod key;
pub mod layout;
pub mod resolver;
pub mod utils;

// High-level API — this is what 99% of users import
pub use engine::{decrypt, Decrypted, Outcome, Session, SessionConfig};
pub use error::WacryptError;
pub use key::{KeyEnd, KeyMaterial};

// Low-level pieces — intentionally public at the root because:
// • Custom recovery flows need them (hand-built catalogs, pre-read buffers)
// • Downstream consumers re-verify the database signature via `is_sqlite`
pub use crypto::{attempt, Recovered, Trust};
pub use error::{AuthFailure, OutOfRange};
pub use header::detect_layout;
pub use layout::{ContainerLayout, ContainerSlices, LAYOUT_CATALOG};
pub use resolver::{is_sqlite, resolve, Codec, ResolvedPayload};

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
