//! # acred-core — Foundational Types for the ACRED Registry
//!
//! Defines the type-system primitives the credential registry is built on.
//! Every other crate in the workspace depends on `acred-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address`, `StudentId`,
//!    `ContentDigest`, `Timestamp` — no bare strings or integers for
//!    identifiers and instants.
//!
//! 2. **`CanonicalBytes` newtype.** All digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    Credential hashes are only meaningful if the preimage bytes are
//!    deterministic.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision, matching the canonicalization rules.
//!
//! 4. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path flows through canonicalization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `acred-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{AcredError, CanonicalizationError};
pub use identity::{Address, StudentId};
pub use temporal::Timestamp;
