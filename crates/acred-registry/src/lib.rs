//! # acred-registry — The Credential Registry Core
//!
//! Implements the academic credential registry's governing state machine:
//! issuer authorization, deterministic credential identification, issuance,
//! revocation, per-student indexing, and global pause control.
//!
//! ## Components
//!
//! - **`access`** — owner-gated issuer directory (address → name, active
//!   flag); records are never physically deleted.
//! - **`pause`** — single global flag gating credential-store mutations;
//!   queries are never blocked.
//! - **`credential`** — the credential record, its `Active → Revoked`
//!   status machine, and deterministic hash computation.
//! - **`index`** — append-only per-student list of credential hashes.
//! - **`audit`** — append-only event log; write-only from the core's
//!   perspective.
//! - **`registry`** — `CredentialRegistry`, the explicitly owned store
//!   threading every operation.
//! - **`error`** — the Authorization / Validation / State / Availability
//!   rejection taxonomy.
//!
//! ## Design
//!
//! The ledger substrate executes each mutating call atomically and in a
//! single total order, so the registry is a plain owned value with
//! `&mut self` methods. Every mutating method evaluates all of its guards
//! before its first write: a rejected call is an atomic no-op.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod access;
pub mod audit;
pub mod credential;
pub mod error;
pub mod index;
pub mod pause;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use access::{Issuer, IssuerDirectory};
pub use audit::{AuditLog, RegistryEvent};
pub use credential::{compute_credential_hash, Credential, CredentialHash, CredentialStatus};
pub use error::{ErrorKind, RegistryError};
pub use index::StudentIndex;
pub use pause::PauseSwitch;
pub use registry::CredentialRegistry;
