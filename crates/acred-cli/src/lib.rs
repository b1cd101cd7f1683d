//! # acred-cli — ACRED Registry Command-Line Interface
//!
//! Operator tooling for the credential registry, built on a JSON ledger
//! snapshot file. Mutating commands load the snapshot, apply one registry
//! operation, and save only on success — mirroring the atomic-apply
//! behavior of the ledger substrate the core assumes.
//!
//! ## Subcommands
//!
//! - `init` — Create a new ledger snapshot owned by a given address.
//! - `admin` — Owner operations: authorize, deauthorize, pause, unpause.
//! - `issue` — Issue a credential as an authorized university.
//! - `revoke` — Revoke a credential as its issuer or the owner.
//! - `query` — Read-only: get, verify, student listing, audit events.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no business logic here.

pub mod admin;
pub mod init;
pub mod issue;
pub mod ledger;
pub mod query;
pub mod revoke;
