//! # Ledger Snapshot Persistence
//!
//! Load/save helpers for the JSON ledger snapshot the CLI operates on.
//! A snapshot is one serialized `CredentialRegistry`; mutating commands
//! save only after the operation succeeds, so a rejected operation leaves
//! the file untouched.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

use acred_core::Address;
use acred_registry::CredentialRegistry;

/// Create a new ledger snapshot owned by `owner`.
///
/// Refuses to overwrite an existing file.
pub fn init(path: &Path, owner: Address) -> anyhow::Result<()> {
    if path.exists() {
        bail!("ledger file {} already exists", path.display());
    }
    save(path, &CredentialRegistry::new(owner))
}

/// Load a registry from a ledger snapshot file.
pub fn load(path: &Path) -> anyhow::Result<CredentialRegistry> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading ledger file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing ledger file {}", path.display()))
}

/// Save a registry to a ledger snapshot file.
pub fn save(path: &Path, registry: &CredentialRegistry) -> anyhow::Result<()> {
    let json =
        serde_json::to_string_pretty(registry).context("serializing ledger snapshot")?;
    fs::write(path, json).with_context(|| format!("writing ledger file {}", path.display()))
}
