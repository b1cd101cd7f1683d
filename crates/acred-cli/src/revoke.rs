//! # Revoke Subcommand
//!
//! Revokes a credential as its issuing university or the registry owner.

use std::path::PathBuf;

use clap::Args;

use acred_core::Address;
use acred_registry::CredentialHash;

use crate::ledger;

/// Arguments for the revoke subcommand.
#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Path to the ledger snapshot file.
    #[arg(long)]
    pub ledger: PathBuf,

    /// Caller address (the credential's issuer or the owner).
    #[arg(long)]
    pub caller: String,

    /// The credential hash to revoke (64 hex characters).
    #[arg(long)]
    pub hash: String,
}

/// Revoke the credential.
pub fn run(args: RevokeArgs) -> anyhow::Result<()> {
    let caller = Address::from_hex(&args.caller)?;
    let hash = CredentialHash::from_hex(&args.hash)?;

    let mut registry = ledger::load(&args.ledger)?;
    registry.revoke_credential(caller, hash)?;
    ledger::save(&args.ledger, &registry)?;

    tracing::info!(%hash, revoked_by = %caller, "credential revoked");
    Ok(())
}
