//! # Init Subcommand
//!
//! Creates a new ledger snapshot file owned by the given address,
//! mirroring contract deployment where the deployer becomes owner.

use std::path::PathBuf;

use clap::Args;

use acred_core::Address;

use crate::ledger;

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the ledger snapshot file to create.
    #[arg(long)]
    pub ledger: PathBuf,

    /// Owner address (0x-prefixed hex).
    #[arg(long)]
    pub owner: String,
}

/// Create the ledger snapshot.
pub fn run(args: InitArgs) -> anyhow::Result<()> {
    let owner = Address::from_hex(&args.owner)?;
    ledger::init(&args.ledger, owner)?;
    tracing::info!(%owner, ledger = %args.ledger.display(), "ledger initialized");
    Ok(())
}
