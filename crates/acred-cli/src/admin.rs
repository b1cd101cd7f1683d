//! # Admin Subcommand
//!
//! Owner-only registry administration: issuer authorization and the
//! global pause switch. Every command takes `--caller`; the registry
//! itself decides whether that caller holds the owner capability.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use acred_core::Address;

use crate::ledger;

/// Arguments for the admin subcommand.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Owner administration commands.
#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Authorize a university to issue credentials.
    Authorize {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// Caller address (must be the owner).
        #[arg(long)]
        caller: String,
        /// The university's address.
        #[arg(long)]
        address: String,
        /// The university's display name.
        #[arg(long)]
        name: String,
    },
    /// Deauthorize a university.
    Deauthorize {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// Caller address (must be the owner).
        #[arg(long)]
        caller: String,
        /// The university's address.
        #[arg(long)]
        address: String,
    },
    /// Engage the global pause.
    Pause {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// Caller address (must be the owner).
        #[arg(long)]
        caller: String,
    },
    /// Release the global pause.
    Unpause {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// Caller address (must be the owner).
        #[arg(long)]
        caller: String,
    },
}

/// Apply one admin operation to the ledger snapshot.
pub fn run(args: AdminArgs) -> anyhow::Result<()> {
    match args.command {
        AdminCommand::Authorize {
            ledger,
            caller,
            address,
            name,
        } => {
            let caller = Address::from_hex(&caller)?;
            let address = Address::from_hex(&address)?;
            let mut registry = ledger::load(&ledger)?;
            registry.authorize_university(caller, address, &name)?;
            ledger::save(&ledger, &registry)?;
            tracing::info!(%address, name = %name, "university authorized");
        }
        AdminCommand::Deauthorize {
            ledger,
            caller,
            address,
        } => {
            let caller = Address::from_hex(&caller)?;
            let address = Address::from_hex(&address)?;
            let mut registry = ledger::load(&ledger)?;
            registry.deauthorize_university(caller, address)?;
            ledger::save(&ledger, &registry)?;
            tracing::info!(%address, "university deauthorized");
        }
        AdminCommand::Pause { ledger, caller } => {
            let caller = Address::from_hex(&caller)?;
            let mut registry = ledger::load(&ledger)?;
            registry.pause(caller)?;
            ledger::save(&ledger, &registry)?;
            tracing::info!("registry paused");
        }
        AdminCommand::Unpause { ledger, caller } => {
            let caller = Address::from_hex(&caller)?;
            let mut registry = ledger::load(&ledger)?;
            registry.unpause(caller)?;
            ledger::save(&ledger, &registry)?;
            tracing::info!("registry unpaused");
        }
    }
    Ok(())
}
