//! # Query Subcommand
//!
//! Read-only views over a ledger snapshot. Queries never mutate and never
//! reject the caller: an unknown hash or student yields "not found" /
//! `false` / an empty list, not an error.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use acred_core::StudentId;
use acred_registry::CredentialHash;

use crate::ledger;

/// Arguments for the query subcommand.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

/// Read-only queries.
#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Fetch the full credential record for a hash.
    Get {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// The credential hash (64 hex characters).
        #[arg(long)]
        hash: String,
    },
    /// Check that a credential exists and has not been revoked.
    Verify {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// The credential hash (64 hex characters).
        #[arg(long)]
        hash: String,
    },
    /// List a student's credential hashes in issuance order.
    Student {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
        /// The student identifier.
        #[arg(long)]
        id: String,
    },
    /// Print the audit log, one event per line.
    Events {
        /// Path to the ledger snapshot file.
        #[arg(long)]
        ledger: PathBuf,
    },
}

/// Run one read-only query against the ledger snapshot.
pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    match args.command {
        QueryCommand::Get { ledger, hash } => {
            let hash = CredentialHash::from_hex(&hash)?;
            let registry = ledger::load(&ledger)?;
            match registry.get_credential(&hash) {
                Some(credential) => {
                    println!("{}", serde_json::to_string_pretty(credential)?);
                }
                None => println!("credential {hash} not found"),
            }
        }
        QueryCommand::Verify { ledger, hash } => {
            let hash = CredentialHash::from_hex(&hash)?;
            let registry = ledger::load(&ledger)?;
            println!("{}", registry.verify_credential(&hash));
        }
        QueryCommand::Student { ledger, id } => {
            let student_id = StudentId::new(id);
            let registry = ledger::load(&ledger)?;
            let hashes = registry.student_credentials(&student_id);
            println!(
                "{} credential(s) for {student_id}",
                registry.student_credential_count(&student_id)
            );
            for hash in hashes {
                println!("{hash}");
            }
        }
        QueryCommand::Events { ledger } => {
            let registry = ledger::load(&ledger)?;
            for event in registry.events() {
                println!("{}", serde_json::to_string(event)?);
            }
        }
    }
    Ok(())
}
