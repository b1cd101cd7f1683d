//! # Issue Subcommand
//!
//! Issues a credential as an authorized university and prints the
//! resulting credential hash — the opaque token a holder later presents
//! for verification.

use std::path::PathBuf;

use clap::Args;

use acred_core::{Address, StudentId, Timestamp};

use crate::ledger;

/// Arguments for the issue subcommand.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Path to the ledger snapshot file.
    #[arg(long)]
    pub ledger: PathBuf,

    /// Caller address (must be an active issuer).
    #[arg(long)]
    pub caller: String,

    /// Student identifier (e.g. STU123456).
    #[arg(long)]
    pub student_id: String,

    /// Degree awarded (e.g. "Bachelor of Science").
    #[arg(long)]
    pub degree: String,

    /// Course of study (e.g. "Computer Science").
    #[arg(long)]
    pub course_name: String,

    /// Graduation date, ISO8601 UTC with Z suffix
    /// (e.g. 2026-06-15T00:00:00Z).
    #[arg(long)]
    pub graduation_date: String,

    /// Opaque supplementary-document reference (e.g. an IPFS CID).
    /// Stored verbatim; may be omitted.
    #[arg(long, default_value = "")]
    pub document_ref: String,
}

/// Issue the credential and print its hash.
pub fn run(args: IssueArgs) -> anyhow::Result<()> {
    let caller = Address::from_hex(&args.caller)?;
    let graduation_date = Timestamp::parse(&args.graduation_date)?;

    let mut registry = ledger::load(&args.ledger)?;
    let hash = registry.issue_credential(
        caller,
        StudentId::new(args.student_id),
        &args.degree,
        &args.course_name,
        graduation_date,
        &args.document_ref,
    )?;
    ledger::save(&args.ledger, &registry)?;

    tracing::info!(%hash, issuer = %caller, "credential issued");
    println!("{hash}");
    Ok(())
}
