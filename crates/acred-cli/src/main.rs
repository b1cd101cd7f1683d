//! # acred CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// ACRED CLI — academic credential registry toolchain.
///
/// Initializes ledger snapshots, administers issuers and the pause switch,
/// and issues, revokes, and verifies academic credentials.
#[derive(Parser, Debug)]
#[command(name = "acred", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a new ledger snapshot file.
    Init(acred_cli::init::InitArgs),
    /// Owner administration: authorize, deauthorize, pause, unpause.
    Admin(acred_cli::admin::AdminArgs),
    /// Issue a credential as an authorized university.
    Issue(acred_cli::issue::IssueArgs),
    /// Revoke a credential as its issuer or the owner.
    Revoke(acred_cli::revoke::RevokeArgs),
    /// Read-only queries: get, verify, student listing, audit events.
    Query(acred_cli::query::QueryArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => acred_cli::init::run(args),
        Commands::Admin(args) => acred_cli::admin::run(args),
        Commands::Issue(args) => acred_cli::issue::run(args),
        Commands::Revoke(args) => acred_cli::revoke::run(args),
        Commands::Query(args) => acred_cli::query::run(args),
    }
}
