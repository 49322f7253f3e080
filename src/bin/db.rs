//! Demonstration CLI for prefixcli
//!
//! A toy "db" tool with the classic shape: a shared `--db` flag defined at
//! the group level and two leaf commands, `db create` and `db query`. Any
//! unique prefix works, so `db d c` and `db db create` are the same command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use prefixcli::CommandTree;

/// Flags shared by every db command.
#[derive(clap::Args)]
struct DbOpts {
    /// Path to the DB file
    #[arg(long, default_value = "")]
    db: String,
}

#[derive(Parser)]
#[command(name = "db create")]
struct CreateArgs {
    #[command(flatten)]
    common: DbOpts,

    /// Number of versions to keep
    #[arg(long, default_value_t = 3)]
    copies: u32,
}

#[derive(Parser)]
#[command(name = "db query")]
struct QueryArgs {
    #[command(flatten)]
    common: DbOpts,

    /// Key to query
    #[arg(long, default_value = "")]
    key: String,

    /// Query only the last version
    #[arg(long)]
    last: bool,
}

/// Parse a handler's leftover tokens with clap. `name` stands in for the
/// binary name clap expects as the first token.
fn parse<T: Parser>(name: &str, rest: &[String]) -> T {
    T::parse_from(std::iter::once(name.to_string()).chain(rest.iter().cloned()))
}

fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    setup_logging();
    tracing::debug!("{} {}", prefixcli::PKG_NAME, prefixcli::VERSION);

    let mut tree = CommandTree::new();
    tree.register(
        "db",
        |_| tracing::debug!("db group setup"),
        "commands to operate a DB",
    )?;
    tree.register(
        "db create",
        |rest| {
            let args: CreateArgs = parse("db create", rest);
            println!("create db {} {}", args.common.db, args.copies);
        },
        "create a db",
    )?;
    tree.register(
        "db query",
        |rest| {
            let args: QueryArgs = parse("db query", rest);
            println!("query db {} {} {}", args.common.db, args.key, args.last);
        },
        "query a db",
    )?;

    Ok(tree.run_main())
}
