//! # PrefixCLI - Nested Subcommand Dispatch with Unique-Prefix Matching
//!
//! An easy way to define a group of commands for a command-line tool.
//! Commands are grouped in a tree: leaves are the commands themselves,
//! interior nodes hold common setup that runs before any command beneath
//! them.
//!
//! ## Features
//!
//! - **Prefix invocation**: any unambiguous prefix of a command word works;
//!   with commands "db create" and "db query", `d c` runs "db create"
//! - **Setup chaining**: interior handlers run before the leaf, outermost
//!   first
//! - **Self-describing help**: stopping at an interior node lists each
//!   subcommand with its shortest unique prefix marked off
//! - **Handler-owned flags**: tokens from the first `-` on are handed to the
//!   resolved handlers untouched
//!
//! ## Quick Start
//!
//! ```rust
//! use prefixcli::CommandTree;
//!
//! let mut tree = CommandTree::new();
//! tree.register("db create", |rest| println!("create {rest:?}"), "create a db")?;
//! tree.register("db query", |rest| println!("query {rest:?}"), "query a db")?;
//!
//! // In main: std::process::exit via the returned ExitCode.
//! let args: Vec<String> = ["prog", "d", "c", "--copies", "3"]
//!     .map(String::from)
//!     .into();
//! let _ = tree.run(&args);
//! # Ok::<(), prefixcli::RegisterError>(())
//! ```

pub mod dispatch;
pub mod error;
pub mod help;
pub mod resolve;
pub mod tree;

pub use error::RegisterError;
pub use resolve::Resolution;
pub use tree::{CommandNode, CommandTree, Handler};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
