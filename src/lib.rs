//! hulk - Bash alias and environment file manager
//!
//! Reads `~/.aliases` and `~/.env` into structured, grouped records and
//! writes aliases back without losing lines the parser does not understand.
//!
//! # Features
//!
//! - Parse aliases and exported variables, grouped by `# Heading` comments
//! - Add and remove aliases in the right group through an in-memory store
//! - Rewrite `~/.aliases` atomically, with sidecar and timestamped backups
//! - Check for duplicate definitions
//! - Serve the same operations as newline-delimited JSON requests

pub mod api;
pub mod backup;
pub mod checker;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod model;
pub mod parser;
pub mod store;
pub mod utils;

pub use api::HulkApi;
pub use error::{HulkError, Result};
pub use formatter::{AliasFormatter, Formatter};
pub use model::{AliasRecord, Config, EnvRecord, HulkPaths};
pub use parser::{AliasParser, EnvParser, Parser};
pub use store::{RecordStore, StoreKey};
