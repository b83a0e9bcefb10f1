//! # CLI Argument Definitions

use clap::Parser;
use qpid_logger::LevelFilter;
use std::path::PathBuf;

/// Resolves Qpid JMS properties into a connection factory and reports the result.
#[derive(Debug, Parser)]
#[command(name = "qpid-probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve Qpid JMS properties and check types against the deserialization policy")]
pub(crate) struct Cli {
    /// Properties file (TOML, YAML or JSON). Without it an optional `qpidjms.*` file in
    /// the working directory is used. `QPIDJMS__*` variables override either.
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Fully qualified type name to check against the deserialization policy (repeatable)
    #[arg(long = "check", value_name = "TYPE")]
    pub(crate) checks: Vec<String>,

    /// Minimum log level
    #[arg(short, long, default_value = "warn")]
    pub(crate) level: LevelFilter,

    /// Log filter directives (e.g. `qpid_autoconfigure=debug`), overriding `--level`
    #[arg(long, value_name = "DIRECTIVES")]
    pub(crate) log_filter: Option<String>,
}
