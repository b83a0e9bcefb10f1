mod args;
mod report;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use qpid::kernel::config::load_properties;
use qpid_logger::Logger;
use std::io::Write;
use std::process::ExitCode;

/// Exit code used when at least one checked type is rejected by the policy.
const REJECTED_EXIT_CODE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(cli.level);
    if let Some(filter) = &cli.log_filter {
        logger = logger.env_filter(filter);
    }
    let _log = logger.init()?;

    let properties = load_properties(cli.config.as_deref())
        .context("Critical: Qpid JMS properties are malformed")?;
    tracing::debug!(?properties, "Loaded Qpid JMS properties");

    let factory = qpid::connection_factory(&properties)
        .context("Critical: Qpid JMS connection factory could not be created")?;

    let mut out = std::io::stdout().lock();
    report::write_factory(&mut out, &factory)?;

    if cli.checks.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out)?;
    let rejected = report::write_checks(&mut out, &factory, &cli.checks)?;
    if rejected > 0 {
        tracing::warn!(rejected, "Some types are not trusted by the deserialization policy");
        return Ok(ExitCode::from(REJECTED_EXIT_CODE));
    }

    Ok(ExitCode::SUCCESS)
}
