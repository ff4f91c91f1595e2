// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `case-uuid`: file characterization and identifier derivation for CASE
//! graphs.
//!
//! The binary is a thin wrapper over [`entrypoint`]; the subcommands are
//! reachable in-process through [`cli::run`] with an explicit identifier
//! generator.

pub mod characterize;
pub mod cli;
pub mod graph;

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parses the command line, installs logging, and runs the requested
/// subcommand. The process-wide identifier generator is installed from the
/// environment only when the subcommand mints identifiers.
pub fn entrypoint() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("{e}"))
        .context("configuration: logging")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli, case_local_uuid::configure_from_env, &mut out)?;
    out.flush().context("output: stdout")?;
    Ok(())
}
