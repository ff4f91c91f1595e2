// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifiers for freshly observed graph nodes.
//!
//! By default every identifier is a random (version 4) UUID. Sample data kept
//! under version control wants the opposite: rerunning a tool should rewrite
//! byte-identical output. Setting `DEMO_UUID_REQUESTING_NONRANDOM` to exactly
//! `NONRANDOM_REQUESTED` switches to name-based UUIDs over a call counter and
//! the invocation's working directory and arguments.
//!
//! The mode is an explicit [`LocalUuidConfig`] owned by a
//! [`LocalUuidGenerator`]. Tools that want a single process-wide generator
//! install one with [`configure`] and draw from it with [`local_uuid`].

mod config;
mod error;
mod generator;

use std::sync::OnceLock;

pub use config::{
    DemoContext, LocalUuidConfig, Mode, DEMO_BASE_VAR, DEMO_TOGGLE_VALUE, DEMO_TOGGLE_VAR,
};
pub use error::LocalUuidError;
pub use generator::{LocalUuidGenerator, DEMO_MARKER};

static GENERATOR: OnceLock<LocalUuidGenerator> = OnceLock::new();

/// Installs the process-wide generator.
///
/// # Errors
///
/// [`LocalUuidError::AlreadyConfigured`] if a generator is already installed,
/// including the random one [`local_uuid`] installs on first use.
pub fn configure(config: LocalUuidConfig) -> Result<&'static LocalUuidGenerator, LocalUuidError> {
    GENERATOR
        .set(LocalUuidGenerator::new(config))
        .map_err(|_| LocalUuidError::AlreadyConfigured)?;
    GENERATOR.get().ok_or(LocalUuidError::AlreadyConfigured)
}

/// Resolves the configuration from the environment and installs it.
///
/// # Errors
///
/// See [`LocalUuidConfig::from_env`] and [`configure`].
pub fn configure_from_env() -> Result<&'static LocalUuidGenerator, LocalUuidError> {
    configure(LocalUuidConfig::from_env()?)
}

/// Mints an identifier from the process-wide generator, installing a random
/// one if [`configure`] was never called.
pub fn local_uuid() -> String {
    GENERATOR
        .get_or_init(|| LocalUuidGenerator::new(LocalUuidConfig::random()))
        .next_id()
}
