// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Errors raised while configuring the generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalUuidError {
    /// Demo mode was requested without the context it needs.
    #[error("[LOCAL_UUID_CONFIG] {0}")]
    Configuration(String),

    /// A process-wide generator was already installed.
    #[error("[LOCAL_UUID_CONFIGURED] the process-wide generator is already configured")]
    AlreadyConfigured,
}
