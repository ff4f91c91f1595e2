// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use case_ident::HashMethod;

/// Errors from hashing a byte source.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// Opening, seeking or reading the source failed; the pass was abandoned.
    #[error("[DIGEST_IO] {0}")]
    Io(#[from] std::io::Error),

    /// No two consecutive passes agreed; the source kept changing under us.
    #[error("[DIGEST_UNSTABLE] hashes did not converge after {attempts} attempts")]
    HashConfirmationFailed {
        /// Passes made before giving up.
        attempts: usize,
    },

    /// The method has no streaming implementation here.
    #[error("[DIGEST_UNSUPPORTED] {0} cannot be computed by this hasher")]
    UnsupportedMethod(HashMethod),
}
