// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved settings for file characterization.

use case_ident::{HashMethod, SchemeVersion};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Key the preferences are stored under.
pub const PREFS_KEY: &str = "case-file";

/// Base prefix for minted node IRIs unless configured otherwise.
pub const DEFAULT_BASE_PREFIX: &str = "http://example.org/kb/";

/// Defaults for characterizing a file as a graph node.
///
/// Every field is optional in stored JSON; absent fields take the
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseFilePrefs {
    /// Prefix prepended to minted and derived node IRIs.
    pub base_prefix: String,
    /// Derivation scheme for facet identifiers.
    pub scheme: SchemeVersion,
    /// Digests to compute over file contents.
    pub hash_methods: Vec<HashMethod>,
    /// Skip content hashing (and the content data facet) entirely.
    pub disable_hashes: bool,
    /// Omit the modification time.
    pub disable_mtime: bool,
    /// Hash passes before giving up on a changing file.
    pub max_attempts: usize,
}

impl Default for CaseFilePrefs {
    fn default() -> Self {
        Self {
            base_prefix: DEFAULT_BASE_PREFIX.to_owned(),
            scheme: SchemeVersion::V1,
            hash_methods: HashMethod::FILE_DEFAULT.to_vec(),
            disable_hashes: false,
            disable_mtime: false,
            max_attempts: 4,
        }
    }
}

impl CaseFilePrefs {
    /// Rejects settings no run could succeed with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_prefix.is_empty() {
            return Err(ConfigError::Other("base_prefix must not be empty".into()));
        }
        if self.max_attempts < 2 {
            return Err(ConfigError::Other(format!(
                "max_attempts must be at least 2 to confirm a hash, got {}",
                self.max_attempts
            )));
        }
        if self.hash_methods.contains(&HashMethod::Ssdeep) {
            return Err(ConfigError::Other(
                "SSDEEP cannot be computed while characterizing files".into(),
            ));
        }
        Ok(())
    }
}
