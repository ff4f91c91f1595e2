// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port shared across CASE tools.

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::{CaseFilePrefs, PREFS_KEY};

/// Config-facing port for loading/saving file characterization preferences.
pub trait PrefsPort {
    /// Load preferences, falling back to defaults when none are stored.
    /// Stored values that fail validation are an error, not a fallback.
    fn load_prefs(&self) -> Result<CaseFilePrefs, ConfigError>;
    /// Persist preferences.
    fn save_prefs(&self, prefs: &CaseFilePrefs) -> Result<(), ConfigError>;
}

impl<S: ConfigStore> PrefsPort for ConfigService<S> {
    fn load_prefs(&self) -> Result<CaseFilePrefs, ConfigError> {
        let prefs = self.load::<CaseFilePrefs>(PREFS_KEY)?.unwrap_or_default();
        prefs.validate()?;
        Ok(prefs)
    }

    fn save_prefs(&self, prefs: &CaseFilePrefs) -> Result<(), ConfigError> {
        prefs.validate()?;
        self.save(PREFS_KEY, prefs)
    }
}
