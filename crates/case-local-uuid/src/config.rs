// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generator configuration, resolved once from the invoking environment.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::LocalUuidError;

/// Environment variable that requests reproducible identifiers.
pub const DEMO_TOGGLE_VAR: &str = "DEMO_UUID_REQUESTING_NONRANDOM";
/// The only value of [`DEMO_TOGGLE_VAR`] that enables demo mode.
pub const DEMO_TOGGLE_VALUE: &str = "NONRANDOM_REQUESTED";
/// Environment variable naming a base directory; setting it also enables demo
/// mode, with the working directory rendered relative to it.
pub const DEMO_BASE_VAR: &str = "CASE_DEMO_NONRANDOM_UUID_BASE";

/// Invocation fingerprint mixed into demo-mode identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoContext {
    location: String,
    argv: Vec<String>,
}

impl DemoContext {
    /// Builds a context from an already-rendered working directory and the
    /// argument vector (program name included).
    pub fn new(location: impl Into<String>, argv: Vec<String>) -> Self {
        Self {
            location: location.into(),
            argv,
        }
    }

    /// Rendered working directory (`~`-relative or base-relative).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Argument vector of the invoking process.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// How identifiers are minted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Version 4 UUIDs.
    Random,
    /// Version 5 UUIDs over a counter and the invocation fingerprint.
    Demo(DemoContext),
}

/// Resolved generator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalUuidConfig {
    mode: Mode,
}

impl LocalUuidConfig {
    /// Random identifiers.
    pub fn random() -> Self {
        Self { mode: Mode::Random }
    }

    /// Reproducible identifiers for `context`.
    pub fn demo(context: DemoContext) -> Self {
        Self {
            mode: Mode::Demo(context),
        }
    }

    /// The resolved mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Resolves the configuration from the process environment, working
    /// directory and arguments.
    ///
    /// # Errors
    ///
    /// [`LocalUuidError::Configuration`] when demo mode is requested but the
    /// context it needs cannot be established.
    pub fn from_env() -> Result<Self, LocalUuidError> {
        let cwd = std::env::current_dir().ok();
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            cwd.as_deref(),
            std::env::args().collect(),
        )
    }

    /// Resolves the configuration from an injected environment.
    ///
    /// Random mode never consults `cwd` or `argv`. Demo mode is entered when
    /// [`DEMO_BASE_VAR`] is set, or when [`DEMO_TOGGLE_VAR`] equals
    /// [`DEMO_TOGGLE_VALUE`] exactly.
    ///
    /// # Errors
    ///
    /// [`LocalUuidError::Configuration`] when demo mode is requested and the
    /// working directory is unknown, `HOME` is unset, or the base directory is
    /// not a directory containing the working directory.
    pub fn from_lookup<F>(
        lookup: F,
        cwd: Option<&Path>,
        argv: Vec<String>,
    ) -> Result<Self, LocalUuidError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(DEMO_BASE_VAR).filter(|v| !v.is_empty());
        let toggled = lookup(DEMO_TOGGLE_VAR).as_deref() == Some(DEMO_TOGGLE_VALUE);
        if base.is_none() && !toggled {
            return Ok(Self::random());
        }

        let cwd = cwd.ok_or_else(|| {
            LocalUuidError::Configuration("working directory is unavailable".to_owned())
        })?;
        let location = match base {
            Some(base) => relative_to_base(cwd, Path::new(&base))?,
            None => {
                let home = lookup("HOME").filter(|v| !v.is_empty()).ok_or_else(|| {
                    LocalUuidError::Configuration(format!("{DEMO_TOGGLE_VAR} is set but HOME is not"))
                })?;
                home_relative(cwd, Path::new(&home))
            }
        };
        info!(%location, "reproducible UUIDs requested; minted identifiers are not random");
        Ok(Self::demo(DemoContext::new(location, argv)))
    }
}

fn home_relative(cwd: &Path, home: &Path) -> String {
    match cwd.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_owned(),
        Ok(rest) => PathBuf::from("~").join(rest).display().to_string(),
        Err(_) => cwd.display().to_string(),
    }
}

fn relative_to_base(cwd: &Path, base: &Path) -> Result<String, LocalUuidError> {
    if !base.is_dir() {
        return Err(LocalUuidError::Configuration(format!(
            "{DEMO_BASE_VAR}={} is not a directory",
            base.display()
        )));
    }
    let rest = cwd.strip_prefix(base).map_err(|_| {
        LocalUuidError::Configuration(format!(
            "working directory {} is outside {DEMO_BASE_VAR}={}",
            cwd.display(),
            base.display()
        ))
    })?;
    if rest.as_os_str().is_empty() {
        Ok(".".to_owned())
    } else {
        Ok(rest.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn argv() -> Vec<String> {
        vec!["case_file".to_owned(), "out.json".to_owned()]
    }

    #[test]
    fn absent_toggle_is_random() {
        let config = LocalUuidConfig::from_lookup(env(&[]), None, argv());
        assert_eq!(config, Ok(LocalUuidConfig::random()));
    }

    #[test]
    fn toggle_must_match_exactly() {
        for value in ["nonrandom_requested", "NONRANDOM_REQUESTED ", "1", ""] {
            let config = LocalUuidConfig::from_lookup(
                env(&[(DEMO_TOGGLE_VAR, value), ("HOME", "/home/u")]),
                Some(Path::new("/home/u/work")),
                argv(),
            );
            assert_eq!(config, Ok(LocalUuidConfig::random()), "value {value:?}");
        }
    }

    #[test]
    fn home_prefix_becomes_tilde() {
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_TOGGLE_VAR, DEMO_TOGGLE_VALUE), ("HOME", "/home/u")]),
            Some(Path::new("/home/u/work")),
            argv(),
        );
        assert_eq!(
            config,
            Ok(LocalUuidConfig::demo(DemoContext::new("~/work", argv())))
        );
    }

    #[test]
    fn cwd_outside_home_is_kept_verbatim() {
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_TOGGLE_VAR, DEMO_TOGGLE_VALUE), ("HOME", "/home/u")]),
            Some(Path::new("/srv/data")),
            argv(),
        );
        assert_eq!(
            config,
            Ok(LocalUuidConfig::demo(DemoContext::new("/srv/data", argv())))
        );
    }

    #[test]
    fn missing_home_is_a_configuration_error() {
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_TOGGLE_VAR, DEMO_TOGGLE_VALUE)]),
            Some(Path::new("/srv/data")),
            argv(),
        );
        assert!(matches!(config, Err(LocalUuidError::Configuration(_))));
    }

    #[test]
    fn unknown_cwd_is_a_configuration_error() {
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_TOGGLE_VAR, DEMO_TOGGLE_VALUE), ("HOME", "/home/u")]),
            None,
            argv(),
        );
        assert!(matches!(config, Err(LocalUuidError::Configuration(_))));
    }

    #[test]
    fn base_directory_renders_relative_location() -> Result<(), Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let nested = base.path().join("fixtures");
        std::fs::create_dir(&nested)?;
        let base_str = base.path().display().to_string();
        let lookup = env(&[(DEMO_BASE_VAR, base_str.as_str())]);

        let at_base = LocalUuidConfig::from_lookup(&lookup, Some(base.path()), argv())?;
        assert_eq!(at_base, LocalUuidConfig::demo(DemoContext::new(".", argv())));

        let below = LocalUuidConfig::from_lookup(&lookup, Some(&nested), argv())?;
        assert_eq!(below, LocalUuidConfig::demo(DemoContext::new("fixtures", argv())));
        Ok(())
    }

    #[test]
    fn base_that_is_not_a_directory_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let file = tempfile::NamedTempFile::new()?;
        let file_str = file.path().display().to_string();
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_BASE_VAR, file_str.as_str())]),
            Some(Path::new("/")),
            argv(),
        );
        assert!(matches!(config, Err(LocalUuidError::Configuration(_))));

        let missing = file.path().join("nonexistent");
        let missing_str = missing.display().to_string();
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_BASE_VAR, missing_str.as_str())]),
            Some(Path::new("/")),
            argv(),
        );
        assert!(matches!(config, Err(LocalUuidError::Configuration(_))));
        Ok(())
    }

    #[test]
    fn cwd_outside_base_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;
        let base_str = base.path().display().to_string();
        let config = LocalUuidConfig::from_lookup(
            env(&[(DEMO_BASE_VAR, base_str.as_str())]),
            Some(Path::new("/")),
            argv(),
        );
        assert!(matches!(config, Err(LocalUuidError::Configuration(_))));
        Ok(())
    }
}
