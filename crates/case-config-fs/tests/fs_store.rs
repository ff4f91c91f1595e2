// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use case_app_core::config::{ConfigError, ConfigService, ConfigStore};
use case_app_core::config_port::PrefsPort;
use case_app_core::prefs::{CaseFilePrefs, PREFS_KEY};
use case_config_fs::FsConfigStore;
use case_ident::{HashMethod, SchemeVersion};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn missing_key_is_not_found() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = FsConfigStore::at(dir.path());
    assert!(matches!(store.load_raw("nothing"), Err(ConfigError::NotFound)));
    Ok(())
}

#[test]
fn prefs_round_trip_through_a_nested_directory() -> TestResult {
    let dir = tempfile::tempdir()?;
    let root = dir.path().join("not").join("yet").join("there");
    let service = ConfigService::new(FsConfigStore::at(&root));
    let prefs = CaseFilePrefs {
        base_prefix: "urn:example:".to_owned(),
        scheme: SchemeVersion::V2,
        hash_methods: vec![HashMethod::Sha256],
        ..CaseFilePrefs::default()
    };
    service.save_prefs(&prefs)?;
    assert!(root.join(format!("{PREFS_KEY}.json")).is_file());
    assert_eq!(service.load_prefs()?, prefs);
    Ok(())
}

#[test]
fn pinned_file_serves_every_key() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.json");
    std::fs::write(&path, br#"{ "disable_mtime": true }"#)?;
    let store = FsConfigStore::file(&path);
    assert_eq!(store.path_for(PREFS_KEY), path);

    let prefs = ConfigService::new(store).load_prefs()?;
    assert!(prefs.disable_mtime);
    assert_eq!(prefs.scheme, SchemeVersion::V1);
    Ok(())
}

#[test]
fn unreadable_config_is_an_io_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    // A directory where a file is expected.
    let store = FsConfigStore::file(dir.path());
    assert!(matches!(store.load_raw(PREFS_KEY), Err(ConfigError::Io(_))));
    Ok(())
}
