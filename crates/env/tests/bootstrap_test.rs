//! End-to-end tests for the bootstrap sequence.
//!
//! These tests drive the public API the way an application entrypoint
//! would: override files on disk, a native per-request source, and the
//! read-only environment handed to the rest of the process.

use std::fs;

use anyhow::Result;
use appboot_env::{Bootstrapper, EnvValue, Tier, runtime};
use serial_test::serial;
use tempfile::TempDir;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_full_bootstrap_sequence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join(".env"),
        "DB_HOST=localhost\nDB_NAME=app\nDB_USER=app\nDB_PASSWORD=secret\nWORKERS=8\nDEBUG=off\n",
    )?;
    fs::write(
        temp_dir.path().join(".env.production"),
        "DB_HOST=db.internal\nDEBUG=false\nSESSION_DRIVER=null\n",
    )?;

    let bootstrap = Bootstrapper::new()
        .with_root(temp_dir.path())
        .with_inherited_vars(Vec::new())
        .with_native_vars(pairs(&[("APP_ENV", "production"), ("PATH", "/usr/bin")]))
        .load()?;

    // The native source selected the production override file.
    assert_eq!(bootstrap.env.get_str("DB_HOST"), Some("db.internal"));
    assert_eq!(bootstrap.env.get_str("DB_NAME"), Some("app"));
    assert_eq!(bootstrap.env.get_int("WORKERS"), Some(8));
    assert_eq!(bootstrap.env.get_bool("DEBUG"), Some(false));
    assert!(bootstrap.env.is_null("SESSION_DRIVER"));
    assert_eq!(bootstrap.tier, Some(Tier::Production));

    // Sequential reconciliation stopped at PATH and copied only APP_ENV.
    assert_eq!(bootstrap.copied, pairs(&[("APP_ENV", "production")]));
    assert!(!bootstrap.env.contains("PATH"));

    Ok(())
}

#[test]
fn test_bootstrap_publishes_process_constants() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join(".env"),
        "DB_HOST=localhost\nDB_NAME=app\nDB_USER=app\nDB_PASSWORD=secret\n",
    )?;

    let bootstrap = Bootstrapper::new()
        .with_root(temp_dir.path())
        .with_inherited_vars(Vec::new())
        .load()?;
    assert_eq!(bootstrap.tier, Some(Tier::Production));

    // The constants are process-wide and set-once; another test's load may
    // have published first, so only presence is asserted here.
    assert!(runtime::root().is_some());
    assert!(runtime::tier().is_some());

    Ok(())
}

#[test]
fn test_missing_required_key_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join(".env"),
        "DB_NAME=app\nDB_USER=app\nDB_PASSWORD=secret\n",
    )?;

    let result = Bootstrapper::new()
        .with_root(temp_dir.path())
        .with_inherited_vars(Vec::new())
        .load();

    let err = result.expect_err("DB_HOST is missing");
    assert!(err.to_string().contains("DB_HOST"), "message: {err}");

    Ok(())
}

#[test]
fn test_frozen_env_serializes_with_typed_values() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join(".env"),
        "DB_HOST=localhost\nDB_NAME=app\nDB_USER=app\nDB_PASSWORD=secret\nPOOL_SIZE=16\nTLS=on\nPROXY=null\n",
    )?;

    let bootstrap = Bootstrapper::new()
        .with_root(temp_dir.path())
        .with_inherited_vars(Vec::new())
        .load()?;

    let snapshot = serde_json::to_value(&bootstrap.env)?;
    assert_eq!(snapshot["POOL_SIZE"], serde_json::json!(16));
    assert_eq!(snapshot["TLS"], serde_json::json!(true));
    assert_eq!(snapshot["PROXY"], serde_json::json!(null));
    assert_eq!(snapshot["DB_HOST"], serde_json::json!("localhost"));

    Ok(())
}

#[test]
#[serial]
fn test_process_environment_wins_over_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join(".env"),
        "DB_HOST=from-file\nDB_NAME=app\nDB_USER=app\nDB_PASSWORD=secret\n",
    )?;

    temp_env::with_vars([("DB_HOST", Some("from-process"))], || {
        let bootstrap = Bootstrapper::new()
            .with_root(temp_dir.path())
            .load()
            .expect("bootstrap should succeed");

        assert_eq!(
            bootstrap.env.get("DB_HOST"),
            Some(&EnvValue::Str("from-process".to_string()))
        );
    });

    Ok(())
}
