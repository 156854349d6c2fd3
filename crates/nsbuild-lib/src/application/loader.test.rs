use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_env_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    let loaded = load_env_files(temp.path()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_local_env_file_takes_precedence() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env.local"),
        "NSBUILD_LOADER_TEST_PRECEDENCE=local\n",
    )
    .unwrap();
    fs::write(
        temp.path().join(".env"),
        "NSBUILD_LOADER_TEST_PRECEDENCE=shared\nNSBUILD_LOADER_TEST_SHARED_ONLY=1\n",
    )
    .unwrap();

    let loaded = load_env_files(temp.path()).unwrap();
    assert_eq!(loaded, vec![".env.local", ".env"]);
    assert_eq!(
        std::env::var("NSBUILD_LOADER_TEST_PRECEDENCE").unwrap(),
        "local"
    );
    assert_eq!(
        std::env::var("NSBUILD_LOADER_TEST_SHARED_ONLY").unwrap(),
        "1"
    );
}

#[test]
fn test_malformed_env_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "THIS IS NOT VALID\n").unwrap();

    match load_env_files(temp.path()).unwrap_err() {
        ConfigError::EnvFileError { file, .. } => assert_eq!(file, ".env"),
        other => panic!("expected EnvFileError, got {:?}", other),
    }
}
