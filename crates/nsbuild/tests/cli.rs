//! CLI tests for the nsbuild binary
//!
//! Each test runs the real binary inside a temporary tree with the
//! `NSBUILD_*` environment cleared.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/base.js", "var goog = goog || {};\n");
    write(root, "src/a.js", "goog.provide('app.a');\n");
    write(
        root,
        "src/b.js",
        "goog.provide('app.b');\ngoog.require('app.a');\napp.b.DEBUG = false;\n",
    );
    temp
}

fn nsbuild(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nsbuild"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("NSBUILD_COMPILER_JAR")
        .env_remove("NSBUILD_JAVA")
        .env_remove("NSBUILD_LOG_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_list_output() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.b"])
        .assert()
        .success()
        .stdout("src/base.js\nsrc/a.js\nsrc/b.js\n");
}

#[test]
fn test_script_output_with_flag() {
    let temp = tree();

    nsbuild(temp.path())
        .args([
            "--root",
            "src",
            "-n",
            "app.b",
            "-o",
            "script",
            "--flag",
            "app.b.DEBUG=true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("var goog = goog || {};\n"))
        .stdout(predicate::str::contains("app.b.DEBUG = true;"));
}

#[test]
fn test_output_file() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.a", "--output-file", "order.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(temp.path().join("order.txt")).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.ends_with("a.js\n"));
}

#[test]
fn test_no_namespaces_exits_2() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No namespaces found"));
}

#[test]
fn test_unknown_output_mode_exits_2() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.a", "-o", "bundle"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_compiler_jar_exits_2() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.a", "-o", "compiled"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--compiler-jar"));
}

#[test]
fn test_unknown_namespace_exits_1() {
    let temp = tree();

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.zzz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("app.zzz"));
}

#[test]
fn test_cycle_exits_1() {
    let temp = tree();
    write(temp.path(), "src/x.js", "goog.provide('x');\ngoog.require('y');\n");
    write(temp.path(), "src/y.js", "goog.provide('y');\ngoog.require('x');\n");

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("x -> y -> x"));
}

#[test]
fn test_missing_base_exits_1() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/a.js", "goog.provide('app.a');\n");

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.a"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("base.js"));

    nsbuild(temp.path())
        .args(["--root", "src", "-n", "app.a", "--no-base"])
        .assert()
        .success();
}

#[test]
fn test_no_namespaces_without_base_exits_2() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/a.js", "goog.provide('app.a');
");

    nsbuild(temp.path())
        .args(["--root", "src"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No namespaces found"));
}

#[test]
fn test_env_file_supplies_defaults() {
    let temp = tree();
    fs::write(temp.path().join(".env"), "NSBUILD_COMPILER_JAR=missing-compiler.jar\n").unwrap();

    // jar is configured, so the failure comes from the compiler run, not the invocation
    nsbuild(temp.path())
        .args([
            "--root",
            "src",
            "-n",
            "app.a",
            "-o",
            "compiled",
            "--java",
            "nsbuild-test-no-such-java",
        ])
        .assert()
        .code(1);
}
