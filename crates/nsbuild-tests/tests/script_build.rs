//! End-to-end script builds with feature flag substitution

use anyhow::Result;
use nsbuild_lib::build::{BuildError, BuildOptions, run_build};
use nsbuild_lib::primitives::OutputMode;
use nsbuild_tests::{MockProcessProvider, TestEnvironment};

fn flagged_tree() -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.write_base("base.js")?;
    env.write_module(
        "features.js",
        &["app.features"],
        &[],
        "app.features.CHAT = false;\napp.features.LIMIT=10;\n",
    )?;
    env.write_module("main.js", &["app.main"], &["app.features"], "run();\n")?;
    Ok(env)
}

fn script_options(env: &TestEnvironment, flags: &[&str]) -> BuildOptions {
    BuildOptions {
        output_mode: OutputMode::Script,
        feature_flags: flags.iter().map(|f| f.to_string()).collect(),
        ..env.build_options(&["app.main"])
    }
}

#[test]
fn concatenates_sources_in_dependency_order() -> Result<()> {
    let env = flagged_tree()?;

    let out = run_build(&script_options(&env, &[]), &MockProcessProvider::new())?;
    assert_eq!(
        out,
        concat!(
            "var goog = goog || {};\ngoog.global = this;\n",
            "goog.provide('app.features');\napp.features.CHAT = false;\napp.features.LIMIT=10;\n",
            "goog.provide('app.main');\ngoog.require('app.features');\nrun();\n",
        )
    );
    Ok(())
}

#[test]
fn substitutes_every_flag() -> Result<()> {
    let env = flagged_tree()?;

    let out = run_build(
        &script_options(&env, &["app.features.CHAT=true", "app.features.LIMIT=99"]),
        &MockProcessProvider::new(),
    )?;
    assert!(out.contains("app.features.CHAT = true;\n"));
    assert!(out.contains("app.features.LIMIT = 99;\n"));
    Ok(())
}

#[test]
fn flag_without_definition_is_a_usage_error() -> Result<()> {
    let env = flagged_tree()?;

    let err = run_build(
        &script_options(&env, &["app.features.MISSING=1"]),
        &MockProcessProvider::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::FeatureFlagNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[test]
fn duplicate_flag_is_a_usage_error() -> Result<()> {
    let env = flagged_tree()?;

    let err = run_build(
        &script_options(&env, &["app.features.CHAT=true", "app.features.CHAT=false"]),
        &MockProcessProvider::new(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::DuplicateFeatureFlag { .. }));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}
