//! Base runtime checks performed before resolution

use anyhow::Result;
use nsbuild_lib::build::{BuildError, BuildOptions, run_build};
use nsbuild_lib::deps::DeclarationConvention;
use nsbuild_tests::{MockProcessProvider, TestEnvironment};

#[test]
fn base_is_prepended_even_when_nothing_requires_it() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_module("a.js", &["app.a"], &[], "")?;
    env.write_base("zz/base.js")?;

    let out = run_build(&env.build_options(&["app.a"]), &MockProcessProvider::new())?;
    assert_eq!(out, env.listed(&["zz/base.js", "a.js"]));
    Ok(())
}

#[test]
fn base_required_through_runtime_namespace_appears_once() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_base("base.js")?;
    env.write_module("a.js", &["app.a"], &["goog"], "")?;

    let out = run_build(&env.build_options(&["app.a"]), &MockProcessProvider::new())?;
    assert_eq!(out, env.listed(&["base.js", "a.js"]));
    Ok(())
}

#[test]
fn two_base_files_are_ambiguous() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_base("one/base.js")?;
    env.write_base("two/base.js")?;
    env.write_module("a.js", &["app.a"], &[], "")?;

    let err = run_build(&env.build_options(&["app.a"]), &MockProcessProvider::new()).unwrap_err();
    match &err {
        BuildError::AmbiguousBaseRuntime { paths } => {
            assert_eq!(
                paths,
                &[env.src_path.join("one/base.js"), env.src_path.join("two/base.js")]
            );
        }
        other => panic!("expected AmbiguousBaseRuntime, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn base_file_name_without_marker_does_not_count() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_source("base.js", "// not the runtime\n")?;
    env.write_module("a.js", &["app.a"], &[], "")?;

    let err = run_build(&env.build_options(&["app.a"]), &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::MissingBaseRuntime { .. }));
    Ok(())
}

#[test]
fn base_with_requires_is_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_source("base.js", "var goog = goog || {};\ngoog.require('app.a');\n")?;
    env.write_module("a.js", &["app.a"], &[], "")?;

    let err = run_build(&env.build_options(&["app.a"]), &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::InvalidBaseRuntime { .. }));
    Ok(())
}

#[test]
fn custom_convention_and_base_name() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_source("runtime.js", "var rt = rt || {};\n")?;
    env.write_source("a.js", "rt.provide('app.a');\nrt.require('rt');\n")?;

    let options = BuildOptions {
        convention: DeclarationConvention::new("rt.provide", "rt.require")?,
        base_file: Some("runtime.js".to_string()),
        ..env.build_options(&["app.a"])
    };

    let out = run_build(&options, &MockProcessProvider::new())?;
    assert_eq!(out, env.listed(&["runtime.js", "a.js"]));
    Ok(())
}
