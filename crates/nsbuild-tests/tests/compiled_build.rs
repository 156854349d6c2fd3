//! Compiled builds against a mock `java` executable
//!
//! These run the live process provider, so they need a POSIX shell.
#![cfg(unix)]

use anyhow::Result;
use nsbuild_lib::build::{BuildError, BuildOptions, LiveProcessProvider, run_build};
use nsbuild_tests::{MockBehavior, TestEnvironment};

fn tree() -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.write_base("base.js")?;
    env.write_module("a.js", &["app.a"], &[], "app.a.DEBUG = false;\n")?;
    env.write_module("b.js", &["app.b"], &["app.a"], "")?;
    Ok(env)
}

#[test]
fn compiler_output_becomes_build_output() -> Result<()> {
    let env = tree()?;
    env.add_mock_executable(
        "java",
        MockBehavior::SucceedWithOutput {
            stdout: "var a=1;".to_string(),
        },
    )?;

    let mut options = env.compiled_options(&["app.b"]);
    options.compiler.flags = vec!["--compilation_level=SIMPLE".to_string()];
    options.feature_flags = vec!["app.a.DEBUG=true".to_string()];

    let out = run_build(&options, &LiveProcessProvider::new())?;
    assert_eq!(out, "var a=1;");

    let jar = options.compiler.jar.clone().unwrap_or_default();
    let expected = vec![
        "-jar".to_string(),
        jar.display().to_string(),
        "--js".to_string(),
        env.src_path.join("base.js").display().to_string(),
        "--js".to_string(),
        env.src_path.join("a.js").display().to_string(),
        "--js".to_string(),
        env.src_path.join("b.js").display().to_string(),
        "--compilation_level=SIMPLE".to_string(),
        "--define=app.a.DEBUG=true".to_string(),
    ];
    assert_eq!(env.get_mock_args("java")?, expected);
    Ok(())
}

#[test]
fn compiler_failure_exits_1() -> Result<()> {
    let env = tree()?;
    env.add_mock_executable(
        "java",
        MockBehavior::Fail {
            status: 3,
            error: "JSC_PARSE_ERROR".to_string(),
        },
    )?;

    let err = run_build(&env.compiled_options(&["app.b"]), &LiveProcessProvider::new())
        .unwrap_err();
    match &err {
        BuildError::CompilationFailed { status, stderr } => {
            assert_eq!(*status, Some(3));
            assert!(stderr.contains("JSC_PARSE_ERROR"));
        }
        other => panic!("expected CompilationFailed, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn missing_java_is_a_process_error() -> Result<()> {
    let env = tree()?;

    // no mock installed, so the launcher path does not exist
    let err = run_build(&env.compiled_options(&["app.a"]), &LiveProcessProvider::new())
        .unwrap_err();
    assert!(matches!(err, BuildError::Process(_)));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn compiled_mode_without_jar_never_spawns() -> Result<()> {
    let env = tree()?;
    env.add_mock_executable(
        "java",
        MockBehavior::SucceedWithOutput {
            stdout: String::new(),
        },
    )?;

    let mut options: BuildOptions = env.compiled_options(&["app.a"]);
    options.compiler.jar = None;

    let err = run_build(&options, &LiveProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::MissingCompilerJar));
    assert!(env.get_mock_args("java")?.is_empty());
    Ok(())
}
