use super::*;
use crate::testing::MockProcessProvider;

fn sources() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::parse("var goog = goog || {};\n").with_origin("/tree/base.js"),
        SourceDescriptor::parse("goog.provide('app');\n").with_origin("/tree/app.js"),
    ]
}

fn options_with_jar() -> CompilerOptions {
    CompilerOptions {
        jar: Some(PathBuf::from("/opt/compiler.jar")),
        flags: vec!["--compilation_level=ADVANCED".to_string()],
        ..CompilerOptions::default()
    }
}

#[test]
fn test_compiler_args_order() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();

    let args = compiler_args(
        std::path::Path::new("/opt/compiler.jar"),
        &refs,
        &["--debug".to_string()],
    );
    assert_eq!(
        args,
        vec![
            "-jar",
            "/opt/compiler.jar",
            "--js",
            "/tree/base.js",
            "--js",
            "/tree/app.js",
            "--debug",
        ]
    );
}

#[test]
fn test_compile_returns_stdout_and_forwards_defines() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let flags = FeatureFlags::parse(&["app.x.ON=true"]).unwrap();
    let process = MockProcessProvider::with_stdout("compiled();");

    let out = compile(&process, &options_with_jar(), &refs, &flags).unwrap();
    assert_eq!(out, "compiled();");

    let calls = process.get_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command, "java");
    assert_eq!(
        calls[0].args[calls[0].args.len() - 2..],
        [
            "--compilation_level=ADVANCED".to_string(),
            "--define=app.x.ON=true".to_string()
        ]
    );
}

#[test]
fn test_compile_requires_jar() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let process = MockProcessProvider::new();

    let err = compile(
        &process,
        &CompilerOptions::default(),
        &refs,
        &FeatureFlags::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::MissingCompilerJar));
    assert_eq!(err.exit_code(), 2);
    assert!(process.get_calls().is_empty());
}

#[test]
fn test_compile_failure_carries_status_and_stderr() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let process = MockProcessProvider::with_failure(3, "ERROR - parse error");

    let err = compile(&process, &options_with_jar(), &refs, &FeatureFlags::default()).unwrap_err();
    match &err {
        BuildError::CompilationFailed { status, stderr } => {
            assert_eq!(*status, Some(3));
            assert_eq!(stderr, "ERROR - parse error");
        }
        other => panic!("expected CompilationFailed, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "Compilation failed (exit status 3)");
}

#[test]
fn test_compile_spawn_failure_is_process_error() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let process = MockProcessProvider::unavailable("java: not found");

    let err = compile(&process, &options_with_jar(), &refs, &FeatureFlags::default()).unwrap_err();
    assert!(matches!(err, BuildError::Process(_)));
    assert!(err.to_string().contains("java: not found"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_custom_java_launcher() {
    let sources = sources();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let process = MockProcessProvider::new();
    let options = CompilerOptions {
        java: "/usr/lib/jvm/bin/java".to_string(),
        ..options_with_jar()
    };

    compile(&process, &options, &refs, &FeatureFlags::default()).unwrap();
    assert_eq!(process.get_calls()[0].command, "/usr/lib/jvm/bin/java");
}
