use super::*;
use crate::deps::DependencyError;
use crate::testing::{MockProcessProvider, SourceTreeFixture};

fn tree() -> SourceTreeFixture {
    let fixture = SourceTreeFixture::with_base().unwrap();
    fixture.write_module("a.js", &["app.a"], &[]).unwrap();
    fixture.write_module("b.js", &["app.b"], &["app.a"]).unwrap();
    fixture.write_module("c.js", &["app.c"], &["app.b"]).unwrap();
    fixture
}

fn options(fixture: &SourceTreeFixture) -> BuildOptions {
    BuildOptions {
        roots: vec![fixture.path().to_path_buf()],
        ..BuildOptions::default()
    }
}

fn lines(fixture: &SourceTreeFixture, names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("{}\n", fixture.join(name).display()))
        .collect()
}

#[test]
fn test_list_puts_base_first() {
    let fixture = tree();
    let opts = BuildOptions {
        namespaces: vec!["app.c".to_string()],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["base.js", "a.js", "b.js", "c.js"]));
}

#[test]
fn test_base_requested_explicitly_is_not_repeated() {
    let fixture = tree();
    let opts = BuildOptions {
        namespaces: vec!["goog".to_string(), "app.a".to_string()],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["base.js", "a.js"]));
}

#[test]
fn test_input_provides_are_requested() {
    let fixture = tree();
    let opts = BuildOptions {
        inputs: vec![fixture.join("b.js")],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["base.js", "a.js", "b.js"]));
}

#[test]
fn test_input_with_parent_components_matches_scanned_source() {
    let fixture = tree();
    fixture.write_module("app/d.js", &["app.d"], &["app.a"]).unwrap();
    let opts = BuildOptions {
        inputs: vec![fixture.join("sub/../app/./d.js")],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["base.js", "a.js", "app/d.js"]));
}

#[test]
fn test_normalized_folds_dot_components() {
    let fixture = SourceTreeFixture::new().unwrap();
    assert_eq!(
        normalized(&fixture.join("x/./y/../../app/a.js")),
        normalized(&fixture.join("app/a.js"))
    );
    assert_ne!(
        normalized(&fixture.join("x/../y/a.js")),
        normalized(&fixture.join("x/y/a.js"))
    );
}

#[test]
fn test_unknown_input_is_reported() {
    let fixture = tree();
    let opts = BuildOptions {
        inputs: vec![fixture.join("missing.js")],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::InputNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_empty_request_exits_with_usage_code() {
    let fixture = tree();
    let err = run_build(&options(&fixture), &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::EmptyNamespaceSet));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_malformed_namespace_argument() {
    let fixture = tree();
    let opts = BuildOptions {
        namespaces: vec!["app..c".to_string()],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::InvalidNamespace { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_missing_base_runtime() {
    let fixture = SourceTreeFixture::new().unwrap();
    fixture.write_module("a.js", &["app.a"], &[]).unwrap();
    let opts = BuildOptions {
        namespaces: vec!["app.a".to_string()],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::MissingBaseRuntime { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_request_errors_come_before_base_runtime_checks() {
    let fixture = SourceTreeFixture::new().unwrap();
    fixture.write_module("a.js", &["app.a"], &[]).unwrap();

    let err = run_build(&options(&fixture), &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::EmptyNamespaceSet));
    assert_eq!(err.exit_code(), 2);

    let opts = BuildOptions {
        inputs: vec![fixture.join("missing.js")],
        ..options(&fixture)
    };
    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::InputNotFound { .. }));
}

#[test]
fn test_base_runtime_can_be_disabled() {
    let fixture = SourceTreeFixture::new().unwrap();
    fixture.write_module("a.js", &["app.a"], &[]).unwrap();
    let opts = BuildOptions {
        namespaces: vec!["app.a".to_string()],
        base_file: None,
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["a.js"]));
}

#[test]
fn test_find_base_runtime_rules() {
    let marker = "var goog = goog || {};\n";

    let sources = vec![
        SourceDescriptor::parse(marker).with_origin("/x/base.js"),
        SourceDescriptor::parse(marker).with_origin("/y/base.js"),
    ];
    match find_base_runtime(&sources, "base.js").unwrap_err() {
        BuildError::AmbiguousBaseRuntime { paths } => assert_eq!(paths.len(), 2),
        other => panic!("expected AmbiguousBaseRuntime, got {:?}", other),
    }

    // file name without marker, marker under another name
    let sources = vec![
        SourceDescriptor::parse("var x;\n").with_origin("/x/base.js"),
        SourceDescriptor::parse(marker).with_origin("/x/runtime.js"),
    ];
    assert!(matches!(
        find_base_runtime(&sources, "base.js").unwrap_err(),
        BuildError::MissingBaseRuntime { .. }
    ));
    assert_eq!(
        find_base_runtime(&sources, "runtime.js").unwrap(),
        PathBuf::from("/x/runtime.js")
    );

    let sources = vec![
        SourceDescriptor::parse("var goog = goog || {};\ngoog.require('app.a');\n")
            .with_origin("/x/base.js"),
    ];
    assert!(matches!(
        find_base_runtime(&sources, "base.js").unwrap_err(),
        BuildError::InvalidBaseRuntime { .. }
    ));
}

#[test]
fn test_cycle_is_reported() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    fixture.write_module("x.js", &["x"], &["y"]).unwrap();
    fixture.write_module("y.js", &["y"], &["x"]).unwrap();
    let opts = BuildOptions {
        namespaces: vec!["x".to_string()],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    match &err {
        BuildError::Dependency(DependencyError::CircularDependency { cycle }) => {
            assert_eq!(cycle, &["x", "y", "x"]);
        }
        other => panic!("expected CircularDependency, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_duplicate_provide_is_reported() {
    let fixture = tree();
    fixture.write_module("dup.js", &["app.a"], &[]).unwrap();
    let opts = BuildOptions {
        namespaces: vec!["app.a".to_string()],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Dependency(DependencyError::DuplicateProvide { .. })
    ));
}

#[test]
fn test_script_output_substitutes_flags() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    fixture
        .write_file(
            "cfg.js",
            "goog.provide('app.cfg');\napp.cfg.DEBUG = false;\n",
        )
        .unwrap();
    let opts = BuildOptions {
        namespaces: vec!["app.cfg".to_string()],
        output_mode: OutputMode::Script,
        feature_flags: vec!["app.cfg.DEBUG=true".to_string()],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(
        out,
        "var goog = goog || {};\ngoog.provide('app.cfg');\napp.cfg.DEBUG = true;\n"
    );
}

#[test]
fn test_invalid_flag_fails_before_rendering() {
    let fixture = tree();
    let opts = BuildOptions {
        namespaces: vec!["app.a".to_string()],
        feature_flags: vec!["lowercase=1".to_string()],
        ..options(&fixture)
    };

    let err = run_build(&opts, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, BuildError::InvalidFeatureFlag { .. }));
}

#[test]
fn test_compiled_output_runs_compiler() {
    let fixture = tree();
    let opts = BuildOptions {
        namespaces: vec!["app.b".to_string()],
        output_mode: OutputMode::Compiled,
        compiler: CompilerOptions {
            jar: Some(PathBuf::from("compiler.jar")),
            ..CompilerOptions::default()
        },
        ..options(&fixture)
    };
    let process = MockProcessProvider::with_stdout("min();");

    let out = run_build(&opts, &process).unwrap();
    assert_eq!(out, "min();");

    let calls = process.get_calls();
    assert_eq!(calls.len(), 1);
    let expected: Vec<String> = vec![
        "-jar".to_string(),
        "compiler.jar".to_string(),
        "--js".to_string(),
        fixture.join("base.js").display().to_string(),
        "--js".to_string(),
        fixture.join("a.js").display().to_string(),
        "--js".to_string(),
        fixture.join("b.js").display().to_string(),
    ];
    assert_eq!(calls[0].args, expected);
}

#[test]
fn test_unresolved_require_outside_request_is_not_fatal() {
    let fixture = tree();
    fixture.write_module("orphan.js", &["app.orphan"], &["app.gone"]).unwrap();
    let opts = BuildOptions {
        namespaces: vec!["app.a".to_string()],
        ..options(&fixture)
    };

    let out = run_build(&opts, &MockProcessProvider::new()).unwrap();
    assert_eq!(out, lines(&fixture, &["base.js", "a.js"]));
}
