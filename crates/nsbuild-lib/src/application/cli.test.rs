use super::*;
use crate::primitives::{ColorMode, LogLevel};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("nsbuild").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&[]);
    assert!(cli.build.files.is_empty());
    assert_eq!(cli.build.output_mode, OutputMode::List);
    assert_eq!(cli.build.base_file, "base.js");
    assert_eq!(cli.build.extensions, vec!["js"]);
    assert_eq!(cli.build.provide_keyword, "goog.provide");
    assert_eq!(cli.build.require_keyword, "goog.require");
    assert_eq!(cli.config.log_level, LogLevel::Info);
}

#[test]
fn test_repeatable_arguments_keep_order() {
    let cli = parse(&[
        "-n", "app.b", "--namespace", "app.a", "-i", "x.js", "--input", "y.js", "--root", "lib",
        "--root", "src", "extra.js",
    ]);
    assert_eq!(cli.build.namespaces, vec!["app.b", "app.a"]);
    assert_eq!(
        cli.build.inputs,
        vec![PathBuf::from("x.js"), PathBuf::from("y.js")]
    );
    assert_eq!(
        cli.build.roots,
        vec![PathBuf::from("lib"), PathBuf::from("src")]
    );
    assert_eq!(cli.build.files, vec![PathBuf::from("extra.js")]);
}

#[test]
fn test_output_mode_values() {
    assert_eq!(parse(&["-o", "script"]).build.output_mode, OutputMode::Script);
    assert_eq!(
        parse(&["--output-mode", "compiled"]).build.output_mode,
        OutputMode::Compiled
    );

    let err = Cli::try_parse_from(["nsbuild", "--output-mode", "deps"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_compiler_flags_accept_hyphen_values() {
    let cli = parse(&[
        "-f",
        "--compilation_level=ADVANCED",
        "--compiler-flags",
        "--debug",
    ]);
    assert_eq!(
        cli.build.compiler_flags,
        vec!["--compilation_level=ADVANCED", "--debug"]
    );
}

#[test]
fn test_ambient_options() {
    let cli = parse(&["--log-level", "debug", "--color", "never", "-v"]);
    assert_eq!(cli.config.log_level, LogLevel::Debug);
    assert_eq!(cli.config.color, ColorMode::Never);
    assert_eq!(cli.config.effective_log_level(), LogLevel::Trace);
}

#[test]
fn test_to_options() {
    let cli = parse(&[
        "--no-base",
        "--extension",
        ".mjs",
        "--extension",
        "js",
        "-c",
        "compiler.jar",
        "--java",
        "/opt/java",
        "--flag",
        "app.x.ON=true",
        "-n",
        "app",
    ]);

    let options = cli.build.to_options().unwrap();
    assert_eq!(options.base_file, None);
    assert_eq!(options.extensions, vec!["mjs", "js"]);
    assert_eq!(options.compiler.jar, Some(PathBuf::from("compiler.jar")));
    assert_eq!(options.compiler.java, "/opt/java");
    assert_eq!(options.feature_flags, vec!["app.x.ON=true"]);
    assert_eq!(options.namespaces, vec!["app"]);
}

#[test]
fn test_to_options_custom_keywords() {
    let cli = parse(&[
        "--provide-keyword",
        "rt.provide",
        "--require-keyword",
        "rt.require",
        "--base-file",
        "runtime.js",
    ]);

    let options = cli.build.to_options().unwrap();
    assert_eq!(options.base_file.as_deref(), Some("runtime.js"));
    assert_eq!(options.convention.provide_keyword(), "rt.provide");
    assert_eq!(options.convention.base_marker(), Some("var rt = rt || {};"));
}

#[test]
fn test_to_options_rejects_bad_keyword() {
    let cli = parse(&["--provide-keyword", "not a keyword"]);
    assert!(matches!(
        cli.build.to_options().unwrap_err(),
        ConfigError::InvalidKeyword { .. }
    ));
}
