use super::*;
use crate::application::Cli;
use crate::testing::{MockProcessProvider, SourceTreeFixture};
use clap::Parser;

fn config(args: &[&str]) -> CliConfig {
    let cli = Cli::try_parse_from(std::iter::once("nsbuild").chain(args.iter().copied())).unwrap();
    CliConfig::from_cli(cli)
}

#[test]
fn test_writes_output_file() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    fixture.write_module("app.js", &["app"], &[]).unwrap();
    let out = fixture.join("out/order.txt");
    fs::create_dir_all(out.parent().unwrap()).unwrap();

    let root = fixture.path().to_string_lossy().to_string();
    let out_arg = out.to_string_lossy().to_string();
    let config = config(&["--root", &root, "-n", "app", "--output-file", &out_arg]);

    execute_command(&config, &MockProcessProvider::new()).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        format!(
            "{}\n{}\n",
            fixture.join("base.js").display(),
            fixture.join("app.js").display()
        )
    );
}

#[test]
fn test_unwritable_output_file_is_io_error() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    fixture.write_module("app.js", &["app"], &[]).unwrap();

    let root = fixture.path().to_string_lossy().to_string();
    let out_arg = fixture.join("missing/dir/out.txt").to_string_lossy().to_string();
    let config = config(&["--root", &root, "-n", "app", "--output-file", &out_arg]);

    let err = execute_command(&config, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, CommandError::Build(BuildError::Io { .. })));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_build_errors_keep_their_exit_code() {
    let fixture = SourceTreeFixture::with_base().unwrap();
    let root = fixture.path().to_string_lossy().to_string();
    let config = config(&["--root", &root]);

    let err = execute_command(&config, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Build(BuildError::EmptyNamespaceSet)
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_config_errors_are_usage_errors() {
    let config = config(&["--require-keyword", "9bad", "-n", "app"]);

    let err = execute_command(&config, &MockProcessProvider::new()).unwrap_err();
    assert!(matches!(err, CommandError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}
