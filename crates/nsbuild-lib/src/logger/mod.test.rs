use super::*;

#[test]
fn test_filter_directives_cover_both_crates() {
    assert_eq!(
        filter_directives(LogLevel::Debug),
        "nsbuild_lib=debug,nsbuild=debug,debug"
    );
    assert_eq!(
        filter_directives(LogLevel::Warning),
        "nsbuild_lib=warn,nsbuild=warn,warn"
    );
}

#[test]
fn test_explicit_color_modes_ignore_terminal() {
    assert!(use_ansi(ColorMode::Always, LogOutput::Stderr));
    assert!(use_ansi(ColorMode::Always, LogOutput::Stdout));
    assert!(!use_ansi(ColorMode::Never, LogOutput::Stderr));
    assert!(!use_ansi(ColorMode::Never, LogOutput::Stdout));
}
