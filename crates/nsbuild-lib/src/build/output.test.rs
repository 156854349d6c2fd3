use super::*;

fn tree() -> Vec<SourceDescriptor> {
    vec![
        SourceDescriptor::parse("var goog = goog || {};\n").with_origin("/src/base.js"),
        SourceDescriptor::parse("goog.provide('app.cfg');\napp.cfg.DEBUG = false;\n")
            .with_origin("/src/cfg.js"),
    ]
}

#[test]
fn test_render_list_one_path_per_line() {
    let sources = tree();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    assert_eq!(render_list(&refs), "/src/base.js\n/src/cfg.js\n");
}

#[test]
fn test_render_list_empty() {
    assert_eq!(render_list(&[]), "");
}

#[test]
fn test_render_script_concatenates_in_order() {
    let sources = tree();
    let refs: Vec<&SourceDescriptor> = sources.iter().rev().collect();
    let script = render_script(&refs, &FeatureFlags::default()).unwrap();
    assert_eq!(
        script,
        "goog.provide('app.cfg');\napp.cfg.DEBUG = false;\nvar goog = goog || {};\n"
    );
}

#[test]
fn test_render_script_substitutes_flags() {
    let sources = tree();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let flags = FeatureFlags::parse(&["app.cfg.DEBUG=true"]).unwrap();

    let script = render_script(&refs, &flags).unwrap();
    assert!(script.contains("app.cfg.DEBUG = true;"));
    assert!(!script.contains("false"));
}

#[test]
fn test_render_script_missing_flag_definition() {
    let sources = tree();
    let refs: Vec<&SourceDescriptor> = sources.iter().collect();
    let flags = FeatureFlags::parse(&["app.cfg.VERBOSE=true"]).unwrap();

    let err = render_script(&refs, &flags).unwrap_err();
    assert!(matches!(err, BuildError::FeatureFlagNotFound { .. }));
}
