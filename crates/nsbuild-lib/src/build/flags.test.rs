use super::*;

#[test]
fn test_parse_valid_flags() {
    let flags = FeatureFlags::parse(&["app.chat.ENABLED=true", "app.ui.MAX_ITEMS=25"]).unwrap();
    let parsed: Vec<(&str, &str)> = flags
        .iter()
        .map(|f| (f.key.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        parsed,
        vec![("app.chat.ENABLED", "true"), ("app.ui.MAX_ITEMS", "25")]
    );
}

#[test]
fn test_value_may_contain_equals_and_quotes() {
    let flag: FeatureFlag = "app.cfg.URL='a=b'".parse().unwrap();
    assert_eq!(flag.key, "app.cfg.URL");
    assert_eq!(flag.value, "'a=b'");
}

#[test]
fn test_rejects_malformed_flags() {
    for raw in [
        "ENABLED=true",
        "app.chat.enabled=true",
        "app.chat.ENABLED",
        "=true",
        "app..X=1",
        "app.chat.ENABLED = true",
    ] {
        let err = FeatureFlags::parse(&[raw]).unwrap_err();
        assert!(
            matches!(err, BuildError::InvalidFeatureFlag { .. }),
            "'{}' should be rejected, got {:?}",
            raw,
            err
        );
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn test_rejects_duplicate_keys() {
    let err =
        FeatureFlags::parse(&["app.x.ON=true", "app.y.ON=1", "app.x.ON=false"]).unwrap_err();
    match &err {
        BuildError::DuplicateFeatureFlag { key } => assert_eq!(key, "app.x.ON"),
        other => panic!("expected DuplicateFeatureFlag, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_substitute_rewrites_definitions() {
    let script = "goog.provide('app.chat');\napp.chat.ENABLED = false;\napp.chat.LIMIT=10 ;\nuse(app.chat.ENABLED);\n";
    let flags = FeatureFlags::parse(&["app.chat.ENABLED=true", "app.chat.LIMIT=50"]).unwrap();

    let out = flags.substitute(script).unwrap();
    assert_eq!(
        out,
        "goog.provide('app.chat');\napp.chat.ENABLED = true;\napp.chat.LIMIT = 50;\nuse(app.chat.ENABLED);\n"
    );
}

#[test]
fn test_substitute_inserts_value_literally() {
    let flags = FeatureFlags::parse(&["app.x.PRICE='$1'"]).unwrap();
    let out = flags.substitute("app.x.PRICE = 0;").unwrap();
    assert_eq!(out, "app.x.PRICE = '$1';");
}

#[test]
fn test_substitute_key_dots_are_literal() {
    let flags = FeatureFlags::parse(&["app.x.ON=true"]).unwrap();
    let err = flags.substitute("appAxBON = false;").unwrap_err();
    assert!(matches!(err, BuildError::FeatureFlagNotFound { .. }));
}

#[test]
fn test_substitute_missing_definition() {
    let flags = FeatureFlags::parse(&["app.missing.FLAG=1"]).unwrap();
    let err = flags.substitute("var nothing = 1;").unwrap_err();
    match &err {
        BuildError::FeatureFlagNotFound { key } => assert_eq!(key, "app.missing.FLAG"),
        other => panic!("expected FeatureFlagNotFound, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_define_args() {
    let flags = FeatureFlags::parse(&["app.a.X=1", "app.b.Y='s'"]).unwrap();
    assert_eq!(
        flags.define_args(),
        vec!["--define=app.a.X=1", "--define=app.b.Y='s'"]
    );
    assert!(FeatureFlags::default().define_args().is_empty());
    assert!(FeatureFlags::default().is_empty());
}
