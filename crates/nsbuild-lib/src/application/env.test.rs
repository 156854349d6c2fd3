use super::*;

fn env(
    no_color: Option<&str>,
    force_color: Option<&str>,
    clicolor: Option<&str>,
    ci: Option<&str>,
) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: ci.map(String::from),
    }
}

#[test]
fn test_empty_environment_keeps_auto() {
    let config = EnvironmentConfig::default();
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_no_color_disables() {
    let config = env(Some("1"), None, None, None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Never);

    // empty NO_COLOR is ignored
    let config = env(Some(""), None, None, None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_force_color_wins() {
    let config = env(Some("1"), Some("1"), Some("0"), Some("true"));
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Always);

    let config = env(None, Some("false"), None, None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Never);

    let config = env(None, Some("maybe"), None, None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_ci_and_clicolor_disable() {
    let config = env(None, None, None, Some("true"));
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Never);

    let config = env(None, None, Some("0"), None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Never);

    let config = env(None, None, Some("1"), None);
    assert_eq!(config.apply_color_config(ColorMode::Auto), ColorMode::Auto);
}

#[test]
fn test_explicit_mode_is_not_overridden() {
    let config = env(Some("1"), None, None, Some("true"));
    assert_eq!(
        config.apply_color_config(ColorMode::Always),
        ColorMode::Always
    );

    let config = env(None, Some("1"), None, None);
    assert_eq!(config.apply_color_config(ColorMode::Never), ColorMode::Never);
}
