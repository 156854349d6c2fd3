use super::*;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorMode::Auto);
}

#[test]
fn test_default_strings_parse() {
    assert_eq!(
        defaults::LOG_LEVEL.parse::<LogLevel>().unwrap(),
        default_fns::log_level()
    );
    assert_eq!(
        defaults::LOG_FORMAT.parse::<LogFormat>().unwrap(),
        default_fns::log_format()
    );
    assert_eq!(
        defaults::LOG_OUTPUT.parse::<LogOutput>().unwrap(),
        default_fns::log_output()
    );
    assert_eq!(
        defaults::COLOR.parse::<ColorMode>().unwrap(),
        default_fns::color()
    );
}

#[test]
fn test_verbosity_raises_level() {
    let config = AppConfig {
        verbose: 1,
        ..AppConfig::default()
    };
    assert_eq!(config.effective_log_level(), LogLevel::Debug);

    let config = AppConfig {
        log_level: LogLevel::Error,
        verbose: 200,
        ..AppConfig::default()
    };
    assert_eq!(config.effective_log_level(), LogLevel::Trace);
}

#[test]
fn test_to_logger_config() {
    let config = AppConfig {
        log_level: LogLevel::Warning,
        log_format: LogFormat::Json,
        color: ColorMode::Never,
        ..AppConfig::default()
    };

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Warning);
    assert_eq!(logger.format, LogFormat::Json);
    assert_eq!(logger.output, LogOutput::Stderr);
    assert_eq!(logger.color, ColorMode::Never);
}
