//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_without_overrides() {
    let settings = Settings::from_toml_str("").unwrap();

    assert_eq!(settings.text.comparison, ComparisonMode::OrdinalIgnoreCase);
    assert_eq!(settings.logging.level, "info");
}

#[test_log::test]
fn test_toml_overrides_comparison() {
    let settings = Settings::from_toml_str(
        r#"
        [text]
        comparison = "ordinal"
        "#,
    )
    .unwrap();

    assert_eq!(settings.text.comparison, ComparisonMode::Ordinal);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_toml_overrides_logging() {
    let settings = Settings::from_toml_str(
        r#"
        [logging]
        level = "useful_ext_text=trace,warn"
        "#,
    )
    .unwrap();

    assert_eq!(settings.logging.level, "useful_ext_text=trace,warn");
    assert_eq!(settings.text.comparison, ComparisonMode::default());
}

#[test]
fn test_unknown_comparison_is_rejected() {
    let result = Settings::from_toml_str(
        r#"
        [text]
        comparison = "culture"
        "#,
    );

    assert!(result.is_err());
}

#[test]
fn test_invalid_toml_is_rejected() {
    assert!(Settings::from_toml_str("[text").is_err());
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        text: TextSettings::default(),
        logging: LoggingConfig::default(),
    };

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("OrdinalIgnoreCase"));
}
