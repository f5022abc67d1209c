use std::io::Write;

use super::*;

#[test]
fn test_defaults_match_adapter_defaults() {
    let settings = ClassifierSettings::default();

    assert_eq!(settings.model, "gpt-5.2");
    assert_eq!(settings.base_url, "https://api.openai.com/v1");
    assert_eq!(settings.timeout_secs, 60);
    assert_eq!(settings.concurrency().get(), 1);
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let settings = ClassifierSettings::from_toml_str(
        r#"
        [classifier]
        model = "gpt-4.1-mini"
        concurrency = 4
        "#,
    )
    .unwrap();

    assert_eq!(settings.model, "gpt-4.1-mini");
    assert_eq!(settings.concurrency, 4);
    assert_eq!(settings.timeout_secs, 60);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = ClassifierSettings::from_toml_str(
        r#"
        [classifier]
        api_key = "sk-in-a-file"
        "#,
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("api_key"));
}

#[test]
fn test_overrides_win_over_file_values() {
    let settings = ClassifierSettings::from_toml_str("[classifier]\nmodel = \"from-file\"\n")
        .unwrap()
        .resolve(&SettingsOverrides {
            model: Some("from-flag".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(settings.model, "from-flag");
    assert_eq!(settings.timeout_secs, 5);
}

#[test]
fn test_zero_concurrency_is_rejected() {
    let err = ClassifierSettings::default()
        .resolve(&SettingsOverrides {
            concurrency: Some(0),
            ..Default::default()
        })
        .unwrap_err();

    assert!(err.to_string().contains("Concurrency"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = ClassifierSettings::default()
        .resolve(&SettingsOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        })
        .unwrap_err();

    assert!(err.to_string().contains("Timeout"));
}

#[test]
fn test_load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[classifier]\nbase_url = \"http://localhost:9000/v1\"").unwrap();

    let settings = ClassifierSettings::load(Some(file.path())).unwrap();

    assert_eq!(settings.base_url, "http://localhost:9000/v1");
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(
        ClassifierSettings::load(None).unwrap(),
        ClassifierSettings::default()
    );
}

#[test]
fn test_openai_config_carries_settings() {
    let settings = ClassifierSettings {
        model: "m".to_string(),
        base_url: "http://example.test".to_string(),
        timeout_secs: 7,
        concurrency: 2,
    };

    let config = settings.openai_config("key".to_string());

    assert_eq!(config.model(), "m");
    assert_eq!(config.base_url(), "http://example.test");
    assert_eq!(config.timeout(), Duration::from_secs(7));
}
