use postcraft::{Layout, PostcraftConfig};
use std::io::Write;

#[test]
fn bundled_defaults_disable_assist() {
    let config = PostcraftConfig::from_toml_str("").unwrap();

    assert!(!config.form.ai_assist());
    assert_eq!(config.form.layout(), Layout::Expanded);
    assert_eq!(config.assist.endpoint, None);
    assert_eq!(config.submission.webhook_url, None);
    assert_eq!(config.assist_endpoint().unwrap(), None);
}

#[test]
fn user_values_override_defaults() {
    let config = PostcraftConfig::from_toml_str(
        r#"
        [form]
        ai_assist = true
        layout = "compact"

        [assist]
        endpoint = "https://ai.example.com/generate"

        [submission]
        webhook_url = "https://example.com/hook"
        "#,
    )
    .unwrap();

    assert!(config.form.ai_assist());
    assert_eq!(config.form.layout(), Layout::Compact);
    assert_eq!(
        config.assist_endpoint().unwrap().unwrap().as_str(),
        "https://ai.example.com/generate"
    );
    assert_eq!(
        config.submission.webhook_url.as_deref(),
        Some("https://example.com/hook")
    );
}

#[test]
fn assist_without_endpoint_is_rejected() {
    let err = PostcraftConfig::from_toml_str("[form]\nai_assist = true\n").unwrap_err();
    assert!(err.message.contains("assist.endpoint"));
}

#[test]
fn malformed_endpoint_is_rejected() {
    let err = PostcraftConfig::from_toml_str(
        "[form]\nai_assist = true\n[assist]\nendpoint = \"not a url\"\n",
    )
    .unwrap_err();
    assert!(err.message.contains("not a valid URL"));
}

#[test]
fn endpoint_is_not_injected_when_assist_is_off() {
    let config = PostcraftConfig::from_toml_str(
        "[form]\nai_assist = false\n[assist]\nendpoint = \"https://ai.example.com\"\n",
    )
    .unwrap();
    assert_eq!(config.assist_endpoint().unwrap(), None);
}

#[test]
fn unknown_layout_is_a_parse_error() {
    let err = PostcraftConfig::from_toml_str("[form]\nlayout = \"sideways\"\n").unwrap_err();
    assert!(err.message.contains("Failed to parse configuration"));
}

#[test]
fn explicit_file_is_layered_on_top() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[form]\nlayout = \"compact\"").unwrap();

    let config = PostcraftConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.form.layout(), Layout::Compact);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PostcraftConfig::load(Some(dir.path().join("absent.toml").as_path())).is_err());
}
