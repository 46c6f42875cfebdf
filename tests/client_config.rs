//! Integration tests for client construction and configuration loading.

use cordite::{Client, ClientData};
use std::io::Write;
use std::time::Duration;

#[test]
fn client_from_loaded_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
        default_command_prefix = "?"
        owner_id = "31415"
        score_cool_down_time_limit = 10000

        [log_channels]
        boot_channel_id = "boot-log"
        "#
    )
    .expect("write config");

    let data = ClientData::load(file.path()).expect("load config");
    let client = Client::new(data);

    assert_eq!(client.default_command_prefix(), "?");
    assert_eq!(client.owner_id(), Some("31415"));
    assert_eq!(
        client.score_cool_down_time_limit(),
        Duration::from_millis(10_000)
    );
    assert_eq!(
        client.log_channels().boot_channel_id.as_deref(),
        Some("boot-log")
    );
    assert!(client.log_channels().direct_message_channel_id.is_none());
    assert!(client.is_valid().is_valid());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = ClientData::load("/nonexistent/cordite.toml").unwrap_err();
    assert!(err.to_string().starts_with("failed to read config file"));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "owner_id = [not toml").expect("write config");

    let err = ClientData::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn default_client_resolves_gateway_options() {
    let client = Client::default();
    let options = client.gateway_options();
    assert!(options.allowed_mentions.is_some());
    assert_eq!(options.intents.as_ref().map(|i| i.len()), Some(10));
    assert_eq!(options.partials.as_ref().map(|p| p.len()), Some(5));
}

#[test]
fn start_time_is_captured_at_construction() {
    let before = chrono::Utc::now();
    let client = Client::default();
    let after = chrono::Utc::now();
    assert!(client.start_time() >= before);
    assert!(client.start_time() <= after);
}
