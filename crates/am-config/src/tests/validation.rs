use crate::ClientConfig;

#[test]
fn test_default_config_validates() {
    assert!(ClientConfig::default().validate().is_ok());
}

#[test]
fn test_base_url_must_be_http() {
    let mut config = ClientConfig::default();
    config.remote.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_timeout_must_be_positive() {
    let mut config = ClientConfig::default();
    config.remote.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_identity_file_must_stay_relative() {
    let mut config = ClientConfig::default();

    config.storage.identity_file = "/etc/identity.json".to_string();
    assert!(config.validate().is_err());

    config.storage.identity_file = "../outside.json".to_string();
    assert!(config.validate().is_err());

    config.storage.identity_file = "".to_string();
    assert!(config.validate().is_err());
}
