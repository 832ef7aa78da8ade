use xio_collector::config::{Config, Overrides};

#[test]
fn test_config_load_with_overrides() {
    // Relative to where cargo test is run
    let overrides = Overrides {
        array_name: Some("xio01.example.com".to_string()),
        username: Some("admin".to_string()),
        password: Some("secret".to_string()),
        target_api_url: Some("https://inventory.example.com/api/arrays".to_string()),
        array_verify_ssl: Some(true),
        target_verify_ssl: None,
    };

    let config = Config::load("config/Default.toml", &overrides).expect("Failed to load config");
    assert_eq!(config.array.name, "xio01.example.com");
    assert!(config.array.use_tls);
    assert!(config.array.verify_ssl);
    assert!(!config.target.verify_ssl);
    assert_eq!(config.http.request_timeout_seconds, 30);
}

#[test]
fn test_config_load_without_required_values_fails() {
    let overrides = Overrides {
        array_name: Some("xio01.example.com".to_string()),
        username: Some("admin".to_string()),
        password: Some("secret".to_string()),
        target_api_url: Some(String::new()),
        ..Overrides::default()
    };

    let err = Config::load("config/Default.toml", &overrides).unwrap_err();
    assert!(err.to_string().contains("TARGET_API_URL"));
}
