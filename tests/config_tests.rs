use std::env;

use marcador_api::config::Config;

#[test]
fn config_defaults_when_env_is_empty() {
    // Store original values
    let original_values = [
        ("DATABASE_URL", env::var("DATABASE_URL").ok()),
        ("HOST", env::var("HOST").ok()),
        ("PORT", env::var("PORT").ok()),
        ("ENVIRONMENT", env::var("ENVIRONMENT").ok()),
        ("CLIENT_BASE_URL", env::var("CLIENT_BASE_URL").ok()),
    ];

    for (key, _) in &original_values {
        unsafe {
            env::remove_var(key);
        }
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.database_url, "sqlite:marcador.db");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.environment, "development");
    assert_eq!(config.client_base_url, "http://localhost:3000");
    assert!(config.is_development());
    assert!(!config.is_production());

    // Restore original values
    for (key, value) in original_values {
        if let Some(val) = value {
            unsafe {
                env::set_var(key, val);
            }
        }
    }
}

#[test]
fn server_address_joins_host_and_port() {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "0.0.0.0".to_string(),
        port: 9000,
        environment: "production".to_string(),
        client_base_url: "https://marcador.example".to_string(),
    };

    assert_eq!(config.server_address(), "0.0.0.0:9000");
    assert!(config.is_production());
}
