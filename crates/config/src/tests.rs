use crate::{AppConfig, DatabaseConfig, ServerConfig, TelemetryConfig};
use secrecy::{ExposeSecret, Secret};

#[test]
fn test_app_config_debug_hides_database_url() {
    let config = AppConfig {
        app_name: "product-catalog".to_string(),
        app_env: "production".to_string(),
        database: DatabaseConfig {
            url: Secret::new("postgres://catalog:hunter2@db:5432/products".to_string()),
            max_connections: 50,
        },
        server: ServerConfig::default(),
        telemetry: TelemetryConfig::default(),
    };

    let debug_output = format!("{:?}", config);
    assert!(!debug_output.contains("hunter2"));
    assert!(!debug_output.contains("db:5432"));
    assert!(debug_output.contains("product-catalog"));
    assert!(debug_output.contains("max_connections: 50"));
    assert!(config.is_production());
}

#[test]
fn test_load_defaults_from_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
            app_name = "product-catalog"

            [database]
            url = "postgres://postgres@localhost:5432/products"
            "#,
        )?;

        let config = AppConfig::load(".").expect("config should load");
        assert_eq!(config.app_name, "product-catalog");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.telemetry.json);
        assert_eq!(
            config.database.url.expose_secret(),
            "postgres://postgres@localhost:5432/products"
        );
        Ok(())
    });
}

#[test]
fn test_env_overrides_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
            app_name = "product-catalog"

            [database]
            url = "postgres://postgres@localhost:5432/products"

            [server]
            port = 8080
            "#,
        )?;
        jail.set_env("APP_SERVER__PORT", "9090");
        jail.set_env("APP_DATABASE__MAX_CONNECTIONS", "3");

        let config = AppConfig::load(".").expect("config should load");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.max_connections, 3);
        Ok(())
    });
}

#[test]
fn test_missing_database_is_error() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("default.toml", r#"app_name = "product-catalog""#)?;

        assert!(AppConfig::load(".").is_err());
        Ok(())
    });
}

#[test]
fn test_production_pool_size_without_explicit_setting() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "default.toml",
            r#"
            app_name = "product-catalog"

            [database]
            url = "postgres://postgres@localhost:5432/products"
            "#,
        )?;
        jail.set_env("APP_ENV", "production");

        let config = AppConfig::load(".").expect("config should load");
        assert_eq!(config.app_env, "production");
        assert_eq!(config.database.max_connections, 50);
        Ok(())
    });
}
