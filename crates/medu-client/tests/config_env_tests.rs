//! 配置文件读写和 `MEDU_CONFIG` 环境变量测试

use medu_client::config::CONFIG_ENV;
use medu_client::{ClientConfig, ConfigError, MeduBuilder};
use medu_driver::mock::MockConnector;
use medu_types::Range;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_env_overrides_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");

    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let resolved = ClientConfig::default_path().unwrap();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(resolved, path);
}

#[test]
#[serial]
fn test_default_path_under_config_dir() {
    unsafe { std::env::remove_var(CONFIG_ENV) };
    if let Ok(path) = ClientConfig::default_path() {
        assert!(path.ends_with("medu/config.toml"));
    }
}

#[test]
#[serial]
fn test_load_default_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var(CONFIG_ENV, dir.path().join("absent.toml")) };
    let config = ClientConfig::load_default();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(config.unwrap(), ClientConfig::default());
}

#[test]
fn test_save_creates_parent_and_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = ClientConfig::default();
    config.connection.host = Some("192.168.88.182".into());
    config.connection.client_id = Some("my_client".into());
    config.connection.login = Some("13".into());
    config.connection.password = Some("14".into());
    config.limits.conveyor_speed = Range::new(0, 60);
    config.save(&path).unwrap();

    let loaded = ClientConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    // 从配置连接，并使用配置中的限值
    let mut medu = MeduBuilder::from_config(&loaded)
        .build(&MockConnector::new())
        .unwrap();
    assert!(medu.conveyor_set_speed_motors(60).is_ok());
    assert!(medu.conveyor_set_speed_motors(61).unwrap_err().is_precondition());
}

#[test]
fn test_load_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[limits\n").unwrap();

    match ClientConfig::load(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_save_rejects_invalid_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = ClientConfig::default();
    config.limits.buzz_level = Range::new(10, 1);
    assert!(matches!(
        config.save(&path),
        Err(ConfigError::InvalidLimits(_))
    ));
    assert!(!path.exists());
}
