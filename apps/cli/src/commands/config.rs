//! 配置管理命令
//!
//! 读写 `ClientConfig`（连接参数和契约限值）。连接参数取自全局选项
//! `--host` / `--client-id` / `--login` / `--password`。

use crate::modes::oneshot::{ConnectionArgs, resolve_config_path};
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use medu_sdk::ClientConfig;
use std::path::{Path, PathBuf};

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 保存连接参数（--host / --client-id / --login / --password）
    Set,

    /// 获取配置项
    Get {
        /// 配置项名称（host, client_id, login, password, limits, all）
        #[arg(default_value = "all")]
        key: String,
    },

    /// 检查配置（解析并校验限值）
    Check,

    /// 打印配置文件路径
    Path,
}

impl ConfigCommand {
    pub fn execute(self, config_path: Option<PathBuf>, connection: &ConnectionArgs) -> Result<()> {
        let path = resolve_config_path(config_path)?;

        match self {
            ConfigCommand::Set => Self::set_(&path, connection),
            ConfigCommand::Get { key } => Self::get_(&path, &key),
            ConfigCommand::Check => Self::check_(&path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            },
        }
    }

    fn load(path: &Path) -> Result<ClientConfig> {
        ClientConfig::load(path).with_context(|| format!("加载配置失败: {}", path.display()))
    }

    fn set_(path: &Path, connection: &ConnectionArgs) -> Result<()> {
        if connection.is_empty() {
            bail!("没有需要保存的配置项，请使用 --host / --client-id / --login / --password");
        }

        let mut config = Self::load(path)?;
        connection.apply_to(&mut config);
        config.save(path).context("写入配置文件失败")?;

        if let Some(host) = &connection.host {
            println!("✅ 设置 host: {}", host);
        }
        if let Some(client_id) = &connection.client_id {
            println!("✅ 设置 client_id: {}", client_id);
        }
        if let Some(login) = &connection.login {
            println!("✅ 设置 login: {}", login);
        }
        if connection.password.is_some() {
            println!("✅ 设置 password");
        }
        Ok(())
    }

    fn get_(path: &Path, key: &str) -> Result<()> {
        let config = Self::load(path)?;
        let connection = &config.connection;

        let show = |value: &Option<String>| match value {
            Some(v) => println!("{}", v),
            None => println!("(未设置)"),
        };

        match key {
            "host" => show(&connection.host),
            "client_id" => show(&connection.client_id),
            "login" => show(&connection.login),
            "password" => match connection.password {
                Some(_) => println!("***"),
                None => println!("(未设置)"),
            },
            "limits" => {
                let limits = &config.limits;
                println!("joint:          {:?}", limits.joint);
                println!("coordinate:     {:?}", limits.coordinate);
                println!("orientation:    {:?}", limits.orientation);
                println!("scaling:        {:?}", limits.scaling);
                println!("conveyor_speed: {:?}", limits.conveyor_speed);
                println!("led_channel:    {:?}", limits.led_channel);
                println!("buzz_level:     {:?}", limits.buzz_level);
            },
            "all" => {
                let mut shown = config.clone();
                if shown.connection.password.is_some() {
                    shown.connection.password = Some("***".to_string());
                }
                print!("{}", shown.to_toml()?);
            },
            other => bail!("未知配置项: {}", other),
        }

        Ok(())
    }

    fn check_(path: &Path) -> Result<()> {
        let config = Self::load(path)?;

        println!("配置文件: {}", path.display());
        if !path.exists() {
            println!("  (文件不存在，使用默认配置)");
        }

        let missing: Vec<&str> = [
            ("host", &config.connection.host),
            ("client_id", &config.connection.client_id),
            ("login", &config.connection.login),
            ("password", &config.connection.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            println!("✅ 连接参数完整");
        } else {
            println!("⚠️  缺少连接参数: {}", missing.join(", "));
        }
        println!("✅ 契约限值有效");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_merges_into_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let first = ConnectionArgs {
            host: Some("192.168.88.182".into()),
            login: Some("13".into()),
            ..ConnectionArgs::default()
        };
        ConfigCommand::Set.execute(Some(path.clone()), &first).unwrap();

        let second = ConnectionArgs {
            client_id: Some("my_client".into()),
            ..ConnectionArgs::default()
        };
        ConfigCommand::Set.execute(Some(path.clone()), &second).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.connection.host.as_deref(), Some("192.168.88.182"));
        assert_eq!(config.connection.login.as_deref(), Some("13"));
        assert_eq!(config.connection.client_id.as_deref(), Some("my_client"));
    }

    #[test]
    fn test_set_without_values_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigCommand::Set.execute(
            Some(dir.path().join("config.toml")),
            &ConnectionArgs::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigCommand::Get {
            key: "interface".into(),
        }
        .execute(Some(dir.path().join("config.toml")), &ConnectionArgs::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_check_rejects_invalid_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\nscaling = { min = 1.0, max = 0.0 }\n").unwrap();

        let result = ConfigCommand::Check.execute(Some(path), &ConnectionArgs::default());
        assert!(result.is_err());
    }
}
