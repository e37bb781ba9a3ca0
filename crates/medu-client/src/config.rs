//! 客户端配置
//!
//! TOML 格式，包含连接参数和契约限值：
//!
//! ```toml
//! [connection]
//! host = "192.168.88.182"
//! client_id = "my_client"
//! login = "13"
//! password = "14"
//!
//! [limits]
//! conveyor_speed = { min = 0, max = 60 }
//! ```
//!
//! 未出现的限值取默认值。默认路径为 `<config_dir>/medu/config.toml`，
//! 可通过环境变量 `MEDU_CONFIG` 覆盖。

use medu_driver::Credentials;
use medu_types::{ContractLimits, ValidationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 覆盖默认配置路径的环境变量
pub const CONFIG_ENV: &str = "MEDU_CONFIG";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid limits: {0}")]
    InvalidLimits(#[from] ValidationError),
}

/// 连接参数
///
/// 缺失的字段在连接时按空字符串处理（会被凭据检查拒绝）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ConnectionConfig {
    /// 转为连接凭据
    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.host.clone().unwrap_or_default(),
            self.client_id.clone().unwrap_or_default(),
            self.login.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }
}

/// 客户端配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub connection: ConnectionConfig,
    pub limits: ContractLimits,
}

impl ClientConfig {
    /// 默认配置路径
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        path.push("medu");
        path.push("config.toml");
        Ok(path)
    }

    /// 从默认路径加载
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path()?)
    }

    /// 加载配置，文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// 从 TOML 文本解析，并检查限值
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.limits.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 保存配置（自动创建父目录）
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.limits.validate()?;
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Config saved to {}", path.display());
        Ok(())
    }
}
