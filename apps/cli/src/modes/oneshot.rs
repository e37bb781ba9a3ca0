//! One-shot 模式
//!
//! 每个命令独立执行：
//! 1. 读取配置（命令行参数覆盖配置文件）
//! 2. 连接 mock 设备并获取控制权
//! 3. 执行操作
//! 4. 断开连接

use anyhow::{Context, Result};
use clap::Args;
use medu_sdk::client::{ClientConfig, Medu, MeduBuilder};
use medu_sdk::driver::mock::{MockConnector, MockManipulator};
use medu_sdk::{CallResult, Manipulator};
use std::path::PathBuf;
use tracing::{debug, warn};

/// 连接参数（覆盖配置文件）
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// 机械臂（MQTT broker）地址
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// 客户端 ID
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// 用户名
    #[arg(long, global = true)]
    pub login: Option<String>,

    /// 密码
    #[arg(long, global = true)]
    pub password: Option<String>,
}

impl ConnectionArgs {
    /// 是否给出了任何字段
    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.client_id.is_none()
            && self.login.is_none()
            && self.password.is_none()
    }

    /// 把给出的字段写入配置
    pub fn apply_to(&self, config: &mut ClientConfig) {
        let connection = &mut config.connection;
        if let Some(host) = &self.host {
            connection.host = Some(host.clone());
        }
        if let Some(client_id) = &self.client_id {
            connection.client_id = Some(client_id.clone());
        }
        if let Some(login) = &self.login {
            connection.login = Some(login.clone());
        }
        if let Some(password) = &self.password {
            connection.password = Some(password.clone());
        }
    }
}

/// 解析配置文件路径（命令行参数优先）
pub fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => ClientConfig::default_path().context("无法确定配置文件路径"),
    }
}

/// One-shot 模式
pub struct OneShotMode {
    config: ClientConfig,
}

impl OneShotMode {
    /// 加载配置并合并命令行参数
    pub fn new(config_path: Option<PathBuf>, connection: ConnectionArgs) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let mut config = ClientConfig::load(&config_path)
            .with_context(|| format!("加载配置失败: {}", config_path.display()))?;
        debug!("Loaded config from {}", config_path.display());

        if !connection.is_empty() {
            debug!("Connection fields overridden from the command line");
        }
        connection.apply_to(&mut config);

        Ok(Self { config })
    }

    /// 连接 mock 设备
    pub fn connect(&self) -> Result<Medu<MockManipulator>> {
        let medu = MeduBuilder::from_config(&self.config)
            .build(&MockConnector::new())
            .context("连接失败")?;
        Ok(medu)
    }

    /// 连接、执行单个操作、断开
    pub fn run<T>(
        &self,
        op: impl FnOnce(&mut Medu<MockManipulator>) -> CallResult<T>,
    ) -> Result<T> {
        run_session(self.connect()?, op)
    }
}

/// 在会话上执行单个操作后断开
///
/// 操作失败时优先返回操作的错误，断开失败只记录日志。
pub fn run_session<M: Manipulator, T>(
    mut medu: Medu<M>,
    op: impl FnOnce(&mut Medu<M>) -> CallResult<T>,
) -> Result<T> {
    let result = op(&mut medu);
    let disconnected = medu.disconnect();

    match (result, disconnected) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), disconnected) => {
            if let Err(d) = disconnected {
                warn!("Disconnect after failed operation also failed: {}", d);
            }
            Err(e.into())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> ConnectionArgs {
        ConnectionArgs {
            host: Some("192.168.88.182".into()),
            client_id: Some("my_client".into()),
            login: Some("13".into()),
            password: Some("14".into()),
        }
    }

    #[test]
    fn test_args_override_config() {
        let mut config = ClientConfig::default();
        config.connection.host = Some("10.0.0.1".into());
        config.connection.login = Some("from-file".into());

        let args = ConnectionArgs {
            host: Some("10.0.0.2".into()),
            ..ConnectionArgs::default()
        };
        args.apply_to(&mut config);

        assert_eq!(config.connection.host.as_deref(), Some("10.0.0.2"));
        assert_eq!(config.connection.login.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_run_connects_and_disconnects() {
        let dir = tempfile::tempdir().unwrap();
        let mode = OneShotMode::new(Some(dir.path().join("config.toml")), creds()).unwrap();

        let state = mode.run(|medu| medu.get_joint_state()).unwrap();
        assert_eq!(state.positions.base, 0.0);
    }

    #[test]
    fn test_run_reports_call_error() {
        let dir = tempfile::tempdir().unwrap();
        let mode = OneShotMode::new(Some(dir.path().join("config.toml")), creds()).unwrap();

        let err = mode
            .run(|medu| medu.conveyor_set_speed_motors(150))
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_missing_credentials_fail_to_connect() {
        let dir = tempfile::tempdir().unwrap();
        let mode =
            OneShotMode::new(Some(dir.path().join("config.toml")), ConnectionArgs::default())
                .unwrap();
        assert!(mode.connect().is_err());
    }

    #[test]
    fn test_operation_error_wins_over_disconnect_error() {
        use medu_sdk::ContractLimits;
        use medu_sdk::DriverError;

        let mut arm = MockManipulator::connected();
        arm.fail_with(DriverError::Transport("broker gone".into()));
        let medu = Medu::from_handle(arm, ContractLimits::default());

        let err = run_session(medu, |medu| medu.run_program("edum/default")).unwrap_err();
        let call = err.downcast_ref::<medu_sdk::CallError>().unwrap();
        assert_eq!(call.operation(), "run_program");
    }

    #[test]
    fn test_disconnect_error_reported_after_success() {
        use medu_sdk::ContractLimits;

        let medu = Medu::from_handle(MockManipulator::connected(), ContractLimits::default());
        let err = run_session(medu, |medu| {
            medu.handle_mut()
                .unwrap()
                .fail_with(medu_sdk::DriverError::Transport("broker gone".into()));
            Ok(())
        })
        .unwrap_err();
        let call = err.downcast_ref::<medu_sdk::CallError>().unwrap();
        assert_eq!(call.operation(), "disconnect");
    }
}
