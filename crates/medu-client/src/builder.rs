//! Medu Builder
//!
//! 提供链式 API 创建 [`Medu`] 会话，可从配置文件预填参数。

use crate::config::{ClientConfig, ConnectionConfig};
use crate::connect::connect_with_limits;
use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::{Connector, Credentials};
use medu_types::ContractLimits;

/// Medu Builder
///
/// # 示例
///
/// ```rust
/// use medu_client::MeduBuilder;
/// use medu_driver::mock::MockConnector;
///
/// let medu = MeduBuilder::new()
///     .host("192.168.88.182")
///     .client_id("my_client")
///     .login("13")
///     .password("14")
///     .build(&MockConnector::new())
///     .unwrap();
/// assert!(medu.has_handle());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeduBuilder {
    host: Option<String>,
    client_id: Option<String>,
    login: Option<String>,
    password: Option<String>,
    limits: Option<ContractLimits>,
}

impl MeduBuilder {
    /// 创建新的 Builder
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置预填连接参数和限值
    ///
    /// 之后调用的 setter 会覆盖配置中的值。
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            host: config.connection.host.clone(),
            client_id: config.connection.client_id.clone(),
            login: config.connection.login.clone(),
            password: config.connection.password.clone(),
            limits: Some(config.limits.clone()),
        }
    }

    /// 机械臂地址
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// 契约限值（默认: [`ContractLimits::default`]）
    pub fn limits(mut self, limits: ContractLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// 当前凭据，未设置的字段为空字符串
    pub fn credentials(&self) -> Credentials {
        ConnectionConfig {
            host: self.host.clone(),
            client_id: self.client_id.clone(),
            login: self.login.clone(),
            password: self.password.clone(),
        }
        .credentials()
    }

    /// 连接并获取控制权
    pub fn build<C: Connector>(self, connector: &C) -> CallResult<Medu<C::Handle>> {
        let credentials = self.credentials();
        connect_with_limits(connector, &credentials, self.limits.unwrap_or_default())
    }
}
