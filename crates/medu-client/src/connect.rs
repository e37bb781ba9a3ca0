//! 连接
//!
//! 校验凭据，创建句柄，依次执行 `connect` 和 `get_control`。
//! 任何一步失败都返回错误，不会留下半连接的会话。

use crate::error::CallResult;
use crate::session::{Medu, fail, reject};
use medu_driver::{Connector, Credentials, Manipulator};
use medu_types::{ContractLimits, ValidationError, check_non_empty};
use tracing::{debug, info, warn};

const OPERATION: &str = "connect";

/// 使用默认契约限值连接
///
/// # 示例
///
/// ```rust
/// use medu_client::connect;
/// use medu_driver::{Credentials, mock::MockConnector};
///
/// let creds = Credentials::new("192.168.88.182", "my_client", "13", "14");
/// let mut medu = connect(&MockConnector::new(), &creds).unwrap();
/// assert!(medu.has_handle());
/// medu.disconnect().unwrap();
/// ```
pub fn connect<C: Connector>(
    connector: &C,
    credentials: &Credentials,
) -> CallResult<Medu<C::Handle>> {
    connect_with_limits(connector, credentials, ContractLimits::default())
}

/// 使用指定契约限值连接
///
/// 限值本身无效时同样视为前置条件失败。
pub fn connect_with_limits<C: Connector>(
    connector: &C,
    credentials: &Credentials,
    limits: ContractLimits,
) -> CallResult<Medu<C::Handle>> {
    check_credentials(credentials).map_err(|source| reject(OPERATION, source))?;
    limits.validate().map_err(|source| reject(OPERATION, source))?;

    debug!("[{}] opening handle for {:?}", OPERATION, credentials);
    let mut handle = connector
        .open(credentials)
        .map_err(|source| fail(OPERATION, source))?;

    handle.connect().map_err(|source| fail(OPERATION, source))?;

    if let Err(source) = handle.get_control() {
        // 已连接但拿不到控制权，先断开再报错
        if let Err(e) = handle.disconnect() {
            warn!("[{}] disconnect after control failure: {}", OPERATION, e);
        }
        return Err(fail(OPERATION, source));
    }

    info!(
        "[{}] connected to {} as {}",
        OPERATION, credentials.host, credentials.client_id
    );
    Ok(Medu::from_handle(handle, limits))
}

/// 凭据四个字段都必须是非空字符串
pub fn check_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    check_non_empty("host", &credentials.host)?;
    check_non_empty("client_id", &credentials.client_id)?;
    check_non_empty("login", &credentials.login)?;
    check_non_empty("password", &credentials.password)?;
    Ok(())
}

impl<M: Manipulator> Medu<M> {
    /// 重新获取控制权（例如被其他客户端抢占后）
    pub fn get_control(&mut self) -> CallResult<()> {
        self.call("get_control", |_| Ok(()), |arm, ()| arm.get_control())
    }
}
