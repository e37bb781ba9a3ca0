//! 驱动层错误类型定义
//!
//! 设备句柄（厂商 SDK）调用失败时返回的错误。

use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    /// 尚未建立连接（或已断开）
    #[error("Manipulator not connected")]
    NotConnected,

    /// 连接被拒绝（地址不可达、认证失败等）
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    /// 控制权请求被拒绝（例如已被其他客户端占用）
    #[error("Control request denied: {0}")]
    ControlDenied(String),

    /// 未获取控制权就发送了运动命令
    #[error("Control not acquired")]
    NoControl,

    /// 设备拒绝执行命令
    #[error("Command rejected by device: {0}")]
    Rejected(String),

    /// 操作超时
    #[error("Operation timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// 未连接传送带附件
    #[error("No conveyor attached")]
    NoConveyor,

    /// 传输层错误（由 SDK 上报）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 其他 SDK 错误
    #[error("SDK error: {0}")]
    Sdk(String),
}

impl DriverError {
    /// 是否为连接/控制权相关错误
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            Self::NotConnected
                | Self::ConnectionRefused(_)
                | Self::ControlDenied(_)
                | Self::NoControl
        )
    }
}

impl From<String> for DriverError {
    fn from(message: String) -> Self {
        Self::Sdk(message)
    }
}

impl From<&str> for DriverError {
    fn from(message: &str) -> Self {
        Self::Sdk(message.to_string())
    }
}
