//! 调用层错误类型
//!
//! 每个操作的失败都归为两类：
//!
//! - 前置条件失败：句柄不存在或参数未通过契约检查，设备没有被调用
//! - 执行失败：设备（SDK）调用本身报错
//!
//! 两类错误都携带操作名，`Display` 形如 `[operation] message`，与日志一致。

use medu_driver::DriverError;
use medu_types::ValidationError;
use thiserror::Error;

/// 调用错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    /// 会话中没有设备句柄（已断开或未连接）
    #[error("[{operation}] device handle is not available")]
    NoHandle { operation: &'static str },

    /// 参数未通过契约检查，设备未被调用
    #[error("[{operation}] {source}")]
    Precondition {
        operation: &'static str,
        source: ValidationError,
    },

    /// 设备调用失败
    #[error("[{operation}] {source}")]
    Execution {
        operation: &'static str,
        source: DriverError,
    },
}

impl CallError {
    /// 出错的操作名
    pub fn operation(&self) -> &'static str {
        match self {
            Self::NoHandle { operation }
            | Self::Precondition { operation, .. }
            | Self::Execution { operation, .. } => operation,
        }
    }

    /// 是否为前置条件失败（设备未被调用）
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NoHandle { .. } | Self::Precondition { .. })
    }

    /// 是否为设备执行失败
    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Execution { .. })
    }

    /// 参数校验错误（如果有）
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Precondition { source, .. } => Some(source),
            _ => None,
        }
    }

    /// 设备错误（如果有）
    pub fn driver(&self) -> Option<&DriverError> {
        match self {
            Self::Execution { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// 调用结果
pub type CallResult<T> = Result<T, CallError>;

/// 把调用结果折叠为“有值 / 无值”
///
/// 调用方只关心成功与否时使用。错误已经在调用层记录过日志。
pub trait CallResultExt<T> {
    fn sentinel(self) -> Option<T>;
}

impl<T> CallResultExt<T> for CallResult<T> {
    fn sentinel(self) -> Option<T> {
        self.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_operation_prefix() {
        let err = CallError::Precondition {
            operation: "conveyor_set_speed_motors",
            source: ValidationError::out_of_range("speed", 150, 0, 100),
        };
        assert_eq!(
            err.to_string(),
            "[conveyor_set_speed_motors] speed value 150 is out of range [0, 100]"
        );

        let err = CallError::NoHandle {
            operation: "run_program",
        };
        assert_eq!(
            err.to_string(),
            "[run_program] device handle is not available"
        );
    }

    #[test]
    fn test_classification() {
        let no_handle = CallError::NoHandle {
            operation: "stop_movement",
        };
        assert!(no_handle.is_precondition());
        assert!(!no_handle.is_execution());
        assert_eq!(no_handle.operation(), "stop_movement");

        let execution = CallError::Execution {
            operation: "play_audio",
            source: DriverError::Timeout { timeout_ms: 60_000 },
        };
        assert!(execution.is_execution());
        assert_eq!(
            execution.driver(),
            Some(&DriverError::Timeout { timeout_ms: 60_000 })
        );
        assert!(execution.validation().is_none());
    }

    #[test]
    fn test_sentinel() {
        let ok: CallResult<u8> = Ok(3);
        assert_eq!(ok.sentinel(), Some(3));

        let err: CallResult<u8> = Err(CallError::NoHandle {
            operation: "get_joint_state",
        });
        assert_eq!(err.sentinel(), None);
    }
}
