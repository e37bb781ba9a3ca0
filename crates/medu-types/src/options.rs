//! 透传给设备的调用选项
//!
//! 超时和 `throw_error` 的语义由设备 SDK 决定，这一层只负责校验和原样转发。

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 调用选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOptions {
    /// 等待设备完成的超时
    pub timeout: Duration,
    /// 设备端失败时是否让 SDK 报错（否则 SDK 静默返回）
    pub throw_error: bool,
}

impl CallOptions {
    /// 创建调用选项
    pub const fn new(timeout: Duration, throw_error: bool) -> Self {
        Self {
            timeout,
            throw_error,
        }
    }

    /// 从秒数创建，秒数必须有限且非负
    pub fn from_secs_f64(seconds: f64, throw_error: bool) -> Result<Self, ValidationError> {
        Ok(Self::new(timeout_from_secs("timeout_seconds", seconds)?, throw_error))
    }

    /// 修改超时
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 修改 `throw_error`
    pub const fn with_throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }

    /// 超时毫秒数（用于日志）
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

/// 秒数转 `Duration`，拒绝负数、NaN 和无穷大
pub fn timeout_from_secs(param: &str, seconds: f64) -> Result<Duration, ValidationError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ValidationError::InvalidTimeout {
            param: param.to_string(),
            value: seconds,
        });
    }
    Duration::try_from_secs_f64(seconds).map_err(|_| ValidationError::InvalidTimeout {
        param: param.to_string(),
        value: seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_secs() {
        let options = CallOptions::from_secs_f64(0.5, false).unwrap();
        assert_eq!(options.timeout, Duration::from_millis(500));
        assert!(!options.throw_error);
        assert_eq!(options.timeout_ms(), 500);
    }

    #[test]
    fn test_zero_timeout_accepted() {
        assert!(CallOptions::from_secs_f64(0.0, true).is_ok());
    }

    #[test]
    fn test_invalid_timeouts_rejected() {
        for seconds in [-0.1, f64::NAN, f64::INFINITY, 1e30] {
            assert!(
                CallOptions::from_secs_f64(seconds, true).is_err(),
                "{} should be rejected",
                seconds
            );
        }
    }

    #[test]
    fn test_builders() {
        let options = CallOptions::new(Duration::from_secs(60), true)
            .with_timeout(Duration::from_secs(10))
            .with_throw_error(false);
        assert_eq!(options, CallOptions::new(Duration::from_secs(10), false));
    }
}
