//! 前置条件错误类型
//!
//! 参数在发送到设备之前未通过契约检查时返回。

use std::fmt;
use thiserror::Error;

/// 参数校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 数值超出声明范围
    #[error("{param} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// 参数名
        param: String,
        /// 实际值
        value: String,
        /// 下限
        min: String,
        /// 上限
        max: String,
    },

    /// NaN 或无穷大
    #[error("{param} must be a finite number, got {value}")]
    NotFinite { param: String, value: f64 },

    /// 必须严格大于 0
    #[error("{param} must be > 0, got {value}")]
    NotPositive { param: String, value: String },

    /// 空字符串或只含空白
    #[error("{param} must be a non-empty string")]
    EmptyString { param: String },

    /// 复合参数缺少必需键
    #[error("{param} is missing required key '{key}'")]
    MissingKey { param: String, key: String },

    /// 类型不匹配（仅出现在动态输入，如 JSON）
    #[error("Invalid type for {param}: expected {expected}")]
    InvalidType { param: String, expected: String },

    /// 枚举值无效
    #[error("Invalid value '{value}' for {param}, expected one of: {expected}")]
    InvalidEnumValue {
        param: String,
        value: String,
        expected: String,
    },

    /// 超时必须是有限的非负秒数
    #[error("{param} must be a finite, non-negative number of seconds, got {value}")]
    InvalidTimeout { param: String, value: f64 },

    /// 限值配置本身无效（min > max 或非有限值）
    #[error("Invalid range for {param}: [{min}, {max}]")]
    InvalidRange {
        param: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    /// 创建范围错误
    pub fn out_of_range<T: fmt::Display>(param: impl Into<String>, value: T, min: T, max: T) -> Self {
        Self::OutOfRange {
            param: param.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// 创建非有限值错误
    pub fn not_finite(param: impl Into<String>, value: f64) -> Self {
        Self::NotFinite {
            param: param.into(),
            value,
        }
    }

    /// 创建非正数错误
    pub fn not_positive<T: fmt::Display>(param: impl Into<String>, value: T) -> Self {
        Self::NotPositive {
            param: param.into(),
            value: value.to_string(),
        }
    }

    /// 创建空字符串错误
    pub fn empty_string(param: impl Into<String>) -> Self {
        Self::EmptyString {
            param: param.into(),
        }
    }

    /// 创建缺少键错误
    pub fn missing_key(param: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            param: param.into(),
            key: key.into(),
        }
    }

    /// 创建类型错误
    pub fn invalid_type(param: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidType {
            param: param.into(),
            expected: expected.into(),
        }
    }

    /// 创建枚举值错误
    pub fn invalid_enum(
        param: impl Into<String>,
        value: impl fmt::Display,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            param: param.into(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// 参数名
    pub fn param(&self) -> &str {
        match self {
            Self::OutOfRange { param, .. }
            | Self::NotFinite { param, .. }
            | Self::NotPositive { param, .. }
            | Self::EmptyString { param }
            | Self::MissingKey { param, .. }
            | Self::InvalidType { param, .. }
            | Self::InvalidEnumValue { param, .. }
            | Self::InvalidTimeout { param, .. }
            | Self::InvalidRange { param, .. } => param,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ValidationError::out_of_range("speed", 150, 0, 100);
        assert_eq!(err.to_string(), "speed value 150 is out of range [0, 100]");
        assert_eq!(err.param(), "speed");
    }

    #[test]
    fn test_empty_string_display() {
        let err = ValidationError::empty_string("host");
        assert_eq!(err.to_string(), "host must be a non-empty string");
    }

    #[test]
    fn test_missing_key_display() {
        let err = ValidationError::missing_key("linear_vel", "z");
        let msg = err.to_string();
        assert!(msg.contains("linear_vel") && msg.contains("'z'"), "{}", msg);
    }

    #[test]
    fn test_invalid_enum_display() {
        let err = ValidationError::invalid_enum("value", 2, "0, 1");
        assert_eq!(
            err.to_string(),
            "Invalid value '2' for value, expected one of: 0, 1"
        );
    }

    #[test]
    fn test_not_finite_display() {
        let err = ValidationError::not_finite("x", f64::INFINITY);
        assert!(err.to_string().contains("finite"));
        assert_eq!(err.param(), "x");
    }
}
