//! # 契约限值
//!
//! 各操作参数范围的集中定义。默认值是面向小型桌面机械臂的保守取值，
//! 实际部署可以通过配置文件覆盖（见 `medu-client` 的 `ClientConfig`）。

use crate::contract::Range;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 关节角限位（rad）
///
/// 控制器限位为 ±3.14，并非 ±π。
#[allow(clippy::approx_constant)]
pub const JOINT_LIMIT_RAD: f64 = 3.14;

/// 契约限值
///
/// 所有区间均为闭区间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractLimits {
    /// 关节角（rad）
    pub joint: Range<f64>,

    /// 笛卡尔坐标（m）
    pub coordinate: Range<f64>,

    /// 四元数分量
    pub orientation: Range<f64>,

    /// 速度/加速度缩放因子
    pub scaling: Range<f64>,

    /// 传送带电机速度
    pub conveyor_speed: Range<i64>,

    /// LED 单通道亮度
    pub led_channel: Range<i64>,

    /// 蜂鸣器音调等级
    pub buzz_level: Range<i64>,
}

impl Default for ContractLimits {
    fn default() -> Self {
        Self {
            joint: Range::new(-JOINT_LIMIT_RAD, JOINT_LIMIT_RAD),
            coordinate: Range::new(-1.0, 1.0),
            orientation: Range::new(-1.0, 1.0),
            scaling: Range::new(0.0, 1.0),
            conveyor_speed: Range::new(0, 100),
            led_channel: Range::new(0, 255),
            buzz_level: Range::new(1, 15),
        }
    }
}

impl ContractLimits {
    /// 校验限值本身
    ///
    /// 浮点区间必须有限且 `min <= max`；整型区间必须落在设备的 `u8` 宽度内。
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, range) in [
            ("limits.joint", &self.joint),
            ("limits.coordinate", &self.coordinate),
            ("limits.orientation", &self.orientation),
            ("limits.scaling", &self.scaling),
        ] {
            if !range.min.is_finite() || !range.max.is_finite() {
                return Err(ValidationError::InvalidRange {
                    param: name.to_string(),
                    min: range.min.to_string(),
                    max: range.max.to_string(),
                });
            }
            range.validate(name)?;
        }

        let device_width = Range::new(0_i64, i64::from(u8::MAX));
        for (name, range) in [
            ("limits.conveyor_speed", &self.conveyor_speed),
            ("limits.led_channel", &self.led_channel),
            ("limits.buzz_level", &self.buzz_level),
        ] {
            range.validate(name)?;
            if !device_width.contains(range.min) || !device_width.contains(range.max) {
                return Err(ValidationError::InvalidRange {
                    param: name.to_string(),
                    min: range.min.to_string(),
                    max: range.max.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_valid() {
        let limits = ContractLimits::default();
        assert!(limits.validate().is_ok());
        assert_eq!(limits.conveyor_speed, Range::new(0, 100));
        assert_eq!(limits.buzz_level, Range::new(1, 15));
        assert_eq!(limits.joint.max, JOINT_LIMIT_RAD);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let limits = ContractLimits {
            scaling: Range::new(1.0, 0.0),
            ..Default::default()
        };
        let err = limits.validate().unwrap_err();
        assert_eq!(err.param(), "limits.scaling");
    }

    #[test]
    fn test_infinite_range_rejected() {
        let limits = ContractLimits {
            coordinate: Range::new(f64::NEG_INFINITY, 1.0),
            ..Default::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_integer_range_beyond_device_width_rejected() {
        let limits = ContractLimits {
            conveyor_speed: Range::new(0, 300),
            ..Default::default()
        };
        let err = limits.validate().unwrap_err();
        assert_eq!(err.param(), "limits.conveyor_speed");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let limits: ContractLimits = toml::from_str(
            r#"
[conveyor_speed]
min = 10
max = 80
"#,
        )
        .unwrap();
        assert_eq!(limits.conveyor_speed, Range::new(10, 80));
        assert_eq!(limits.buzz_level, Range::new(1, 15));
    }
}
