//! 枚举参数
//!
//! 伺服控制模式、运动规划器和 GPIO 电平。整数到枚举的转换使用
//! `num_enum`，字符串解析用于命令行和配置文件。

use crate::error::ValidationError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 伺服（流式）控制模式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum ServoControlType {
    /// 末端速度（配合 `stream_cartesian_velocities`）
    Twist = 0,
    /// 末端位姿（配合 `stream_coordinates`）
    Pose = 1,
    /// 关节点动（配合 `stream_joint_angles`）
    JointJog = 2,
}

impl ServoControlType {
    pub const ALL: [Self; 3] = [Self::Twist, Self::Pose, Self::JointJog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twist => "twist",
            Self::Pose => "pose",
            Self::JointJog => "joint_jog",
        }
    }
}

impl fmt::Display for ServoControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServoControlType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "twist" => Ok(Self::Twist),
            "pose" => Ok(Self::Pose),
            "joint_jog" => Ok(Self::JointJog),
            _ => Err(ValidationError::invalid_enum(
                "servo_type",
                s,
                "twist, pose, joint_jog",
            )),
        }
    }
}

/// 笛卡尔运动规划器
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum PlannerType {
    /// 直线插补
    Lin = 0,
    /// 点到点
    Ptp = 1,
}

impl FromStr for PlannerType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lin" => Ok(Self::Lin),
            "ptp" => Ok(Self::Ptp),
            _ => Err(ValidationError::invalid_enum("planner_type", s, "lin, ptp")),
        }
    }
}

/// GPIO 电平
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum GpioLevel {
    #[default]
    Low = 0,
    High = 1,
}

impl GpioLevel {
    /// 从整数解析，只接受 0 或 1
    pub fn from_value(param: &str, value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::try_from(v).ok())
            .ok_or_else(|| ValidationError::invalid_enum(param, value, "0, 1"))
    }

    pub fn as_u8(self) -> u8 {
        self.into()
    }
}

impl From<bool> for GpioLevel {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for GpioLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
