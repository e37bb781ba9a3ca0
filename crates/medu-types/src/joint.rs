//! 关节空间类型
//!
//! MEdu 为三轴机械臂：底座旋转（base）、肩部驱动（shoulder）、大臂驱动（boom）。

use crate::contract::{Range, check_finite};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 三个关节的角度（rad）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    /// 底座旋转
    pub base: f64,
    /// 肩部驱动
    pub shoulder: f64,
    /// 大臂驱动
    pub boom: f64,
}

impl JointAngles {
    /// 创建关节角
    pub const fn new(base: f64, shoulder: f64, boom: f64) -> Self {
        Self {
            base,
            shoulder,
            boom,
        }
    }

    /// 零位
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// 带参数名的分量，顺序与设备接口一致
    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("base", self.base),
            ("shoulder", self.shoulder),
            ("boom", self.boom),
        ]
    }

    /// 转为数组
    pub fn to_array(&self) -> [f64; 3] {
        [self.base, self.shoulder, self.boom]
    }

    /// 检查所有关节在限位内
    pub fn check(&self, limits: &Range<f64>) -> Result<(), ValidationError> {
        for (name, value) in self.named() {
            limits.check_number(name, value)?;
        }
        Ok(())
    }
}

impl From<[f64; 3]> for JointAngles {
    fn from(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

impl fmt::Display for JointAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base={:.3} shoulder={:.3} boom={:.3}",
            self.base, self.shoulder, self.boom
        )
    }
}

/// 三个关节的速度（rad/s）
///
/// 设备接口不限制关节速度的范围，只要求是有限数值。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointVelocities {
    pub base: f64,
    pub shoulder: f64,
    pub boom: f64,
}

impl JointVelocities {
    pub const fn new(base: f64, shoulder: f64, boom: f64) -> Self {
        Self {
            base,
            shoulder,
            boom,
        }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("base_velocity", self.base),
            ("shoulder_velocity", self.shoulder),
            ("boom_velocity", self.boom),
        ]
    }

    /// 检查所有分量为有限值
    pub fn check(&self) -> Result<(), ValidationError> {
        for (name, value) in self.named() {
            check_finite(name, value)?;
        }
        Ok(())
    }
}

impl From<[f64; 3]> for JointVelocities {
    fn from(values: [f64; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

/// 关节状态（设备查询结果）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointState {
    /// 关节位置
    pub positions: JointAngles,
    /// 关节速度
    pub velocities: JointVelocities,
}
