//! 笛卡尔空间类型
//!
//! 位置（米）、四元数姿态、位姿，以及流式控制用的线速度/角速度。
//!
//! 线速度和角速度可以从「名称 → 数值」映射构建，缺少任一键
//! 都会返回 [`ValidationError::MissingKey`]：
//!
//! ```rust
//! use medu_types::LinearVelocity;
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("x".to_string(), 0.02);
//! map.insert("y".to_string(), 0.0);
//! assert!(LinearVelocity::from_map("linear_vel", &map).is_err()); // 缺少 z
//! ```

use crate::contract::{Range, check_finite};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 三维位置（米）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 检查坐标，参数名带前缀（如 `target_x`）
    pub fn check(&self, prefix: &str, limits: &Range<f64>) -> Result<(), ValidationError> {
        for (axis, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            limits.check_number(&prefixed(prefix, axis), value)?;
        }
        Ok(())
    }

    /// 只检查有限值
    pub fn check_finite(&self) -> Result<(), ValidationError> {
        for (axis, value) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            check_finite(axis, value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// 四元数姿态 `(x, y, z, w)`
///
/// 与设备接口的参数顺序一致（`ox, oy, oz, ow`）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Orientation {
    /// 单位四元数（无旋转）
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [("ox", self.x), ("oy", self.y), ("oz", self.z), ("ow", self.w)]
    }

    /// 检查各分量在范围内
    pub fn check(&self, limits: &Range<f64>) -> Result<(), ValidationError> {
        for (name, value) in self.named() {
            limits.check_number(name, value)?;
        }
        Ok(())
    }

    pub fn check_finite(&self) -> Result<(), ValidationError> {
        for (name, value) in self.named() {
            check_finite(name, value)?;
        }
        Ok(())
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 位姿（位置 + 姿态）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub orientation: Orientation,
}

impl Pose {
    pub const fn new(position: Position, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// 只有位置，姿态为单位四元数
    pub const fn from_position(position: Position) -> Self {
        Self::new(position, Orientation::IDENTITY)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.orientation;
        write!(
            f,
            "{} q=({:.3}, {:.3}, {:.3}, {:.3})",
            self.position, o.x, o.y, o.z, o.w
        )
    }
}

/// 末端线速度（m/s）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearVelocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LinearVelocity {
    /// 映射中必须包含的键
    pub const KEYS: [&'static str; 3] = ["x", "y", "z"];

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 从映射构建
    pub fn from_map(param: &str, map: &BTreeMap<String, f64>) -> Result<Self, ValidationError> {
        let [x, y, z] = require_keys(param, map, Self::KEYS)?;
        Ok(Self { x, y, z })
    }

    pub fn check(&self, param: &str) -> Result<(), ValidationError> {
        for (key, value) in Self::KEYS.into_iter().zip([self.x, self.y, self.z]) {
            check_finite(&indexed(param, key), value)?;
        }
        Ok(())
    }
}

/// 末端角速度（rad/s）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngularVelocity {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl AngularVelocity {
    pub const KEYS: [&'static str; 3] = ["rx", "ry", "rz"];

    pub const fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    pub fn from_map(param: &str, map: &BTreeMap<String, f64>) -> Result<Self, ValidationError> {
        let [rx, ry, rz] = require_keys(param, map, Self::KEYS)?;
        Ok(Self { rx, ry, rz })
    }

    pub fn check(&self, param: &str) -> Result<(), ValidationError> {
        for (key, value) in Self::KEYS.into_iter().zip([self.rx, self.ry, self.rz]) {
            check_finite(&indexed(param, key), value)?;
        }
        Ok(())
    }
}

/// 按顺序取出必需键；额外的键被忽略
fn require_keys<const N: usize>(
    param: &str,
    map: &BTreeMap<String, f64>,
    keys: [&'static str; N],
) -> Result<[f64; N], ValidationError> {
    let mut values = [0.0; N];
    for (slot, key) in values.iter_mut().zip(keys) {
        let value = map
            .get(key)
            .copied()
            .ok_or_else(|| ValidationError::missing_key(param, key))?;
        *slot = check_finite(&indexed(param, key), value)?;
    }
    Ok(values)
}

fn prefixed(prefix: &str, axis: &str) -> String {
    if prefix.is_empty() {
        axis.to_string()
    } else {
        format!("{}_{}", prefix, axis)
    }
}

fn indexed(param: &str, key: &str) -> String {
    format!("{}['{}']", param, key)
}
