//! # MEdu Types
//!
//! MEdu 机械臂调用契约与值类型定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `contract`: 参数契约（范围、有限值、非空字符串）
//! - `limits`: 可配置的契约限值（`ContractLimits`）
//! - `error`: 前置条件错误（`ValidationError`）
//! - `joint`: 关节空间类型
//! - `cartesian`: 笛卡尔空间类型（位置、四元数、速度）
//! - `enums`: 伺服模式、规划器、GPIO 电平
//! - `options`: 超时与 `throw_error` 透传选项
//! - `conveyor`: MGbot 传送带相关类型
//!
//! ## 单位
//!
//! 关节角为弧度（rad），坐标为米（m），超时为 [`std::time::Duration`]。

pub mod cartesian;
pub mod contract;
pub mod conveyor;
pub mod enums;
pub mod error;
pub mod joint;
pub mod limits;
pub mod options;

// 重新导出常用类型
pub use cartesian::{AngularVelocity, LinearVelocity, Orientation, Pose, Position};
pub use contract::{Range, check_finite, check_non_empty, check_positive};
pub use conveyor::{Rgb, SensorsData};
pub use enums::{GpioLevel, PlannerType, ServoControlType};
pub use error::ValidationError;
pub use joint::{JointAngles, JointState, JointVelocities};
pub use limits::ContractLimits;
pub use options::{CallOptions, timeout_from_secs};
