//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use medu_sdk::prelude::*;
//! ```

// 客户端层
pub use crate::client::motion::{ArcMotion, MoveToAngles, MoveToCoordinates};
pub use crate::client::{CallError, CallResult, CallResultExt, Medu, MeduBuilder, connect};

// 驱动层 trait（厂商绑定需要实现）
pub use crate::driver::{Connector, Conveyor, Credentials, DriverError, Manipulator};

// 值类型
pub use crate::types::{
    AngularVelocity, CallOptions, ContractLimits, GpioLevel, JointAngles, JointState,
    JointVelocities, LinearVelocity, Orientation, PlannerType, Pose, Position, Rgb, SensorsData,
    ServoControlType, ValidationError,
};
