//! MEdu SDK - MEdu 机械臂 Rust SDK
//!
//! 在厂商 SDK 之上提供参数校验和统一的错误处理。
//!
//! # 架构设计
//!
//! 从底层到高层：
//!
//! - **类型层** (`types`): 值类型、调用契约、契约限值
//! - **驱动层** (`driver`): 设备句柄 trait（厂商 SDK 的方法面）
//! - **客户端层** (`client`): 校验-转发会话 [`Medu`]、配置、Builder
//!
//! # 快速开始
//!
//! ```rust
//! use medu_sdk::prelude::*;
//! use medu_sdk::driver::mock::MockConnector;
//!
//! # fn main() -> Result<(), CallError> {
//! let mut medu = MeduBuilder::new()
//!     .host("192.168.88.182")
//!     .client_id("my_client")
//!     .login("13")
//!     .password("14")
//!     .build(&MockConnector::new())?;
//!
//! medu.move_to_angles(JointAngles::new(0.05, -0.35, -0.75))?;
//! medu.conveyor_set_led_color(0, 255, 0)?;
//! medu.disconnect()?;
//! # Ok(())
//! # }
//! ```
//!
//! 厂商绑定通过实现 [`driver::Connector`] 和 [`driver::Manipulator`] 接入。

pub use medu_client as client;
pub use medu_driver as driver;
pub use medu_types as types;

pub mod logging;
pub mod prelude;

// 客户端层（推荐入口）
pub use client::{
    CallError, CallResult, CallResultExt, ClientConfig, ConfigError, Medu, MeduBuilder, connect,
    connect_with_limits,
};

// 驱动层
pub use driver::{Connector, Conveyor, Credentials, DriverError, Manipulator};

// 类型层
pub use types::{ContractLimits, ValidationError};

pub use logging::init_logger;
