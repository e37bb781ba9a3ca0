//! # MEdu Driver
//!
//! 设备句柄层：把厂商 SDK 的方法面抽象为 trait
//!
//! - [`Connector`]：根据凭据创建句柄
//! - [`Manipulator`]：机械臂命令、状态查询、GPIO、音频
//! - [`Conveyor`]：MGbot 传送带附件
//!
//! 启用 `mock` feature 后提供内存实现 [`mock::MockManipulator`]，
//! 用于测试和命令行 dry-run。

pub mod error;
pub mod manipulator;

#[cfg(feature = "mock")]
pub mod mock;

pub use error::DriverError;
pub use manipulator::{Connector, Conveyor, Credentials, Manipulator};
