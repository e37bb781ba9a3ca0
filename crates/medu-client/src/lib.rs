//! # MEdu Client
//!
//! MEdu 机械臂的校验调用层：每个操作先检查参数契约，再转发给设备句柄，
//! 失败时记录日志并返回 [`CallError`]，不会 panic。
//!
//! ## 快速开始
//!
//! ```rust
//! use medu_client::{CallResultExt, connect};
//! use medu_driver::{Credentials, mock::MockConnector};
//! use medu_types::JointAngles;
//!
//! let creds = Credentials::new("192.168.88.182", "my_client", "13", "14");
//! let mut medu = connect(&MockConnector::new(), &creds).unwrap();
//!
//! medu.move_to_angles(JointAngles::new(0.05, -0.35, -0.75)).unwrap();
//!
//! // 超出范围：设备不会被调用
//! assert!(medu.conveyor_set_speed_motors(150).is_err());
//!
//! // 只关心有没有结果时
//! let state = medu.get_joint_state().sentinel();
//! assert!(state.is_some());
//!
//! medu.disconnect().unwrap();
//! ```
//!
//! ## 模块
//!
//! - `session`: 会话与校验-转发流程
//! - `connect` / `builder`: 建立会话
//! - `motion`, `effector`, `servo`, `program`, `state`, `gpio`, `audio`, `conveyor`: 各类操作
//! - `config`: TOML 配置

pub mod audio;
pub mod builder;
pub mod config;
pub mod connect;
pub mod conveyor;
pub mod effector;
pub mod error;
pub mod gpio;
pub mod motion;
pub mod program;
pub mod servo;
pub mod session;
pub mod state;

pub use builder::MeduBuilder;
pub use config::{ClientConfig, ConfigError, ConnectionConfig};
pub use connect::{check_credentials, connect, connect_with_limits};
pub use error::{CallError, CallResult, CallResultExt};
pub use motion::{ArcMotion, MoveToAngles, MoveToCoordinates};
pub use session::Medu;
