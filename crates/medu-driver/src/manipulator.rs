//! 设备句柄抽象
//!
//! 厂商 SDK 的方法面被建模为 trait：厂商绑定实现 [`Manipulator`]、
//! [`Conveyor`] 和 [`Connector`]，上层（`medu-client`）只依赖这些 trait。
//!
//! # 约定
//!
//! - 所有方法都是阻塞调用，直到设备返回或报错
//! - 参数已经过上层校验和规范化（浮点、收窄后的整数），实现不需要重复检查
//! - `CallOptions` 中的超时和 `throw_error` 原样交给 SDK，语义由 SDK 决定
//! - 句柄由调用方独占（`&mut self`），不需要内部加锁

use crate::error::DriverError;
use medu_types::{
    AngularVelocity, CallOptions, GpioLevel, JointAngles, JointState, JointVelocities,
    LinearVelocity, PlannerType, Pose, Rgb, SensorsData, ServoControlType,
};
use std::fmt;
use std::time::Duration;

/// 连接凭据
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// 机械臂（MQTT broker）地址
    pub host: String,
    /// 客户端 ID
    pub client_id: String,
    /// 用户名
    pub login: String,
    /// 密码
    pub password: String,
}

impl Credentials {
    pub fn new(
        host: impl Into<String>,
        client_id: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            client_id: client_id.into(),
            login: login.into(),
            password: password.into(),
        }
    }
}

// 密码不进日志
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("client_id", &self.client_id)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/// 设备句柄工厂
///
/// 对应 SDK 中构造句柄对象的那一步（尚未联网）。
pub trait Connector {
    type Handle: Manipulator;

    /// 根据凭据创建句柄
    fn open(&self, credentials: &Credentials) -> Result<Self::Handle, DriverError>;
}

/// 机械臂设备句柄（厂商 SDK 方法面）
pub trait Manipulator {
    type Conveyor: Conveyor;

    // ==================== 会话 ====================

    /// 建立连接
    fn connect(&mut self) -> Result<(), DriverError>;

    /// 获取控制权
    fn get_control(&mut self) -> Result<(), DriverError>;

    /// 断开连接
    fn disconnect(&mut self) -> Result<(), DriverError>;

    // ==================== 运动 ====================

    /// 关节空间运动
    fn move_to_angles(
        &mut self,
        joints: JointAngles,
        velocities: JointVelocities,
        velocity_factor: f64,
        acceleration_factor: f64,
        options: CallOptions,
    ) -> Result<(), DriverError>;

    /// 笛卡尔空间运动
    ///
    /// `planner` 为 `None` 时使用 SDK 默认规划器。
    fn move_to_coordinates(
        &mut self,
        pose: Pose,
        velocity_scaling_factor: f64,
        acceleration_scaling_factor: f64,
        planner: Option<PlannerType>,
        options: CallOptions,
    ) -> Result<(), DriverError>;

    /// 圆弧运动
    #[allow(clippy::too_many_arguments)]
    fn arc_motion(
        &mut self,
        target: Pose,
        center: Pose,
        step: f64,
        count_point_arc: u32,
        max_velocity_scaling_factor: f64,
        max_acceleration_scaling_factor: f64,
        options: CallOptions,
    ) -> Result<(), DriverError>;

    /// 停止当前运动
    fn stop_movement(&mut self, timeout: Duration) -> Result<(), DriverError>;

    // ==================== 末端执行器 ====================

    /// 末端附件供电
    fn nozzle_power(&mut self, on: bool) -> Result<(), DriverError>;

    /// 夹爪控制，`None` 表示该轴保持不变
    fn manage_gripper(
        &mut self,
        rotation: Option<f64>,
        gripper: Option<f64>,
    ) -> Result<(), DriverError>;

    // ==================== 伺服模式与流式控制 ====================

    fn set_servo_control_type(&mut self, servo_type: ServoControlType) -> Result<(), DriverError>;

    fn set_servo_twist_mode(&mut self) -> Result<(), DriverError> {
        self.set_servo_control_type(ServoControlType::Twist)
    }

    fn set_servo_pose_mode(&mut self) -> Result<(), DriverError> {
        self.set_servo_control_type(ServoControlType::Pose)
    }

    fn set_servo_joint_jog_mode(&mut self) -> Result<(), DriverError> {
        self.set_servo_control_type(ServoControlType::JointJog)
    }

    fn stream_cartesian_velocities(
        &mut self,
        linear: LinearVelocity,
        angular: AngularVelocity,
    ) -> Result<(), DriverError>;

    fn stream_coordinates(&mut self, pose: Pose) -> Result<(), DriverError>;

    fn stream_joint_angles(
        &mut self,
        joints: JointAngles,
        velocities: JointVelocities,
    ) -> Result<(), DriverError>;

    // ==================== 程序 ====================

    /// 运行控制器上已保存的程序
    fn run_program(&mut self, name: &str) -> Result<(), DriverError>;

    /// 运行 JSON 描述的程序
    fn run_program_json(
        &mut self,
        name: &str,
        program: &serde_json::Value,
    ) -> Result<(), DriverError>;

    /// 在控制器上执行 Python 代码
    fn run_python_program(&mut self, code: &str) -> Result<(), DriverError>;

    // ==================== 状态查询 ====================

    fn get_joint_state(&mut self) -> Result<JointState, DriverError>;

    fn get_home_position(&mut self) -> Result<JointState, DriverError>;

    fn get_cartesian_coordinates(&mut self) -> Result<Pose, DriverError>;

    // ==================== GPIO / 音频 ====================

    fn write_gpio(
        &mut self,
        name: &str,
        level: GpioLevel,
        options: CallOptions,
    ) -> Result<(), DriverError>;

    fn get_gpio_value(&mut self, name: &str, options: CallOptions)
    -> Result<GpioLevel, DriverError>;

    /// 播放控制器上的音频文件
    fn play_audio(&mut self, file_name: &str, options: CallOptions) -> Result<(), DriverError>;

    // ==================== 附件 ====================

    /// MGbot 传送带
    fn conveyor(&mut self) -> Result<&mut Self::Conveyor, DriverError>;
}

/// MGbot 传送带附件
pub trait Conveyor {
    fn set_speed_motors(&mut self, speed: u8) -> Result<(), DriverError>;

    fn set_servo_angle(&mut self, angle: f64) -> Result<(), DriverError>;

    fn set_led_color(&mut self, color: Rgb) -> Result<(), DriverError>;

    fn display_text(&mut self, text: &str) -> Result<(), DriverError>;

    fn set_buzz_tone(&mut self, level: u8) -> Result<(), DriverError>;

    fn get_sensors_data(&mut self, as_json: bool) -> Result<SensorsData, DriverError>;
}
