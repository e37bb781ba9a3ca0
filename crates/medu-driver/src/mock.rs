//! Mock 设备
//!
//! 无硬件依赖的内存设备，用于测试和命令行 dry-run：
//!
//! - 记录每一次到达设备的调用（[`MockCall`] / [`ConveyorCall`]）
//! - 模拟会话状态：未连接、未获取控制权时拒绝命令
//! - 伺服流式命令要求匹配的伺服模式
//! - 可注入失败，模拟 SDK 抛出的错误
//!
//! 运动命令会立即把目标写入模拟状态，不模拟轨迹。

use crate::error::DriverError;
use crate::manipulator::{Connector, Conveyor, Credentials, Manipulator};
use medu_types::{
    AngularVelocity, CallOptions, GpioLevel, JointAngles, JointState, JointVelocities,
    LinearVelocity, PlannerType, Pose, Position, Rgb, SensorsData, ServoControlType,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::trace;

/// 到达 mock 设备的调用
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Connect,
    GetControl,
    Disconnect,
    MoveToAngles {
        joints: JointAngles,
        velocities: JointVelocities,
        velocity_factor: f64,
        acceleration_factor: f64,
        options: CallOptions,
    },
    MoveToCoordinates {
        pose: Pose,
        velocity_scaling_factor: f64,
        acceleration_scaling_factor: f64,
        planner: Option<PlannerType>,
        options: CallOptions,
    },
    ArcMotion {
        target: Pose,
        center: Pose,
        step: f64,
        count_point_arc: u32,
        max_velocity_scaling_factor: f64,
        max_acceleration_scaling_factor: f64,
        options: CallOptions,
    },
    StopMovement {
        timeout: Duration,
    },
    NozzlePower(bool),
    ManageGripper {
        rotation: Option<f64>,
        gripper: Option<f64>,
    },
    SetServoControlType(ServoControlType),
    SetServoTwistMode,
    SetServoPoseMode,
    SetServoJointJogMode,
    StreamCartesianVelocities {
        linear: LinearVelocity,
        angular: AngularVelocity,
    },
    StreamCoordinates(Pose),
    StreamJointAngles {
        joints: JointAngles,
        velocities: JointVelocities,
    },
    RunProgram(String),
    RunProgramJson {
        name: String,
        program: serde_json::Value,
    },
    RunPythonProgram(String),
    GetJointState,
    GetHomePosition,
    GetCartesianCoordinates,
    WriteGpio {
        name: String,
        level: GpioLevel,
        options: CallOptions,
    },
    GetGpioValue {
        name: String,
        options: CallOptions,
    },
    PlayAudio {
        file_name: String,
        options: CallOptions,
    },
}

/// 到达 mock 传送带的调用
#[derive(Debug, Clone, PartialEq)]
pub enum ConveyorCall {
    SetSpeedMotors(u8),
    SetServoAngle(f64),
    SetLedColor(Rgb),
    DisplayText(String),
    SetBuzzTone(u8),
    GetSensorsData { as_json: bool },
}

/// 模拟传送带
#[derive(Debug, Clone, Default)]
pub struct MockConveyor {
    calls: Vec<ConveyorCall>,
    speed: u8,
    servo_angle: f64,
    led: Rgb,
    text: String,
    buzz: u8,
}

impl MockConveyor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的调用
    pub fn calls(&self) -> &[ConveyorCall] {
        &self.calls
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn led(&self) -> Rgb {
        self.led
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn record(&mut self, call: ConveyorCall) {
        trace!("[MockConveyor] {:?}", call);
        self.calls.push(call);
    }
}

impl Conveyor for MockConveyor {
    fn set_speed_motors(&mut self, speed: u8) -> Result<(), DriverError> {
        self.record(ConveyorCall::SetSpeedMotors(speed));
        self.speed = speed;
        Ok(())
    }

    fn set_servo_angle(&mut self, angle: f64) -> Result<(), DriverError> {
        self.record(ConveyorCall::SetServoAngle(angle));
        self.servo_angle = angle;
        Ok(())
    }

    fn set_led_color(&mut self, color: Rgb) -> Result<(), DriverError> {
        self.record(ConveyorCall::SetLedColor(color));
        self.led = color;
        Ok(())
    }

    fn display_text(&mut self, text: &str) -> Result<(), DriverError> {
        self.record(ConveyorCall::DisplayText(text.to_string()));
        self.text = text.to_string();
        Ok(())
    }

    fn set_buzz_tone(&mut self, level: u8) -> Result<(), DriverError> {
        self.record(ConveyorCall::SetBuzzTone(level));
        self.buzz = level;
        Ok(())
    }

    fn get_sensors_data(&mut self, as_json: bool) -> Result<SensorsData, DriverError> {
        self.record(ConveyorCall::GetSensorsData { as_json });
        if as_json {
            Ok(SensorsData::Json(serde_json::json!({
                "speed": self.speed,
                "servo_angle": self.servo_angle,
                "led": [self.led.r, self.led.g, self.led.b],
                "buzz": self.buzz,
                "distance": 0,
            })))
        } else {
            Ok(SensorsData::Raw(format!(
                "speed={};servo_angle={};distance=0",
                self.speed, self.servo_angle
            )))
        }
    }
}

/// 模拟机械臂
#[derive(Debug, Clone)]
pub struct MockManipulator {
    credentials: Option<Credentials>,
    calls: Vec<MockCall>,
    connected: bool,
    has_control: bool,
    refuse_connection: Option<String>,
    deny_control: Option<String>,
    failure: Option<DriverError>,
    servo: Option<ServoControlType>,
    joint_state: JointState,
    home: JointState,
    pose: Pose,
    nozzle_on: bool,
    gpio: BTreeMap<String, GpioLevel>,
    conveyor: Option<MockConveyor>,
}

impl Default for MockManipulator {
    fn default() -> Self {
        Self {
            credentials: None,
            calls: Vec::new(),
            connected: false,
            has_control: false,
            refuse_connection: None,
            deny_control: None,
            failure: None,
            servo: None,
            joint_state: JointState::default(),
            home: JointState::default(),
            pose: Pose::from_position(Position::new(0.27, 0.0, 0.15)),
            nozzle_on: false,
            gpio: BTreeMap::new(),
            conveyor: Some(MockConveyor::new()),
        }
    }
}

impl MockManipulator {
    /// 创建未连接的 mock 设备（带传送带）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建已连接并获取控制权的 mock 设备
    pub fn connected() -> Self {
        Self {
            connected: true,
            has_control: true,
            ..Self::default()
        }
    }

    /// 不带传送带
    pub fn without_conveyor(mut self) -> Self {
        self.conveyor = None;
        self
    }

    /// 设置初始关节状态
    pub fn with_joint_state(mut self, state: JointState) -> Self {
        self.joint_state = state;
        self
    }

    /// 设置 home 位置
    pub fn with_home(mut self, home: JointState) -> Self {
        self.home = home;
        self
    }

    /// 预置 GPIO 引脚
    pub fn with_gpio(mut self, name: impl Into<String>, level: GpioLevel) -> Self {
        self.gpio.insert(name.into(), level);
        self
    }

    /// 之后的每次设备调用都返回该错误，直到 [`clear_failure`](Self::clear_failure)
    pub fn fail_with(&mut self, error: DriverError) {
        self.failure = Some(error);
    }

    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    /// 已记录的调用
    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    /// 最近一次调用
    pub fn last_call(&self) -> Option<&MockCall> {
        self.calls.last()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn has_control(&self) -> bool {
        self.has_control
    }

    pub fn servo_mode(&self) -> Option<ServoControlType> {
        self.servo
    }

    pub fn nozzle_on(&self) -> bool {
        self.nozzle_on
    }

    pub fn gpio(&self, name: &str) -> Option<GpioLevel> {
        self.gpio.get(name).copied()
    }

    /// 传送带（只读，不经过会话检查）
    pub fn conveyor_state(&self) -> Option<&MockConveyor> {
        self.conveyor.as_ref()
    }

    fn record(&mut self, call: MockCall) {
        trace!("[MockManipulator] {:?}", call);
        self.calls.push(call);
    }

    /// 注入的失败优先，其次检查连接
    fn ensure_connected(&self) -> Result<(), DriverError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if !self.connected {
            return Err(DriverError::NotConnected);
        }
        Ok(())
    }

    fn ensure_control(&self) -> Result<(), DriverError> {
        self.ensure_connected()?;
        if !self.has_control {
            return Err(DriverError::NoControl);
        }
        Ok(())
    }

    fn ensure_servo(&self, expected: ServoControlType) -> Result<(), DriverError> {
        self.ensure_control()?;
        match self.servo {
            Some(mode) if mode == expected => Ok(()),
            Some(mode) => Err(DriverError::Rejected(format!(
                "servo mode is {}, expected {}",
                mode, expected
            ))),
            None => Err(DriverError::Rejected(format!(
                "servo mode not set, expected {}",
                expected
            ))),
        }
    }
}

impl Manipulator for MockManipulator {
    type Conveyor = MockConveyor;

    fn connect(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::Connect);
        if let Some(reason) = &self.refuse_connection {
            return Err(DriverError::ConnectionRefused(reason.clone()));
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.connected = true;
        Ok(())
    }

    fn get_control(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::GetControl);
        self.ensure_connected()?;
        if let Some(reason) = &self.deny_control {
            return Err(DriverError::ControlDenied(reason.clone()));
        }
        self.has_control = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::Disconnect);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.connected = false;
        self.has_control = false;
        self.servo = None;
        Ok(())
    }

    fn move_to_angles(
        &mut self,
        joints: JointAngles,
        velocities: JointVelocities,
        velocity_factor: f64,
        acceleration_factor: f64,
        options: CallOptions,
    ) -> Result<(), DriverError> {
        self.record(MockCall::MoveToAngles {
            joints,
            velocities,
            velocity_factor,
            acceleration_factor,
            options,
        });
        self.ensure_control()?;
        self.joint_state.positions = joints;
        Ok(())
    }

    fn move_to_coordinates(
        &mut self,
        pose: Pose,
        velocity_scaling_factor: f64,
        acceleration_scaling_factor: f64,
        planner: Option<PlannerType>,
        options: CallOptions,
    ) -> Result<(), DriverError> {
        self.record(MockCall::MoveToCoordinates {
            pose,
            velocity_scaling_factor,
            acceleration_scaling_factor,
            planner,
            options,
        });
        self.ensure_control()?;
        self.pose = pose;
        Ok(())
    }

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
    ) -> Result<(), DriverError> {
        self.record(MockCall::ArcMotion {
            target,
            center,
            step,
            count_point_arc,
            max_velocity_scaling_factor,
            max_acceleration_scaling_factor,
            options,
        });
        self.ensure_control()?;
        self.pose = target;
        Ok(())
    }

    fn stop_movement(&mut self, timeout: Duration) -> Result<(), DriverError> {
        self.record(MockCall::StopMovement { timeout });
        self.ensure_connected()
    }

    fn nozzle_power(&mut self, on: bool) -> Result<(), DriverError> {
        self.record(MockCall::NozzlePower(on));
        self.ensure_control()?;
        self.nozzle_on = on;
        Ok(())
    }

    fn manage_gripper(
        &mut self,
        rotation: Option<f64>,
        gripper: Option<f64>,
    ) -> Result<(), DriverError> {
        self.record(MockCall::ManageGripper { rotation, gripper });
        self.ensure_control()?;
        if !self.nozzle_on {
            return Err(DriverError::Rejected("nozzle is not powered".to_string()));
        }
        Ok(())
    }

    fn set_servo_control_type(&mut self, servo_type: ServoControlType) -> Result<(), DriverError> {
        self.record(MockCall::SetServoControlType(servo_type));
        self.ensure_control()?;
        self.servo = Some(servo_type);
        Ok(())
    }

    fn set_servo_twist_mode(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::SetServoTwistMode);
        self.ensure_control()?;
        self.servo = Some(ServoControlType::Twist);
        Ok(())
    }

    fn set_servo_pose_mode(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::SetServoPoseMode);
        self.ensure_control()?;
        self.servo = Some(ServoControlType::Pose);
        Ok(())
    }

    fn set_servo_joint_jog_mode(&mut self) -> Result<(), DriverError> {
        self.record(MockCall::SetServoJointJogMode);
        self.ensure_control()?;
        self.servo = Some(ServoControlType::JointJog);
        Ok(())
    }

    fn stream_cartesian_velocities(
        &mut self,
        linear: LinearVelocity,
        angular: AngularVelocity,
    ) -> Result<(), DriverError> {
        self.record(MockCall::StreamCartesianVelocities { linear, angular });
        self.ensure_servo(ServoControlType::Twist)
    }

    fn stream_coordinates(&mut self, pose: Pose) -> Result<(), DriverError> {
        self.record(MockCall::StreamCoordinates(pose));
        self.ensure_servo(ServoControlType::Pose)?;
        self.pose = pose;
        Ok(())
    }

    fn stream_joint_angles(
        &mut self,
        joints: JointAngles,
        velocities: JointVelocities,
    ) -> Result<(), DriverError> {
        self.record(MockCall::StreamJointAngles { joints, velocities });
        self.ensure_servo(ServoControlType::JointJog)?;
        self.joint_state = JointState {
            positions: joints,
            velocities,
        };
        Ok(())
    }

    fn run_program(&mut self, name: &str) -> Result<(), DriverError> {
        self.record(MockCall::RunProgram(name.to_string()));
        self.ensure_control()
    }

    fn run_program_json(
        &mut self,
        name: &str,
        program: &serde_json::Value,
    ) -> Result<(), DriverError> {
        self.record(MockCall::RunProgramJson {
            name: name.to_string(),
            program: program.clone(),
        });
        self.ensure_control()
    }

    fn run_python_program(&mut self, code: &str) -> Result<(), DriverError> {
        self.record(MockCall::RunPythonProgram(code.to_string()));
        self.ensure_control()
    }

    fn get_joint_state(&mut self) -> Result<JointState, DriverError> {
        self.record(MockCall::GetJointState);
        self.ensure_connected()?;
        Ok(self.joint_state)
    }

    fn get_home_position(&mut self) -> Result<JointState, DriverError> {
        self.record(MockCall::GetHomePosition);
        self.ensure_connected()?;
        Ok(self.home)
    }

    fn get_cartesian_coordinates(&mut self) -> Result<Pose, DriverError> {
        self.record(MockCall::GetCartesianCoordinates);
        self.ensure_connected()?;
        Ok(self.pose)
    }

    fn write_gpio(
        &mut self,
        name: &str,
        level: GpioLevel,
        options: CallOptions,
    ) -> Result<(), DriverError> {
        self.record(MockCall::WriteGpio {
            name: name.to_string(),
            level,
            options,
        });
        self.ensure_connected()?;
        self.gpio.insert(name.to_string(), level);
        Ok(())
    }

    fn get_gpio_value(
        &mut self,
        name: &str,
        options: CallOptions,
    ) -> Result<GpioLevel, DriverError> {
        self.record(MockCall::GetGpioValue {
            name: name.to_string(),
            options,
        });
        self.ensure_connected()?;
        match self.gpio.get(name) {
            Some(level) => Ok(*level),
            // 与 SDK 一致：不抛错时未知引脚读为低电平
            None if options.throw_error => Err(DriverError::Rejected(format!(
                "unknown GPIO pin '{}'",
                name
            ))),
            None => Ok(GpioLevel::Low),
        }
    }

    fn play_audio(&mut self, file_name: &str, options: CallOptions) -> Result<(), DriverError> {
        self.record(MockCall::PlayAudio {
            file_name: file_name.to_string(),
            options,
        });
        self.ensure_connected()
    }

    fn conveyor(&mut self) -> Result<&mut MockConveyor, DriverError> {
        self.ensure_connected()?;
        self.conveyor.as_mut().ok_or(DriverError::NoConveyor)
    }
}

/// 模拟句柄工厂
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    refuse_open: Option<String>,
    refuse_connection: Option<String>,
    deny_control: Option<String>,
    without_conveyor: bool,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `open` 本身失败（如 SDK 构造句柄时参数被拒绝）
    pub fn refuse_open(mut self, reason: impl Into<String>) -> Self {
        self.refuse_open = Some(reason.into());
        self
    }

    /// `connect` 失败
    pub fn refuse_connection(mut self, reason: impl Into<String>) -> Self {
        self.refuse_connection = Some(reason.into());
        self
    }

    /// `get_control` 失败
    pub fn deny_control(mut self, reason: impl Into<String>) -> Self {
        self.deny_control = Some(reason.into());
        self
    }

    pub fn without_conveyor(mut self) -> Self {
        self.without_conveyor = true;
        self
    }
}

impl Connector for MockConnector {
    type Handle = MockManipulator;

    fn open(&self, credentials: &Credentials) -> Result<MockManipulator, DriverError> {
        if let Some(reason) = &self.refuse_open {
            return Err(DriverError::Sdk(reason.clone()));
        }

        let mut handle = MockManipulator {
            credentials: Some(credentials.clone()),
            refuse_connection: self.refuse_connection.clone(),
            deny_control: self.deny_control.clone(),
            ..MockManipulator::default()
        };
        if self.without_conveyor {
            handle = handle.without_conveyor();
        }
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CallOptions {
        CallOptions::new(Duration::from_secs(1), true)
    }

    #[test]
    fn test_commands_require_connection() {
        let mut arm = MockManipulator::new();
        let err = arm.run_program("edum/default").unwrap_err();
        assert_eq!(err, DriverError::NotConnected);
        // 调用仍然到达设备
        assert_eq!(arm.calls().len(), 1);
    }

    #[test]
    fn test_connect_then_control() {
        let mut arm = MockManipulator::new();
        assert_eq!(arm.get_control(), Err(DriverError::NotConnected));
        arm.connect().unwrap();
        assert_eq!(arm.nozzle_power(true), Err(DriverError::NoControl));
        arm.get_control().unwrap();
        arm.nozzle_power(true).unwrap();
        assert!(arm.nozzle_on());
    }

    #[test]
    fn test_move_updates_joint_state() {
        let mut arm = MockManipulator::connected();
        let joints = JointAngles::new(0.05, -0.35, -0.75);
        arm.move_to_angles(joints, JointVelocities::ZERO, 0.1, 0.1, options())
            .unwrap();
        assert_eq!(arm.get_joint_state().unwrap().positions, joints);
    }

    #[test]
    fn test_stream_requires_servo_mode() {
        let mut arm = MockManipulator::connected();
        let linear = LinearVelocity::new(0.02, 0.0, 0.0);
        let angular = AngularVelocity::new(0.0, 0.0, 0.01);

        let err = arm
            .stream_cartesian_velocities(linear, angular)
            .unwrap_err();
        assert!(matches!(err, DriverError::Rejected(_)));

        arm.set_servo_pose_mode().unwrap();
        assert!(arm.stream_cartesian_velocities(linear, angular).is_err());

        arm.set_servo_twist_mode().unwrap();
        assert!(arm.stream_cartesian_velocities(linear, angular).is_ok());
    }

    #[test]
    fn test_gripper_requires_nozzle_power() {
        let mut arm = MockManipulator::connected();
        assert!(arm.manage_gripper(Some(20.0), Some(10.0)).is_err());
        arm.nozzle_power(true).unwrap();
        assert!(arm.manage_gripper(Some(20.0), Some(10.0)).is_ok());
        assert!(arm.manage_gripper(None, Some(0.0)).is_ok());
    }

    #[test]
    fn test_gpio_unknown_pin_respects_throw_error() {
        let mut arm = MockManipulator::connected();
        let quiet = CallOptions::new(Duration::from_millis(500), false);
        assert_eq!(
            arm.get_gpio_value("/dev/gpiochip4/e1_pin", quiet),
            Ok(GpioLevel::Low)
        );
        assert!(arm.get_gpio_value("/dev/gpiochip4/e1_pin", options()).is_err());

        arm.write_gpio("/dev/gpiochip4/e1_pin", GpioLevel::High, quiet)
            .unwrap();
        assert_eq!(
            arm.get_gpio_value("/dev/gpiochip4/e1_pin", options()),
            Ok(GpioLevel::High)
        );
    }

    #[test]
    fn test_injected_failure() {
        let mut arm = MockManipulator::connected();
        arm.fail_with(DriverError::Timeout { timeout_ms: 60_000 });
        assert_eq!(
            arm.stop_movement(Duration::from_secs(5)),
            Err(DriverError::Timeout { timeout_ms: 60_000 })
        );
        assert!(arm.conveyor().is_err());
        arm.clear_failure();
        assert!(arm.stop_movement(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_conveyor_records_calls() {
        let mut arm = MockManipulator::connected();
        let conveyor = arm.conveyor().unwrap();
        conveyor.set_speed_motors(30).unwrap();
        conveyor.set_led_color(Rgb::new(0, 255, 0)).unwrap();
        let data = conveyor.get_sensors_data(true).unwrap();
        assert_eq!(data.as_json().and_then(|v| v["speed"].as_u64()), Some(30));

        let state = arm.conveyor_state().unwrap();
        assert_eq!(
            state.calls()[..2],
            [
                ConveyorCall::SetSpeedMotors(30),
                ConveyorCall::SetLedColor(Rgb::new(0, 255, 0))
            ]
        );
    }

    #[test]
    fn test_no_conveyor() {
        let mut arm = MockManipulator::connected().without_conveyor();
        assert!(matches!(arm.conveyor(), Err(DriverError::NoConveyor)));
    }

    #[test]
    fn test_connector_passes_credentials() {
        let creds = Credentials::new("192.168.88.182", "my_client", "13", "14");
        let arm = MockConnector::new().open(&creds).unwrap();
        assert_eq!(arm.credentials(), Some(&creds));
        assert!(!arm.is_connected());
    }

    #[test]
    fn test_connector_deny_control() {
        let creds = Credentials::new("h", "c", "l", "p");
        let mut arm = MockConnector::new()
            .deny_control("held by another client")
            .open(&creds)
            .unwrap();
        arm.connect().unwrap();
        assert!(matches!(
            arm.get_control(),
            Err(DriverError::ControlDenied(_))
        ));
    }
}
