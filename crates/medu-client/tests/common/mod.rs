//! 测试辅助函数
//!
//! 提供 mock 会话、操作表和日志捕获。

#![allow(dead_code)]

use medu_client::{CallResult, Medu};
use medu_driver::mock::MockManipulator;
use medu_types::{
    AngularVelocity, ContractLimits, JointAngles, JointVelocities, LinearVelocity, Pose, Position,
    ServoControlType,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// 已连接、已获取控制权的 mock 会话
pub fn connected_session() -> Medu<MockManipulator> {
    Medu::from_handle(MockManipulator::connected(), ContractLimits::default())
}

/// 不持有句柄的会话
pub fn detached_session() -> Medu<MockManipulator> {
    Medu::detached(ContractLimits::default())
}

/// 操作名和一次参数合法的调用
pub type Operation = (&'static str, fn(&mut Medu<MockManipulator>) -> CallResult<()>);

/// 每个设备操作各一次合法调用
pub fn all_operations() -> Vec<Operation> {
    vec![
        ("move_to_angles", |m| {
            m.move_to_angles(JointAngles::new(0.05, -0.35, -0.75))
        }),
        ("move_to_coordinates", |m| {
            m.move_to_coordinates(Pose::from_position(Position::new(0.27, 0.0, 0.15)))
        }),
        ("arc_motion", |m| {
            m.arc_motion(medu_client::ArcMotion::new(
                Position::new(0.3, 0.1, 0.2),
                Position::new(0.25, 0.0, 0.2),
            ))
        }),
        ("stop_movement", |m| m.stop_movement(Duration::from_secs(5))),
        ("nozzle_power", |m| m.nozzle_power(true)),
        ("manage_gripper", |m| m.manage_gripper(Some(20.0), Some(10.0))),
        ("set_servo_control_type", |m| {
            m.set_servo_control_type(ServoControlType::Twist)
        }),
        ("set_servo_twist_mode", |m| m.set_servo_twist_mode()),
        ("set_servo_pose_mode", |m| m.set_servo_pose_mode()),
        ("set_servo_joint_jog_mode", |m| m.set_servo_joint_jog_mode()),
        ("stream_cartesian_velocities", |m| {
            m.stream_cartesian_velocities(
                LinearVelocity::new(0.01, 0.0, 0.0),
                AngularVelocity::new(0.0, 0.0, 0.0),
            )
        }),
        ("stream_coordinates", |m| {
            m.stream_coordinates(Pose::from_position(Position::new(0.27, 0.0, 0.15)))
        }),
        ("stream_joint_angles", |m| {
            m.stream_joint_angles(JointAngles::ZERO, JointVelocities::ZERO)
        }),
        ("run_program", |m| m.run_program("edum/default")),
        ("run_program_json", |m| {
            m.run_program_json("demo", &serde_json::json!({ "Root": [] }))
        }),
        ("run_python_program", |m| m.run_python_program("print(1)")),
        ("get_joint_state", |m| m.get_joint_state().map(|_| ())),
        ("get_home_position", |m| m.get_home_position().map(|_| ())),
        ("get_cartesian_coordinates", |m| {
            m.get_cartesian_coordinates().map(|_| ())
        }),
        ("write_gpio", |m| m.write_gpio("/dev/gpiochip4/e1_pin", 1)),
        ("get_gpio_value", |m| {
            m.get_gpio_value("/dev/gpiochip4/e1_pin").map(|_| ())
        }),
        ("play_audio", |m| m.play_audio("hello.mp3")),
        ("conveyor_set_speed_motors", |m| m.conveyor_set_speed_motors(50)),
        ("conveyor_set_servo_angle", |m| m.conveyor_set_servo_angle(45.0)),
        ("conveyor_set_led_color", |m| m.conveyor_set_led_color(0, 255, 0)),
        ("conveyor_display_text", |m| m.conveyor_display_text("Hello")),
        ("conveyor_set_buzz_tone", |m| m.conveyor_set_buzz_tone(5)),
        ("conveyor_get_sensors_data", |m| {
            m.conveyor_get_sensors_data(true).map(|_| ())
        }),
        ("disconnect", |m| m.disconnect()),
    ]
}

/// 内存日志缓冲
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// 在线程局部 subscriber 下运行 `f`，返回结果和捕获的日志
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
