//! 冒烟测试命令
//!
//! 在一次连接中依次调用所有操作，逐步报告结果。任何一步失败时
//! 继续执行剩余步骤，最后以非零状态退出。

use crate::modes::oneshot::OneShotMode;
use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use medu_sdk::prelude::*;
use serde_json::json;
use std::time::Duration;

/// 测试范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Suite {
    /// 机械臂
    Arm,
    /// 传送带
    Conveyor,
    /// 全部
    #[default]
    All,
}

/// 冒烟测试参数
#[derive(Args, Debug)]
pub struct SmokeCommand {
    /// 测试范围
    #[arg(long, value_enum, default_value_t = Suite::All)]
    pub suite: Suite,
}

/// 单个测试步骤
pub struct Step<M: Manipulator> {
    pub name: &'static str,
    pub run: fn(&mut Medu<M>) -> CallResult<()>,
}

impl<M: Manipulator> Step<M> {
    const fn new(name: &'static str, run: fn(&mut Medu<M>) -> CallResult<()>) -> Self {
        Self { name, run }
    }
}

/// 测试结果
#[derive(Debug, Default)]
pub struct SmokeReport {
    pub passed: Vec<&'static str>,
    pub failed: Vec<(&'static str, CallError)>,
}

impl SmokeReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 机械臂步骤
pub fn arm_steps<M: Manipulator>() -> Vec<Step<M>> {
    vec![
        Step::new("move_to_angles", |m| {
            m.move_to_angles(
                MoveToAngles::new(JointAngles::new(0.05, -0.35, -0.75))
                    .velocity_factor(0.2)
                    .acceleration_factor(0.2),
            )
        }),
        Step::new("move_to_coordinates", |m| {
            m.move_to_coordinates(
                MoveToCoordinates::new(Pose::from_position(Position::new(0.32, -0.004, 0.25)))
                    .planner(PlannerType::Lin),
            )
        }),
        Step::new("arc_motion", |m| {
            m.arc_motion(
                ArcMotion::new(Position::new(0.25, -0.05, 0.20), Position::new(0.25, 0.0, 0.20))
                    .step(0.02)
                    .count_point_arc(30)
                    .max_velocity_scaling_factor(0.3)
                    .max_acceleration_scaling_factor(0.3),
            )
        }),
        Step::new("nozzle_power(on)", |m| m.nozzle_power(true)),
        Step::new("manage_gripper(20, 10)", |m| {
            m.manage_gripper(Some(20.0), Some(10.0))
        }),
        Step::new("manage_gripper(-, 0)", |m| m.manage_gripper(None, Some(0.0))),
        Step::new("nozzle_power(off)", |m| m.nozzle_power(false)),
        Step::new("set_servo_control_type", |m| {
            m.set_servo_control_type(ServoControlType::Twist)
        }),
        Step::new("stream_cartesian_velocities", |m| {
            m.stream_cartesian_velocities(
                LinearVelocity::new(0.02, 0.0, 0.0),
                AngularVelocity::new(0.0, 0.0, 0.01),
            )
        }),
        Step::new("set_servo_pose_mode", |m| m.set_servo_pose_mode()),
        Step::new("stream_coordinates", |m| {
            m.stream_coordinates(Pose::from_position(Position::new(0.27, 0.0, 0.15)))
        }),
        Step::new("set_servo_joint_jog_mode", |m| m.set_servo_joint_jog_mode()),
        Step::new("stream_joint_angles", |m| {
            m.stream_joint_angles(
                JointAngles::new(0.5, 1.0, 0.8),
                JointVelocities::new(0.2, 0.1, 0.15),
            )
        }),
        Step::new("set_servo_twist_mode", |m| m.set_servo_twist_mode()),
        Step::new("run_program", |m| m.run_program("edum/default")),
        Step::new("run_program_json", |m| {
            let program = json!({
                "Root": [{
                    "Move": {
                        "content": [{ "Point": { "positions": [0.3, -0.3, -0.4], "time": 0.5 } }],
                        "type": "Simple"
                    }
                }]
            });
            m.run_program_json("program_1", &program)
        }),
        Step::new("run_python_program", |m| {
            m.run_python_program("print('Hello from MEdu!')")
        }),
        Step::new("stop_movement", |m| m.stop()),
        Step::new("get_joint_state", |m| m.get_joint_state().map(drop)),
        Step::new("get_home_position", |m| m.get_home_position().map(drop)),
        Step::new("get_cartesian_coordinates", |m| {
            m.get_cartesian_coordinates().map(drop)
        }),
        Step::new("write_gpio(1)", |m| m.write_gpio("/dev/gpiochip4/e1_pin", 1)),
        Step::new("write_gpio(0)", |m| m.write_gpio("/dev/gpiochip4/e1_pin", 0)),
        Step::new("get_gpio_value", |m| {
            m.get_gpio_value("/dev/gpiochip4/e1_pin").map(drop)
        }),
        Step::new("play_audio", |m| {
            m.play_audio_with(
                "start.wav",
                CallOptions::new(Duration::from_secs(10), false),
            )
        }),
    ]
}

/// 传送带步骤
pub fn conveyor_steps<M: Manipulator>() -> Vec<Step<M>> {
    vec![
        Step::new("conveyor_display_text", |m| m.conveyor_display_text("TEST LENTA")),
        Step::new("conveyor_set_led_color", |m| m.conveyor_set_led_color(0, 255, 0)),
        Step::new("conveyor_set_speed_motors(30)", |m| m.conveyor_set_speed_motors(30)),
        Step::new("conveyor_set_speed_motors(60)", |m| m.conveyor_set_speed_motors(60)),
        Step::new("conveyor_set_speed_motors(0)", |m| m.conveyor_set_speed_motors(0)),
        Step::new("conveyor_set_servo_angle", |m| m.conveyor_set_servo_angle(45.0)),
        Step::new("conveyor_set_buzz_tone", |m| m.conveyor_set_buzz_tone(5)),
        Step::new("conveyor_get_sensors_data", |m| {
            m.conveyor_get_sensors_data(true).map(drop)
        }),
    ]
}

/// 按范围选择步骤
pub fn steps<M: Manipulator>(suite: Suite) -> Vec<Step<M>> {
    match suite {
        Suite::Arm => arm_steps(),
        Suite::Conveyor => conveyor_steps(),
        Suite::All => {
            let mut steps = arm_steps();
            steps.extend(conveyor_steps());
            steps
        },
    }
}

/// 依次执行步骤（失败不中断）
pub fn run_steps<M: Manipulator>(medu: &mut Medu<M>, steps: &[Step<M>]) -> SmokeReport {
    let mut report = SmokeReport::default();
    for step in steps {
        match (step.run)(medu) {
            Ok(()) => {
                println!("  ✅ {}", step.name);
                report.passed.push(step.name);
            },
            Err(e) => {
                println!("  ❌ {}: {}", step.name, e);
                report.failed.push((step.name, e));
            },
        }
    }
    report
}

impl SmokeCommand {
    pub fn execute(&self, mode: &OneShotMode) -> Result<()> {
        let mut medu = mode.connect()?;
        println!("✅ 已连接，开始冒烟测试 ({:?})", self.suite);

        let report = run_steps(&mut medu, &steps(self.suite));
        medu.disconnect()?;

        println!(
            "结果: {} 通过, {} 失败",
            report.passed.len(),
            report.failed.len()
        );
        if !report.is_success() {
            let names: Vec<&str> = report.failed.iter().map(|(name, _)| *name).collect();
            bail!("冒烟测试失败: {}", names.join(", "));
        }
        Ok(())
    }
}
