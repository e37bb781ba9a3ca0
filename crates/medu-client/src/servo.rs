//! 伺服模式与流式控制
//!
//! 流式命令要求设备先切换到对应的伺服模式（由 SDK 检查）：
//!
//! | 命令 | 伺服模式 |
//! |---|---|
//! | `stream_cartesian_velocities` | `Twist` |
//! | `stream_coordinates` | `Pose` |
//! | `stream_joint_angles` | `JointJog` |

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{
    AngularVelocity, JointAngles, JointVelocities, LinearVelocity, Pose, ServoControlType,
};
use std::collections::BTreeMap;

impl<M: Manipulator> Medu<M> {
    pub fn set_servo_control_type(&mut self, servo_type: ServoControlType) -> CallResult<()> {
        self.call(
            "set_servo_control_type",
            |_| Ok(()),
            |arm, ()| arm.set_servo_control_type(servo_type),
        )
    }

    pub fn set_servo_twist_mode(&mut self) -> CallResult<()> {
        self.call(
            "set_servo_twist_mode",
            |_| Ok(()),
            |arm, ()| arm.set_servo_twist_mode(),
        )
    }

    pub fn set_servo_pose_mode(&mut self) -> CallResult<()> {
        self.call(
            "set_servo_pose_mode",
            |_| Ok(()),
            |arm, ()| arm.set_servo_pose_mode(),
        )
    }

    pub fn set_servo_joint_jog_mode(&mut self) -> CallResult<()> {
        self.call(
            "set_servo_joint_jog_mode",
            |_| Ok(()),
            |arm, ()| arm.set_servo_joint_jog_mode(),
        )
    }

    /// 流式发送末端速度
    pub fn stream_cartesian_velocities(
        &mut self,
        linear: LinearVelocity,
        angular: AngularVelocity,
    ) -> CallResult<()> {
        self.call(
            "stream_cartesian_velocities",
            |_| {
                linear.check("linear_vel")?;
                angular.check("angular_vel")
            },
            |arm, ()| arm.stream_cartesian_velocities(linear, angular),
        )
    }

    /// 流式发送末端速度（映射形式）
    ///
    /// `linear` 必须包含 `x`/`y`/`z`，`angular` 必须包含 `rx`/`ry`/`rz`，
    /// 多余的键被忽略。
    pub fn stream_cartesian_velocities_map(
        &mut self,
        linear: &BTreeMap<String, f64>,
        angular: &BTreeMap<String, f64>,
    ) -> CallResult<()> {
        self.call(
            "stream_cartesian_velocities",
            |_| {
                Ok((
                    LinearVelocity::from_map("linear_vel", linear)?,
                    AngularVelocity::from_map("angular_vel", angular)?,
                ))
            },
            |arm, (linear, angular)| arm.stream_cartesian_velocities(linear, angular),
        )
    }

    /// 流式发送目标位姿
    ///
    /// 只要求 7 个分量是有限值，不做范围检查。
    pub fn stream_coordinates(&mut self, pose: Pose) -> CallResult<()> {
        self.call(
            "stream_coordinates",
            |_| {
                pose.position.check_finite()?;
                pose.orientation.check_finite()
            },
            |arm, ()| arm.stream_coordinates(pose),
        )
    }

    /// 流式发送关节目标
    pub fn stream_joint_angles(
        &mut self,
        joints: JointAngles,
        velocities: JointVelocities,
    ) -> CallResult<()> {
        self.call(
            "stream_joint_angles",
            |limits| {
                joints.check(&limits.joint)?;
                velocities.check()
            },
            |arm, ()| arm.stream_joint_angles(joints, velocities),
        )
    }
}
