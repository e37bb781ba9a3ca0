//! 运动命令
//!
//! 关节空间运动、笛卡尔空间运动、圆弧运动和停止。
//!
//! 每个命令有一个请求结构体，构造函数只接收目标，其余参数取设备默认值，
//! 通过链式方法修改：
//!
//! ```rust
//! use medu_client::motion::MoveToAngles;
//! use medu_types::JointAngles;
//!
//! let request = MoveToAngles::new(JointAngles::new(0.05, -0.35, -0.75))
//!     .velocity_factor(0.2)
//!     .acceleration_factor(0.2);
//! assert_eq!(request.options.timeout.as_secs(), 60);
//! ```

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{
    CallOptions, ContractLimits, JointAngles, JointVelocities, Orientation, PlannerType, Pose,
    Position, ValidationError, check_positive,
};
use std::time::Duration;

/// 关节运动默认超时
pub const DEFAULT_JOINT_MOVE_TIMEOUT: Duration = Duration::from_secs(60);
/// 笛卡尔运动默认超时
pub const DEFAULT_CARTESIAN_MOVE_TIMEOUT: Duration = Duration::from_secs(30);
/// 圆弧运动默认超时
pub const DEFAULT_ARC_TIMEOUT: Duration = Duration::from_secs(60);
/// 停止命令默认超时
pub const DEFAULT_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// 默认速度/加速度因子
pub const DEFAULT_SCALING: f64 = 0.1;
/// 圆弧运动默认最大速度/加速度因子
pub const DEFAULT_ARC_SCALING: f64 = 0.5;
/// 圆弧插值默认步长（m）
pub const DEFAULT_ARC_STEP: f64 = 0.05;
/// 圆弧默认插值点数
pub const DEFAULT_ARC_POINTS: u32 = 50;

/// 关节空间运动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveToAngles {
    pub joints: JointAngles,
    pub velocities: JointVelocities,
    pub velocity_factor: f64,
    pub acceleration_factor: f64,
    pub options: CallOptions,
}

impl MoveToAngles {
    pub fn new(joints: JointAngles) -> Self {
        Self {
            joints,
            velocities: JointVelocities::ZERO,
            velocity_factor: DEFAULT_SCALING,
            acceleration_factor: DEFAULT_SCALING,
            options: CallOptions::new(DEFAULT_JOINT_MOVE_TIMEOUT, true),
        }
    }

    pub fn velocities(mut self, velocities: JointVelocities) -> Self {
        self.velocities = velocities;
        self
    }

    pub fn velocity_factor(mut self, factor: f64) -> Self {
        self.velocity_factor = factor;
        self
    }

    pub fn acceleration_factor(mut self, factor: f64) -> Self {
        self.acceleration_factor = factor;
        self
    }

    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// 按参数顺序检查：关节角、关节速度、速度因子、加速度因子
    pub fn validate(&self, limits: &ContractLimits) -> Result<(), ValidationError> {
        self.joints.check(&limits.joint)?;
        self.velocities.check()?;
        limits
            .scaling
            .check_number("velocity_factor", self.velocity_factor)?;
        limits
            .scaling
            .check_number("acceleration_factor", self.acceleration_factor)?;
        Ok(())
    }
}

impl From<JointAngles> for MoveToAngles {
    fn from(joints: JointAngles) -> Self {
        Self::new(joints)
    }
}

/// 笛卡尔空间运动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveToCoordinates {
    pub pose: Pose,
    pub velocity_scaling_factor: f64,
    pub acceleration_scaling_factor: f64,
    /// `None` 使用 SDK 默认规划器
    pub planner: Option<PlannerType>,
    pub options: CallOptions,
}

impl MoveToCoordinates {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            velocity_scaling_factor: DEFAULT_SCALING,
            acceleration_scaling_factor: DEFAULT_SCALING,
            planner: None,
            options: CallOptions::new(DEFAULT_CARTESIAN_MOVE_TIMEOUT, true),
        }
    }

    pub fn velocity_scaling_factor(mut self, factor: f64) -> Self {
        self.velocity_scaling_factor = factor;
        self
    }

    pub fn acceleration_scaling_factor(mut self, factor: f64) -> Self {
        self.acceleration_scaling_factor = factor;
        self
    }

    pub fn planner(mut self, planner: PlannerType) -> Self {
        self.planner = Some(planner);
        self
    }

    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(&self, limits: &ContractLimits) -> Result<(), ValidationError> {
        self.pose.position.check("", &limits.coordinate)?;
        self.pose.orientation.check(&limits.orientation)?;
        limits
            .scaling
            .check_number("velocity_scaling_factor", self.velocity_scaling_factor)?;
        limits.scaling.check_number(
            "acceleration_scaling_factor",
            self.acceleration_scaling_factor,
        )?;
        Ok(())
    }
}

impl From<Pose> for MoveToCoordinates {
    fn from(pose: Pose) -> Self {
        Self::new(pose)
    }
}

/// 圆弧运动
///
/// 目标点和圆心只给位置，姿态固定为单位四元数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcMotion {
    pub target: Position,
    pub center: Position,
    /// 插值步长，必须 > 0
    pub step: f64,
    /// 插值点数，必须 > 0
    pub count_point_arc: i64,
    pub max_velocity_scaling_factor: f64,
    pub max_acceleration_scaling_factor: f64,
    pub options: CallOptions,
}

impl ArcMotion {
    pub fn new(target: Position, center: Position) -> Self {
        Self {
            target,
            center,
            step: DEFAULT_ARC_STEP,
            count_point_arc: i64::from(DEFAULT_ARC_POINTS),
            max_velocity_scaling_factor: DEFAULT_ARC_SCALING,
            max_acceleration_scaling_factor: DEFAULT_ARC_SCALING,
            options: CallOptions::new(DEFAULT_ARC_TIMEOUT, true),
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn count_point_arc(mut self, count: i64) -> Self {
        self.count_point_arc = count;
        self
    }

    pub fn max_velocity_scaling_factor(mut self, factor: f64) -> Self {
        self.max_velocity_scaling_factor = factor;
        self
    }

    pub fn max_acceleration_scaling_factor(mut self, factor: f64) -> Self {
        self.max_acceleration_scaling_factor = factor;
        self
    }

    pub fn options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// 检查并返回设备侧的插值点数
    pub fn validate(&self, limits: &ContractLimits) -> Result<u32, ValidationError> {
        self.target.check("target", &limits.coordinate)?;
        self.center.check("center", &limits.coordinate)?;
        check_positive("step", self.step)?;

        if self.count_point_arc <= 0 {
            return Err(ValidationError::not_positive(
                "count_point_arc",
                self.count_point_arc,
            ));
        }
        let count = u32::try_from(self.count_point_arc).map_err(|_| {
            ValidationError::out_of_range(
                "count_point_arc",
                self.count_point_arc,
                1,
                i64::from(u32::MAX),
            )
        })?;

        limits.scaling.check_number(
            "max_velocity_scaling_factor",
            self.max_velocity_scaling_factor,
        )?;
        limits.scaling.check_number(
            "max_acceleration_scaling_factor",
            self.max_acceleration_scaling_factor,
        )?;
        Ok(count)
    }
}

impl<M: Manipulator> Medu<M> {
    /// 关节空间运动
    pub fn move_to_angles(&mut self, request: impl Into<MoveToAngles>) -> CallResult<()> {
        let request = request.into();
        self.call(
            "move_to_angles",
            |limits| request.validate(limits),
            |arm, ()| {
                arm.move_to_angles(
                    request.joints,
                    request.velocities,
                    request.velocity_factor,
                    request.acceleration_factor,
                    request.options,
                )
            },
        )
    }

    /// 笛卡尔空间运动
    pub fn move_to_coordinates(
        &mut self,
        request: impl Into<MoveToCoordinates>,
    ) -> CallResult<()> {
        let request = request.into();
        self.call(
            "move_to_coordinates",
            |limits| request.validate(limits),
            |arm, ()| {
                arm.move_to_coordinates(
                    request.pose,
                    request.velocity_scaling_factor,
                    request.acceleration_scaling_factor,
                    request.planner,
                    request.options,
                )
            },
        )
    }

    /// 圆弧运动
    pub fn arc_motion(&mut self, request: ArcMotion) -> CallResult<()> {
        self.call(
            "arc_motion",
            |limits| request.validate(limits),
            |arm, count| {
                arm.arc_motion(
                    Pose::new(request.target, Orientation::IDENTITY),
                    Pose::new(request.center, Orientation::IDENTITY),
                    request.step,
                    count,
                    request.max_velocity_scaling_factor,
                    request.max_acceleration_scaling_factor,
                    request.options,
                )
            },
        )
    }

    /// 停止当前运动
    pub fn stop_movement(&mut self, timeout: Duration) -> CallResult<()> {
        self.call("stop_movement", |_| Ok(()), |arm, ()| arm.stop_movement(timeout))
    }

    /// 以默认超时停止当前运动
    pub fn stop(&mut self) -> CallResult<()> {
        self.stop_movement(DEFAULT_STOP_TIMEOUT)
    }
}
