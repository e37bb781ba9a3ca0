//! 移动命令
//!
//! 关节运动、笛卡尔运动和圆弧运动，关节运动包含确认机制

use crate::modes::oneshot::OneShotMode;
use crate::safety::SafetyChecker;
use crate::validation::{parse_joints, parse_pose, parse_position};
use anyhow::{Result, bail};
use clap::Args;
use medu_sdk::prelude::*;
use medu_sdk::types::timeout_from_secs;

/// 移动命令参数
#[derive(Args, Debug, Default)]
pub struct MoveCommand {
    /// 目标关节角（弧度），逗号分隔：base,shoulder,boom
    #[arg(short, long, allow_hyphen_values = true)]
    pub joints: Option<String>,

    /// 目标位姿：x,y,z 或 x,y,z,qx,qy,qz,qw
    #[arg(long, allow_hyphen_values = true)]
    pub pose: Option<String>,

    /// 圆弧终点：x,y,z（需要 --center）
    #[arg(long, allow_hyphen_values = true, requires = "center")]
    pub arc: Option<String>,

    /// 圆弧圆心：x,y,z
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<String>,

    /// 圆弧插值步长（米）
    #[arg(long)]
    pub step: Option<f64>,

    /// 圆弧插值点数
    #[arg(long)]
    pub points: Option<i64>,

    /// 速度缩放因子 [0, 1]
    #[arg(long)]
    pub velocity: Option<f64>,

    /// 加速度缩放因子 [0, 1]
    #[arg(long)]
    pub acceleration: Option<f64>,

    /// 笛卡尔规划器（lin, ptp）
    #[arg(long)]
    pub planner: Option<PlannerType>,

    /// 超时（秒）
    #[arg(long)]
    pub timeout: Option<f64>,

    /// 跳过确认提示
    #[arg(long)]
    pub force: bool,
}

impl MoveCommand {
    /// 执行移动
    pub fn execute(&self, mode: &OneShotMode) -> Result<()> {
        match (&self.joints, &self.pose, &self.arc) {
            (Some(joints), None, None) => self.move_joints(mode, joints),
            (None, Some(pose), None) => self.move_pose(mode, pose),
            (None, None, Some(target)) => self.move_arc(mode, target),
            (None, None, None) => bail!("未指定目标，请使用 --joints、--pose 或 --arc"),
            _ => bail!("--joints、--pose 和 --arc 只能指定一个"),
        }
    }

    /// 检查是否需要确认
    pub fn requires_confirmation(&self, joints: &JointAngles) -> bool {
        !self.force && SafetyChecker::new().requires_confirmation(joints)
    }

    fn options(&self, default: CallOptions) -> Result<CallOptions> {
        match self.timeout {
            Some(seconds) => Ok(default.with_timeout(timeout_from_secs("timeout", seconds)?)),
            None => Ok(default),
        }
    }

    /// 构造关节运动请求
    pub fn joint_request(&self, joints: JointAngles) -> Result<MoveToAngles> {
        let mut request = MoveToAngles::new(joints);
        if let Some(v) = self.velocity {
            request = request.velocity_factor(v);
        }
        if let Some(a) = self.acceleration {
            request = request.acceleration_factor(a);
        }
        let options = self.options(request.options)?;
        Ok(request.options(options))
    }

    /// 构造笛卡尔运动请求
    pub fn pose_request(&self, pose: Pose) -> Result<MoveToCoordinates> {
        let mut request = MoveToCoordinates::new(pose);
        if let Some(v) = self.velocity {
            request = request.velocity_scaling_factor(v);
        }
        if let Some(a) = self.acceleration {
            request = request.acceleration_scaling_factor(a);
        }
        if let Some(planner) = self.planner {
            request = request.planner(planner);
        }
        let options = self.options(request.options)?;
        Ok(request.options(options))
    }

    /// 构造圆弧运动请求
    pub fn arc_request(&self, target: Position, center: Position) -> Result<ArcMotion> {
        let mut request = ArcMotion::new(target, center);
        if let Some(step) = self.step {
            request = request.step(step);
        }
        if let Some(points) = self.points {
            request = request.count_point_arc(points);
        }
        if let Some(v) = self.velocity {
            request = request.max_velocity_scaling_factor(v);
        }
        if let Some(a) = self.acceleration {
            request = request.max_acceleration_scaling_factor(a);
        }
        let options = self.options(request.options)?;
        Ok(request.options(options))
    }

    fn move_joints(&self, mode: &OneShotMode, joints: &str) -> Result<()> {
        let joints = parse_joints(joints)?;
        let request = self.joint_request(joints)?;

        for (name, value) in joints.named() {
            println!("  {}: {:.3} rad ({:.1}°)", name, value, value.to_degrees());
        }

        if self.requires_confirmation(&joints)
            && !SafetyChecker::new().show_confirmation_prompt(&joints)?
        {
            println!("❌ 操作已取消");
            return Ok(());
        }

        println!("⏳ 正在移动到目标关节角...");
        mode.run(|medu| medu.move_to_angles(request))?;
        println!("✅ 移动完成");
        Ok(())
    }

    fn move_pose(&self, mode: &OneShotMode, pose: &str) -> Result<()> {
        let request = self.pose_request(parse_pose(pose)?)?;
        let p = request.pose.position;

        println!("⏳ 正在移动到 ({:.3}, {:.3}, {:.3}) m...", p.x, p.y, p.z);
        mode.run(|medu| medu.move_to_coordinates(request))?;
        println!("✅ 移动完成");
        Ok(())
    }

    fn move_arc(&self, mode: &OneShotMode, target: &str) -> Result<()> {
        let Some(center) = &self.center else {
            bail!("圆弧运动需要 --center");
        };
        let request = self.arc_request(parse_position(target)?, parse_position(center)?)?;

        println!("⏳ 正在执行圆弧运动...");
        mode.run(|medu| medu.arc_motion(request))?;
        println!("✅ 移动完成");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_joint_request_overrides() {
        let cmd = MoveCommand {
            velocity: Some(0.3),
            timeout: Some(5.0),
            ..MoveCommand::default()
        };
        let request = cmd.joint_request(JointAngles::ZERO).unwrap();
        assert_eq!(request.velocity_factor, 0.3);
        assert_eq!(request.acceleration_factor, 0.1);
        assert_eq!(request.options.timeout, Duration::from_secs(5));
        assert!(request.options.throw_error);
    }

    #[test]
    fn test_pose_request_planner() {
        let cmd = MoveCommand {
            planner: Some(PlannerType::Lin),
            ..MoveCommand::default()
        };
        let request = cmd
            .pose_request(Pose::from_position(Position::new(0.32, -0.004, 0.25)))
            .unwrap();
        assert_eq!(request.planner, Some(PlannerType::Lin));
        assert_eq!(request.options.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let cmd = MoveCommand {
            timeout: Some(-1.0),
            ..MoveCommand::default()
        };
        assert!(cmd.joint_request(JointAngles::ZERO).is_err());
    }

    #[test]
    fn test_force_skips_confirmation() {
        let large = JointAngles::new(0.05, -0.35, -0.75);
        assert!(MoveCommand::default().requires_confirmation(&large));

        let cmd = MoveCommand {
            force: true,
            ..MoveCommand::default()
        };
        assert!(!cmd.requires_confirmation(&large));
    }

    #[test]
    fn test_requires_exactly_one_target() {
        let dir = tempfile::tempdir().unwrap();
        let mode = OneShotMode::new(
            Some(dir.path().join("config.toml")),
            crate::modes::oneshot::ConnectionArgs::default(),
        )
        .unwrap();

        assert!(MoveCommand::default().execute(&mode).is_err());

        let cmd = MoveCommand {
            joints: Some("0,0,0".into()),
            pose: Some("0.2,0,0.2".into()),
            ..MoveCommand::default()
        };
        assert!(cmd.execute(&mode).is_err());
    }
}
