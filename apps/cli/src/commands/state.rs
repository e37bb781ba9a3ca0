//! 状态查询命令
//!
//! 读取关节状态、home 位置和末端位姿

use crate::modes::oneshot::OneShotMode;
use anyhow::Result;
use clap::Args;
use medu_sdk::types::{JointState, Pose};
use serde_json::json;

/// 状态查询参数
#[derive(Args, Debug)]
pub struct StateCommand {
    /// 以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

/// 一次查询的结果
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub joints: JointState,
    pub home: JointState,
    pub pose: Pose,
}

impl StateCommand {
    pub fn execute(&self, mode: &OneShotMode) -> Result<()> {
        let snapshot = mode.run(|medu| {
            Ok(Snapshot {
                joints: medu.get_joint_state()?,
                home: medu.get_home_position()?,
                pose: medu.get_cartesian_coordinates()?,
            })
        })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&to_json(&snapshot))?);
        } else {
            print_joint_state("关节状态", &snapshot.joints);
            print_joint_state("Home 位置", &snapshot.home);
            let p = snapshot.pose.position;
            let o = snapshot.pose.orientation;
            println!("末端位姿:");
            println!("  位置: ({:.4}, {:.4}, {:.4}) m", p.x, p.y, p.z);
            println!("  姿态: ({:.4}, {:.4}, {:.4}, {:.4})", o.x, o.y, o.z, o.w);
        }

        Ok(())
    }
}

fn print_joint_state(title: &str, state: &JointState) {
    println!("{}:", title);
    for ((name, position), (_, velocity)) in
        state.positions.named().into_iter().zip(state.velocities.named())
    {
        println!(
            "  {:<8} {:>8.3} rad ({:>6.1}°)  {:>7.3} rad/s",
            name,
            position,
            position.to_degrees(),
            velocity
        );
    }
}

fn to_json(snapshot: &Snapshot) -> serde_json::Value {
    json!({
        "joint_state": snapshot.joints,
        "home_position": snapshot.home,
        "cartesian": snapshot.pose,
    })
}
