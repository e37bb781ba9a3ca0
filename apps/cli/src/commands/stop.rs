//! 停止命令

use crate::modes::oneshot::OneShotMode;
use anyhow::Result;
use clap::Args;
use medu_sdk::types::timeout_from_secs;

/// 停止命令参数
#[derive(Args, Debug)]
pub struct StopCommand {
    /// 等待停止完成的超时（秒）
    #[arg(long, default_value_t = 5.0)]
    pub timeout: f64,
}

impl StopCommand {
    /// 执行停止
    pub fn execute(&self, mode: &OneShotMode) -> Result<()> {
        let timeout = timeout_from_secs("timeout", self.timeout)?;

        println!("🛑 停止当前运动...");
        mode.run(|medu| medu.stop_movement(timeout))?;
        println!("✅ 已停止");

        Ok(())
    }
}
