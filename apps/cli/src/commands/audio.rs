//! 音频播放命令

use crate::modes::oneshot::OneShotMode;
use anyhow::Result;
use clap::Args;
use medu_sdk::client::audio::DEFAULT_AUDIO_TIMEOUT;
use medu_sdk::types::CallOptions;

/// 音频播放参数
#[derive(Args, Debug)]
pub struct AudioCommand {
    /// 控制器上的音频文件名（如 start.wav）
    pub file: String,

    /// 超时（秒）
    #[arg(long, default_value_t = DEFAULT_AUDIO_TIMEOUT.as_secs_f64())]
    pub timeout: f64,

    /// 设备端失败时不报错
    #[arg(long)]
    pub no_throw_error: bool,
}

impl AudioCommand {
    pub fn options(&self) -> Result<CallOptions> {
        Ok(CallOptions::from_secs_f64(self.timeout, !self.no_throw_error)?)
    }

    pub fn execute(&self, mode: &OneShotMode) -> Result<()> {
        let options = self.options()?;

        println!("🔊 播放 {}...", self.file);
        mode.run(|medu| medu.play_audio_with(&self.file, options))?;
        println!("✅ 播放完成");
        Ok(())
    }
}
