//! 音频播放

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{CallOptions, check_non_empty};
use std::time::Duration;

/// 音频播放默认超时
pub const DEFAULT_AUDIO_TIMEOUT: Duration = Duration::from_secs(60);

impl<M: Manipulator> Medu<M> {
    /// 播放控制器上的音频文件（默认 60 秒超时，设备失败时报错）
    pub fn play_audio(&mut self, file_name: &str) -> CallResult<()> {
        self.play_audio_with(file_name, CallOptions::new(DEFAULT_AUDIO_TIMEOUT, true))
    }

    pub fn play_audio_with(&mut self, file_name: &str, options: CallOptions) -> CallResult<()> {
        self.call(
            "play_audio",
            |_| check_non_empty("file_name", file_name),
            |arm, file_name| arm.play_audio(file_name, options),
        )
    }
}
