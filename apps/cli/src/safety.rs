//! 安全检查模块
//!
//! 关节运动执行前的确认机制

use anyhow::Result;
use medu_sdk::types::JointAngles;

/// 超过该角度（度）的关节运动需要确认
pub const CONFIRMATION_THRESHOLD_DEG: f64 = 10.0;

/// 安全检查器
pub struct SafetyChecker {
    threshold_deg: f64,
}

impl SafetyChecker {
    /// 创建新的安全检查器
    pub fn new() -> Self {
        Self {
            threshold_deg: CONFIRMATION_THRESHOLD_DEG,
        }
    }

    /// 最大关节角（度）
    pub fn max_angle_degrees(joints: &JointAngles) -> f64 {
        joints
            .to_array()
            .iter()
            .map(|&p| p.abs())
            .fold(0.0_f64, f64::max)
            .to_degrees()
    }

    /// 检查是否需要用户确认
    pub fn requires_confirmation(&self, joints: &JointAngles) -> bool {
        Self::max_angle_degrees(joints) > self.threshold_deg
    }

    /// 显示确认提示
    pub fn show_confirmation_prompt(&self, joints: &JointAngles) -> Result<bool> {
        println!("⚠️  大幅移动检测");
        println!("  最大角度: {:.1}°", Self::max_angle_degrees(joints));

        // ✅ 使用 inquire 提供更好的交互体验
        let confirmed = inquire::Confirm::new("确定要继续吗？")
            .with_default(false) // 默认为 No（安全优先）
            .prompt()
            .map_err(|e| anyhow::anyhow!("用户交互失败: {}", e))?;

        Ok(confirmed)
    }
}

impl Default for SafetyChecker {
    fn default() -> Self {
        Self::new()
    }
}
