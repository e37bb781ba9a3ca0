//! MGbot 传送带命令

use crate::modes::oneshot::OneShotMode;
use anyhow::Result;
use clap::Subcommand;

/// 传送带命令
#[derive(Subcommand, Debug)]
pub enum ConveyorCommand {
    /// 设置电机速度（默认范围 0..=100）
    Speed {
        #[arg(allow_negative_numbers = true)]
        speed: i64,
    },

    /// 设置舵机角度
    Servo {
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },

    /// 设置 LED 颜色（每个通道 0..=255）
    Led {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// 在显示屏上显示文本
    Text { text: String },

    /// 蜂鸣器音调（默认范围 1..=15）
    Buzz {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },

    /// 读取传感器数据
    Sensors {
        /// 输出设备原始文本而不是 JSON
        #[arg(long)]
        raw: bool,
    },
}

impl ConveyorCommand {
    pub fn execute(self, mode: &OneShotMode) -> Result<()> {
        match self {
            ConveyorCommand::Speed { speed } => {
                mode.run(|medu| medu.conveyor_set_speed_motors(speed))?;
                println!("✅ 传送带速度: {}", speed);
            },
            ConveyorCommand::Servo { angle } => {
                mode.run(|medu| medu.conveyor_set_servo_angle(angle))?;
                println!("✅ 舵机角度: {}", angle);
            },
            ConveyorCommand::Led { r, g, b } => {
                mode.run(|medu| medu.conveyor_set_led_color(r, g, b))?;
                println!("✅ LED: ({}, {}, {})", r, g, b);
            },
            ConveyorCommand::Text { text } => {
                mode.run(|medu| medu.conveyor_display_text(&text))?;
                println!("✅ 显示: {}", text);
            },
            ConveyorCommand::Buzz { level } => {
                mode.run(|medu| medu.conveyor_set_buzz_tone(level))?;
                println!("✅ 蜂鸣器: {}", level);
            },
            ConveyorCommand::Sensors { raw } => {
                let data = mode.run(|medu| medu.conveyor_get_sensors_data(!raw))?;
                match data.as_json() {
                    Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
                    None => println!("{}", data),
                }
            },
        }
        Ok(())
    }
}
