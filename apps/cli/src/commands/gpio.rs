//! GPIO 命令

use crate::modes::oneshot::OneShotMode;
use anyhow::Result;
use clap::{Args, Subcommand};
use medu_sdk::client::gpio::DEFAULT_GPIO_TIMEOUT;
use medu_sdk::types::CallOptions;

/// 透传给设备的选项
#[derive(Args, Debug, Clone)]
pub struct GpioOptions {
    /// 超时（秒）
    #[arg(long, default_value_t = DEFAULT_GPIO_TIMEOUT.as_secs_f64())]
    pub timeout: f64,

    /// 设备端失败时报错
    #[arg(long)]
    pub throw_error: bool,
}

impl GpioOptions {
    pub fn to_call_options(&self) -> Result<CallOptions> {
        Ok(CallOptions::from_secs_f64(self.timeout, self.throw_error)?)
    }
}

/// GPIO 命令
#[derive(Subcommand, Debug)]
pub enum GpioCommand {
    /// 读取引脚电平
    Read {
        /// 引脚名（如 /dev/gpiochip4/e1_pin）
        name: String,

        #[command(flatten)]
        options: GpioOptions,
    },

    /// 设置引脚电平（0 或 1）
    Write {
        /// 引脚名
        name: String,

        /// 电平
        #[arg(allow_negative_numbers = true)]
        value: i64,

        #[command(flatten)]
        options: GpioOptions,
    },
}

impl GpioCommand {
    pub fn execute(self, mode: &OneShotMode) -> Result<()> {
        match self {
            GpioCommand::Read { name, options } => {
                let options = options.to_call_options()?;
                let level = mode.run(|medu| medu.get_gpio_value_with(&name, options))?;
                println!("{}", level);
            },
            GpioCommand::Write {
                name,
                value,
                options,
            } => {
                let options = options.to_call_options()?;
                mode.run(|medu| medu.write_gpio_with(&name, value, options))?;
                println!("✅ {} = {}", name, value);
            },
        }
        Ok(())
    }
}
