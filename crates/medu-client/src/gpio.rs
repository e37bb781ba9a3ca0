//! GPIO 读写
//!
//! 引脚名是控制器上的设备路径，如 `/dev/gpiochip4/e1_pin`。
//! 默认超时 0.5 秒，`throw_error = false`。

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{CallOptions, GpioLevel, check_non_empty};
use std::time::Duration;

/// GPIO 默认超时
pub const DEFAULT_GPIO_TIMEOUT: Duration = Duration::from_millis(500);

/// GPIO 默认调用选项
pub const DEFAULT_GPIO_OPTIONS: CallOptions = CallOptions::new(DEFAULT_GPIO_TIMEOUT, false);

impl<M: Manipulator> Medu<M> {
    /// 写 GPIO，`value` 只能是 0 或 1
    pub fn write_gpio(&mut self, name: &str, value: i64) -> CallResult<()> {
        self.write_gpio_with(name, value, DEFAULT_GPIO_OPTIONS)
    }

    pub fn write_gpio_with(
        &mut self,
        name: &str,
        value: i64,
        options: CallOptions,
    ) -> CallResult<()> {
        self.call(
            "write_gpio",
            |_| {
                let name = check_non_empty("name", name)?;
                Ok((name, GpioLevel::from_value("value", value)?))
            },
            |arm, (name, level)| arm.write_gpio(name, level, options),
        )
    }

    /// 读 GPIO
    pub fn get_gpio_value(&mut self, name: &str) -> CallResult<GpioLevel> {
        self.get_gpio_value_with(name, DEFAULT_GPIO_OPTIONS)
    }

    pub fn get_gpio_value_with(
        &mut self,
        name: &str,
        options: CallOptions,
    ) -> CallResult<GpioLevel> {
        self.call(
            "get_gpio_value",
            |_| check_non_empty("name", name),
            |arm, name| arm.get_gpio_value(name, options),
        )
    }
}
