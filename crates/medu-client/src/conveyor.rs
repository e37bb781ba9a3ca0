//! MGbot 传送带
//!
//! 整型参数先按契约范围检查，再收窄为设备侧的 `u8`。

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::{Conveyor, Manipulator};
use medu_types::{Rgb, SensorsData, check_finite, check_non_empty};

impl<M: Manipulator> Medu<M> {
    /// 电机速度，范围 [0, 100]
    pub fn conveyor_set_speed_motors(&mut self, speed: i64) -> CallResult<()> {
        self.call(
            "conveyor_set_speed_motors",
            |limits| limits.conveyor_speed.check_u8("speed", speed),
            |arm, speed| arm.conveyor()?.set_speed_motors(speed),
        )
    }

    /// 舵机角度
    pub fn conveyor_set_servo_angle(&mut self, angle: f64) -> CallResult<()> {
        self.call(
            "conveyor_set_servo_angle",
            |_| check_finite("angle", angle),
            |arm, angle| arm.conveyor()?.set_servo_angle(angle),
        )
    }

    /// LED 颜色，每个通道范围 [0, 255]
    pub fn conveyor_set_led_color(&mut self, r: i64, g: i64, b: i64) -> CallResult<()> {
        self.call(
            "conveyor_set_led_color",
            |limits| {
                Ok(Rgb::new(
                    limits.led_channel.check_u8("r", r)?,
                    limits.led_channel.check_u8("g", g)?,
                    limits.led_channel.check_u8("b", b)?,
                ))
            },
            |arm, color| arm.conveyor()?.set_led_color(color),
        )
    }

    /// 在传送带屏幕上显示文本
    pub fn conveyor_display_text(&mut self, text: &str) -> CallResult<()> {
        self.call(
            "conveyor_display_text",
            |_| check_non_empty("text", text),
            |arm, text| arm.conveyor()?.display_text(text),
        )
    }

    /// 蜂鸣器音调，范围 [1, 15]
    pub fn conveyor_set_buzz_tone(&mut self, level: i64) -> CallResult<()> {
        self.call(
            "conveyor_set_buzz_tone",
            |limits| limits.buzz_level.check_u8("level", level),
            |arm, level| arm.conveyor()?.set_buzz_tone(level),
        )
    }

    /// 读取传感器数据
    pub fn conveyor_get_sensors_data(&mut self, as_json: bool) -> CallResult<SensorsData> {
        self.call(
            "conveyor_get_sensors_data",
            |_| Ok(()),
            |arm, ()| arm.conveyor()?.get_sensors_data(as_json),
        )
    }
}
