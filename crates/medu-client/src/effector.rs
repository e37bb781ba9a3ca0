//! 末端执行器：附件供电和夹爪

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::check_finite;

impl<M: Manipulator> Medu<M> {
    /// 末端附件供电开关
    pub fn nozzle_power(&mut self, on: bool) -> CallResult<()> {
        self.call("nozzle_power", |_| Ok(()), |arm, ()| arm.nozzle_power(on))
    }

    /// 夹爪控制
    ///
    /// `rotation` 和 `gripper` 为 `None` 时该轴保持不变，给出时必须是有限值。
    pub fn manage_gripper(
        &mut self,
        rotation: Option<f64>,
        gripper: Option<f64>,
    ) -> CallResult<()> {
        self.call(
            "manage_gripper",
            |_| {
                let rotation = rotation.map(|v| check_finite("rotation", v)).transpose()?;
                let gripper = gripper.map(|v| check_finite("gripper", v)).transpose()?;
                Ok((rotation, gripper))
            },
            |arm, (rotation, gripper)| arm.manage_gripper(rotation, gripper),
        )
    }
}
