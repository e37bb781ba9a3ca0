//! 状态查询

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{JointState, Pose};

impl<M: Manipulator> Medu<M> {
    /// 当前关节状态
    pub fn get_joint_state(&mut self) -> CallResult<JointState> {
        self.call("get_joint_state", |_| Ok(()), |arm, ()| arm.get_joint_state())
    }

    /// home 位置
    pub fn get_home_position(&mut self) -> CallResult<JointState> {
        self.call(
            "get_home_position",
            |_| Ok(()),
            |arm, ()| arm.get_home_position(),
        )
    }

    /// 当前末端位姿
    pub fn get_cartesian_coordinates(&mut self) -> CallResult<Pose> {
        self.call(
            "get_cartesian_coordinates",
            |_| Ok(()),
            |arm, ()| arm.get_cartesian_coordinates(),
        )
    }
}
