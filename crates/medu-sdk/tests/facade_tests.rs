//! 顶层导出测试
//!
//! 验证 facade 暴露的类型足以完成一次完整的会话。

use medu_sdk::driver::mock::{MockConnector, MockManipulator};
use medu_sdk::prelude::*;

#[test]
fn test_prelude_session_flow() {
    let creds = Credentials::new("192.168.88.182", "my_client", "13", "14");
    let mut medu: Medu<MockManipulator> = connect(&MockConnector::new(), &creds).unwrap();

    medu.move_to_coordinates(
        MoveToCoordinates::new(Pose::from_position(Position::new(0.27, 0.0, 0.15)))
            .planner(PlannerType::Lin),
    )
    .unwrap();
    medu.arc_motion(ArcMotion::new(
        Position::new(0.3, 0.1, 0.2),
        Position::new(0.25, 0.0, 0.2),
    ))
    .unwrap();

    let state: Option<JointState> = medu.get_joint_state().sentinel();
    assert!(state.is_some());

    medu.disconnect().unwrap();
    assert!(medu.get_joint_state().sentinel().is_none());
}

#[test]
fn test_error_types_are_reexported() {
    let err = CallError::Precondition {
        operation: "write_gpio",
        source: ValidationError::invalid_enum("value", 2, "0, 1"),
    };
    let as_sdk: medu_sdk::CallError = err.clone();
    assert!(as_sdk.is_precondition());

    let driver = DriverError::NoConveyor;
    assert!(!driver.is_session_error());
}

#[test]
fn test_init_logger_is_idempotent() {
    let _ = medu_sdk::init_logger();
    assert!(!medu_sdk::init_logger());
}
