//! 输入解析
//!
//! 把命令行上的逗号分隔数值转换为值类型。范围检查由会话层完成，
//! 这里只负责格式。

use anyhow::{Context, Result, bail};
use medu_sdk::types::{JointAngles, JointVelocities, Orientation, Pose, Position};

/// 解析逗号分隔的浮点数
pub fn parse_floats(input: &str) -> Result<Vec<f64>> {
    let values = input
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("解析数值失败: {}", input))?;

    if values.is_empty() {
        bail!("数值不能为空");
    }
    Ok(values)
}

fn parse_triple(input: &str, what: &str) -> Result<[f64; 3]> {
    let values = parse_floats(input)?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => bail!("{}需要 3 个值，得到 {} 个", what, values.len()),
    }
}

/// 解析关节角（base, shoulder, boom），单位弧度
pub fn parse_joints(input: &str) -> Result<JointAngles> {
    let [base, shoulder, boom] = parse_triple(input, "关节角")?;
    Ok(JointAngles::new(base, shoulder, boom))
}

/// 解析关节速度
pub fn parse_joint_velocities(input: &str) -> Result<JointVelocities> {
    let [base, shoulder, boom] = parse_triple(input, "关节速度")?;
    Ok(JointVelocities::new(base, shoulder, boom))
}

/// 解析位置（x, y, z），单位米
pub fn parse_position(input: &str) -> Result<Position> {
    let [x, y, z] = parse_triple(input, "位置")?;
    Ok(Position::new(x, y, z))
}

/// 解析位姿
///
/// 3 个值为位置（姿态取单位四元数），7 个值为位置加四元数 (x, y, z, w)。
pub fn parse_pose(input: &str) -> Result<Pose> {
    let values = parse_floats(input)?;
    match values.as_slice() {
        [x, y, z] => Ok(Pose::from_position(Position::new(*x, *y, *z))),
        [x, y, z, ox, oy, oz, ow] => Ok(Pose::new(
            Position::new(*x, *y, *z),
            Orientation::new(*ox, *oy, *oz, *ow),
        )),
        _ => bail!("位姿需要 3 或 7 个值，得到 {} 个", values.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_joints() {
        let joints = parse_joints("0.05, -0.35,-0.75").unwrap();
        assert_eq!(joints, JointAngles::new(0.05, -0.35, -0.75));
    }

    #[test]
    fn test_parse_joints_wrong_count() {
        assert!(parse_joints("0.1,0.2").is_err());
        assert!(parse_joints("0.1,0.2,0.3,0.4").is_err());
    }

    #[test]
    fn test_parse_floats_invalid() {
        assert!(parse_floats("0.1,invalid,0.3").is_err());
        assert!(parse_floats("").is_err());
    }

    #[test]
    fn test_parse_pose() {
        let pose = parse_pose("0.32,-0.004,0.25").unwrap();
        assert_eq!(pose.position, Position::new(0.32, -0.004, 0.25));
        assert_eq!(pose.orientation, Orientation::IDENTITY);

        let pose = parse_pose("0.1,0.2,0.3,0,0,0.7071,0.7071").unwrap();
        assert_eq!(pose.orientation, Orientation::new(0.0, 0.0, 0.7071, 0.7071));

        assert!(parse_pose("0.1,0.2,0.3,0.4").is_err());
    }

    #[test]
    fn test_parse_velocities_and_position() {
        assert_eq!(
            parse_joint_velocities("0.2,0.1,0.15").unwrap(),
            JointVelocities::new(0.2, 0.1, 0.15)
        );
        assert_eq!(
            parse_position("0.25,0,0.2").unwrap(),
            Position::new(0.25, 0.0, 0.2)
        );
    }
}
