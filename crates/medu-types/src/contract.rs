//! 调用契约
//!
//! 每个操作在调用设备前对参数做的值检查：闭区间范围、有限值、
//! 严格正数和非空字符串。类型检查由 Rust 类型系统在编译期完成，
//! 这里只剩下值层面的约束。
//!
//! # 示例
//!
//! ```rust
//! use medu_types::Range;
//!
//! let speed = Range::new(0_i64, 100);
//! assert!(speed.check("speed", 50).is_ok());
//! assert!(speed.check("speed", 150).is_err());
//! ```

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 闭区间 `[min, max]`
///
/// 边界值本身视为合法。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    /// 下限（包含）
    pub min: T,
    /// 上限（包含）
    pub max: T,
}

impl<T> Range<T> {
    /// 创建新的区间
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Copy + fmt::Display> Range<T> {
    /// 值是否落在区间内
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// 检查值是否在区间内，成功时原样返回
    pub fn check(&self, param: &str, value: T) -> Result<T, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::out_of_range(
                param, value, self.min, self.max,
            ))
        }
    }

    /// 区间本身是否有效（`min <= max`；NaN 边界视为无效）
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }

    /// 校验区间本身，用于加载外部配置之后
    pub fn validate(&self, param: &str) -> Result<(), ValidationError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ValidationError::InvalidRange {
                param: param.to_string(),
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

impl Range<f64> {
    /// 先检查有限值，再检查范围
    pub fn check_number(&self, param: &str, value: f64) -> Result<f64, ValidationError> {
        check_finite(param, value)?;
        self.check(param, value)
    }
}

impl Range<i64> {
    /// 检查范围并收窄为设备侧的 `u8`
    pub fn check_u8(&self, param: &str, value: i64) -> Result<u8, ValidationError> {
        self.check(param, value)?;
        u8::try_from(value).map_err(|_| ValidationError::out_of_range(param, value, 0, 255))
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// 检查浮点数为有限值（非 NaN、非无穷大）
pub fn check_finite(param: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::not_finite(param, value))
    }
}

/// 检查浮点数为有限且严格大于 0
pub fn check_positive(param: &str, value: f64) -> Result<f64, ValidationError> {
    check_finite(param, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::not_positive(param, value))
    }
}

/// 检查字符串非空（只含空白也视为空）
///
/// 返回原字符串，不做 trim。
pub fn check_non_empty<'a>(param: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_string(param))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_boundaries_accepted() {
        let range = Range::new(-2.5, 2.5);
        assert!(range.check("base", -2.5).is_ok());
        assert!(range.check("base", 2.5).is_ok());
        assert!(range.check("base", 0.0).is_ok());
    }

    #[test]
    fn test_range_outside_rejected() {
        let range = Range::new(0_i64, 100);
        assert!(range.check("speed", -1).is_err());
        assert!(range.check("speed", 101).is_err());
        assert_eq!(range.check("speed", 50), Ok(50));
    }

    #[test]
    fn test_range_nan_rejected() {
        let range = Range::new(0.0, 1.0);
        let err = range.check_number("velocity_factor", f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));
    }

    #[test]
    fn test_check_u8_narrowing() {
        let range = Range::new(0_i64, 255);
        assert_eq!(range.check_u8("r", 255), Ok(255));
        assert!(range.check_u8("r", 300).is_err());
        assert!(range.check_u8("r", -1).is_err());

        // 配置错误的区间也不会产生截断
        let loose = Range::new(0_i64, 1000);
        assert!(loose.check_u8("speed", 300).is_err());
    }

    #[test]
    fn test_range_well_formed() {
        assert!(Range::new(0.0, 1.0).is_well_formed());
        assert!(Range::new(1.0, 1.0).is_well_formed());
        assert!(!Range::new(2.0, 1.0).is_well_formed());
        assert!(!Range::new(f64::NAN, 1.0).is_well_formed());
        assert!(Range::new(5_i64, 1).validate("buzz_level").is_err());
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive("step", 0.05), Ok(0.05));
        assert!(check_positive("step", 0.0).is_err());
        assert!(check_positive("step", -0.1).is_err());
        assert!(check_positive("step", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_non_empty() {
        assert_eq!(check_non_empty("name", "edum/default"), Ok("edum/default"));
        assert!(check_non_empty("name", "").is_err());
        assert!(check_non_empty("name", "   \t\n").is_err());
    }

    #[test]
    fn test_range_display() {
        assert_eq!(Range::new(1, 15).to_string(), "[1, 15]");
    }
}
