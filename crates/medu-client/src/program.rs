//! 程序执行

use crate::error::CallResult;
use crate::session::Medu;
use medu_driver::Manipulator;
use medu_types::{ValidationError, check_non_empty};

/// JSON 程序必须包含的根键
pub const PROGRAM_ROOT_KEY: &str = "Root";

/// 检查 JSON 程序：必须是对象且包含 `Root`
pub fn check_program_json(program: &serde_json::Value) -> Result<(), ValidationError> {
    let object = program
        .as_object()
        .ok_or_else(|| ValidationError::invalid_type("program_json", "object"))?;
    if !object.contains_key(PROGRAM_ROOT_KEY) {
        return Err(ValidationError::missing_key(
            "program_json",
            PROGRAM_ROOT_KEY,
        ));
    }
    Ok(())
}

impl<M: Manipulator> Medu<M> {
    /// 运行控制器上已保存的程序
    pub fn run_program(&mut self, name: &str) -> CallResult<()> {
        self.call(
            "run_program",
            |_| check_non_empty("name", name),
            |arm, name| arm.run_program(name),
        )
    }

    /// 运行 JSON 描述的程序
    pub fn run_program_json(
        &mut self,
        name: &str,
        program: &serde_json::Value,
    ) -> CallResult<()> {
        self.call(
            "run_program_json",
            |_| {
                check_non_empty("name", name)?;
                check_program_json(program)
            },
            |arm, ()| arm.run_program_json(name, program),
        )
    }

    /// 在控制器上执行 Python 代码
    pub fn run_python_program(&mut self, code: &str) -> CallResult<()> {
        self.call(
            "run_python_program",
            |_| check_non_empty("code", code),
            |arm, code| arm.run_python_program(code),
        )
    }
}
