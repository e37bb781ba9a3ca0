//! 控制器程序命令

use crate::modes::oneshot::OneShotMode;
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

/// 程序命令
#[derive(Subcommand, Debug)]
pub enum ProgramCommand {
    /// 运行控制器上已保存的程序
    Run {
        /// 程序名（如 edum/default）
        name: String,
    },

    /// 上传并运行 JSON 程序
    Json {
        /// 程序名
        name: String,

        /// JSON 文件（顶层必须包含 "Root"）
        file: PathBuf,
    },

    /// 执行 Python 代码
    Python {
        /// 代码文本
        code: Option<String>,

        /// 从文件读取代码
        #[arg(long, conflicts_with = "code")]
        file: Option<PathBuf>,
    },
}

impl ProgramCommand {
    pub fn execute(self, mode: &OneShotMode) -> Result<()> {
        match self {
            ProgramCommand::Run { name } => {
                mode.run(|medu| medu.run_program(&name))?;
                println!("✅ 程序 {} 已运行", name);
            },
            ProgramCommand::Json { name, file } => {
                let program = read_program_json(&file)?;
                mode.run(|medu| medu.run_program_json(&name, &program))?;
                println!("✅ 程序 {} 已运行", name);
            },
            ProgramCommand::Python { code, file } => {
                let code = match (code, file) {
                    (Some(code), _) => code,
                    (None, Some(path)) => fs::read_to_string(&path)
                        .with_context(|| format!("读取文件失败: {}", path.display()))?,
                    (None, None) => bail!("未指定代码，请直接给出代码或使用 --file"),
                };
                mode.run(|medu| medu.run_python_program(&code))?;
                println!("✅ Python 代码已执行");
            },
        }
        Ok(())
    }
}

/// 读取 JSON 程序文件（结构由会话层检查）
fn read_program_json(path: &Path) -> Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("读取文件失败: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("解析 JSON 失败: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_program_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.json");
        fs::write(&path, r#"{"Root": []}"#).unwrap();
        assert!(read_program_json(&path).unwrap().get("Root").is_some());

        fs::write(&path, "{not json").unwrap();
        assert!(read_program_json(&path).is_err());
    }

    #[test]
    fn test_python_requires_code() {
        let dir = tempfile::tempdir().unwrap();
        let mode = OneShotMode::new(
            Some(dir.path().join("config.toml")),
            crate::modes::oneshot::ConnectionArgs::default(),
        )
        .unwrap();

        let err = ProgramCommand::Python {
            code: None,
            file: None,
        }
        .execute(&mode)
        .unwrap_err();
        assert!(err.to_string().contains("--file"));
    }
}
