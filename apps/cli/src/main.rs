//! # MEdu CLI
//!
//! Command-line interface for MEdu manipulator control.
//!
//! 每个命令独立执行（One-shot）：读取配置 -> 连接 -> 执行 -> 断开。
//! 所有命令都在 mock 设备上运行（dry-run），用于校验参数和调试调用序列。
//!
//! ```bash
//! # 配置连接参数
//! medu-cli config set --host 192.168.88.182 --client-id my_client --login 13 --password 14
//!
//! # 执行操作
//! medu-cli move --joints 0.05,-0.35,-0.75
//! medu-cli conveyor speed 50
//! medu-cli smoke
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod modes;
mod safety;
mod validation;

use commands::{
    AudioCommand, ConfigCommand, ConveyorCommand, GpioCommand, MoveCommand, ProgramCommand,
    SmokeCommand, StateCommand, StopCommand,
};
use modes::oneshot::{ConnectionArgs, OneShotMode};

/// MEdu CLI - 机械臂命令行工具
#[derive(Parser, Debug)]
#[command(name = "medu-cli")]
#[command(about = "Command-line interface for MEdu manipulator control", long_about = None)]
#[command(version)]
struct Cli {
    /// 配置文件路径（默认: <config_dir>/medu/config.toml，或 MEDU_CONFIG）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    #[command(flatten)]
    Device(DeviceCommand),
}

/// 需要连接设备的命令
#[derive(Subcommand, Debug)]
enum DeviceCommand {
    /// 关节或笛卡尔运动
    Move {
        #[command(flatten)]
        args: MoveCommand,
    },

    /// 停止当前运动
    Stop {
        #[command(flatten)]
        args: StopCommand,
    },

    /// 查询关节状态、home 位置和末端位姿
    State {
        #[command(flatten)]
        args: StateCommand,
    },

    /// GPIO 读写
    #[command(subcommand)]
    Gpio(GpioCommand),

    /// MGbot 传送带
    #[command(subcommand)]
    Conveyor(ConveyorCommand),

    /// 播放音频文件
    Audio {
        #[command(flatten)]
        args: AudioCommand,
    },

    /// 运行控制器程序
    #[command(subcommand)]
    Program(ProgramCommand),

    /// 依次调用所有操作的冒烟测试
    Smoke {
        #[command(flatten)]
        args: SmokeCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志（RUST_LOG 优先，默认 warn，避免干扰命令输出）
    medu_sdk::logging::init_logger_with("warn");

    let cli = Cli::parse();

    match cli.command {
        // 配置管理不需要连接
        Commands::Config(cmd) => cmd.execute(cli.config, &cli.connection),
        Commands::Device(command) => {
            let mode = OneShotMode::new(cli.config, cli.connection)?;
            run_oneshot(command, &mode)
        },
    }
}

fn run_oneshot(command: DeviceCommand, mode: &OneShotMode) -> Result<()> {
    match command {
        DeviceCommand::Move { args } => args.execute(mode),
        DeviceCommand::Stop { args } => args.execute(mode),
        DeviceCommand::State { args } => args.execute(mode),
        DeviceCommand::Gpio(cmd) => cmd.execute(mode),
        DeviceCommand::Conveyor(cmd) => cmd.execute(mode),
        DeviceCommand::Audio { args } => args.execute(mode),
        DeviceCommand::Program(cmd) => cmd.execute(mode),
        DeviceCommand::Smoke { args } => args.execute(mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_and_device_commands_are_separate() {
        let cli = Cli::try_parse_from(["medu-cli", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Path)));

        let cli = Cli::try_parse_from(["medu-cli", "--host", "10.0.0.2", "stop"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Device(DeviceCommand::Stop { .. })
        ));
        assert_eq!(cli.connection.host.as_deref(), Some("10.0.0.2"));
    }
}
