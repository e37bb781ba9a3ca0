//! 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt subscriber（输出到 stderr），过滤规则来自
//! `RUST_LOG`（未设置时为 `info`），并把 `log` crate 的记录桥接到 tracing。

use tracing_subscriber::EnvFilter;

/// 默认过滤规则
pub const DEFAULT_FILTER: &str = "info";

/// 初始化全局日志
///
/// 重复调用是安全的：已有全局 subscriber 时直接返回 `false`。
pub fn init_logger() -> bool {
    init_logger_with(DEFAULT_FILTER)
}

/// 以指定的默认过滤规则初始化全局日志（`RUST_LOG` 优先）
pub fn init_logger_with(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    // 桥接 log 记录（其他 logger 已安装时跳过）
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {}", e);
    }
    true
}
