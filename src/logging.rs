// ==========================================
// 库存导入导出引擎 - 日志初始化
// ==========================================
// 工具: tracing-subscriber（EnvFilter + fmt）
// 输出方: 导入服务层、文件守卫、命令行；对账引擎不打日志
// 级别: RUST_LOG，缺省 info
// ==========================================

use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 人读格式（带 target 与行号）
    #[default]
    Pretty,
    /// 单行 JSON（供日志采集，附带当前 span 字段，如 batch_id）
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("未知日志格式: {}", other)),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 按指定格式安装全局 subscriber
///
/// # 返回
/// - Err: 全局 subscriber 已被设置
///
/// # 示例
/// ```no_run
/// use inventory_import::logging::{self, LogFormat};
/// logging::init_with(LogFormat::Json).ok();
/// ```
pub fn init_with(format: LogFormat) -> Result<(), String> {
    let builder = fmt().with_env_filter(env_filter());
    match format {
        LogFormat::Pretty => builder
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    }
    .map_err(|e| e.to_string())
}

/// 人读格式日志；重复调用无副作用
pub fn init() {
    let _ = init_with(LogFormat::Pretty);
}

/// 测试日志：debug 级别，输出到测试捕获器，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_init_is_repeatable() {
        init_test();
        init_test();
        assert!(init_with(LogFormat::Json).is_err());
    }
}
