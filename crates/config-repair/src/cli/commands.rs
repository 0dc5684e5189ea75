//! CLI 参数定义
//!
//! fix-last-check 是一次性修复工具，没有子命令，
//! 行为由少量开关控制。

use clap::Parser;

/// last_check 修复工具的命令行参数
///
/// 工具本身是交互式的：打印统计、请求确认、执行回填。
/// `--yes` 用于在非交互环境（如容器内的运维脚本）跳过确认。
#[derive(Parser, Debug)]
#[command(name = "fix-last-check")]
#[command(version, about = "为活跃配置回填缺失的 last_check 字段")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// 跳过交互确认，直接执行回填
    #[arg(short, long)]
    pub yes: bool,
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["fix-last-check"]);

        assert_eq!(cli.log_level, "info");
        assert!(!cli.yes);
    }

    #[test]
    fn test_cli_parse_yes_flag() {
        let cli = Cli::parse_from(["fix-last-check", "--yes"]);
        assert!(cli.yes);

        let cli = Cli::parse_from(["fix-last-check", "-y"]);
        assert!(cli.yes);
    }

    #[test]
    fn test_cli_parse_log_level() {
        let cli = Cli::parse_from(["fix-last-check", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");

        let cli = Cli::parse_from(["fix-last-check", "-l", "trace"]);
        assert_eq!(cli.log_level, "trace");
    }
}
