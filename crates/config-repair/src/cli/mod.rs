//! CLI 模块
//!
//! 命令行参数解析、交互确认与修复流程编排。

pub mod commands;
pub mod prompt;
pub mod runner;

pub use commands::Cli;
pub use prompt::{AssumeYes, ConfirmationPrompt, StdinPrompt};
pub use runner::{CommandRunner, RunOutcome};
