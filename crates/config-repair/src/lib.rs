//! last_check 修复工具
//!
//! 一次性运维工具：为活跃的用户配置回填缺失的 `last_check` 字段。
//!
//! ## 问题背景
//!
//! 配置创建时未设置 `last_check`，导致这些配置在下一个计费周期被
//! 重复扣费。修复方式是将 `last_check` 回填为配置的创建时间，创建
//! 时间也缺失时回填为本次执行开始的 UTC 时间。
//!
//! ## 执行流程
//!
//! 1. 打印统计 -> 2. 请求操作者确认 -> 3. 单事务回填 -> 4. 再次打印统计
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `repository`: 数据库仓储层
//! - `service`: 回填服务层
//! - `cli`: 命令行参数与流程编排

pub mod cli;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use cli::{AssumeYes, Cli, CommandRunner, ConfirmationPrompt, RunOutcome, StdinPrompt};
pub use error::{RepairError, Result};
pub use models::*;
pub use repository::{UserConfigRepository, UserConfigRepositoryTrait};
pub use service::{BackfillService, ConfigStatistics, RepairReport};
