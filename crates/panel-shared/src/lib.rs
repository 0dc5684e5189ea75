//! 面板共享库
//!
//! 包含面板维护工具共用的配置、错误处理、数据库连接等基础设施代码。

pub mod config;
pub mod database;
pub mod error;
pub mod test_utils;
