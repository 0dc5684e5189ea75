//! 业务服务层
//!
//! 实现回填业务逻辑，协调仓储层并控制事务边界。
//!
//! ## 模块结构
//!
//! - `dto`: 数据传输对象定义
//! - `backfill_service`: last_check 回填服务

pub mod backfill_service;
pub mod dto;

pub use backfill_service::BackfillService;
pub use dto::{ConfigStatistics, RepairReport};
