//! 修复工具领域模型
//!
//! 只映射本工具需要读写的列，面板完整实体由主应用维护

pub mod enums;
pub mod timestamp;
pub mod user_config;

// 重新导出常用类型
pub use enums::ConfigStatus;
pub use timestamp::StoredTimestamp;
pub use user_config::UserConfig;
