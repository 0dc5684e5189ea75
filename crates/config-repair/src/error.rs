//! 修复工具错误类型定义

use thiserror::Error;

/// 修复工具错误类型
#[derive(Debug, Error)]
pub enum RepairError {
    // ==================== 数据库错误 ====================
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    // ==================== 交互错误 ====================
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, RepairError>;
