//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;

/// VPN 配置仓储接口
///
/// 只暴露池上的只读统计；事务内的批量写入走
/// `UserConfigRepository` 的关联函数，事务边界由服务层控制
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserConfigRepositoryTrait: Send + Sync {
    /// 统计生效中的配置数量（status = active 且 is_active = true）
    async fn count_active(&self) -> Result<i64>;

    /// 统计生效中且 last_check 缺失的配置数量
    async fn count_active_missing_last_check(&self) -> Result<i64>;
}
