//! VPN 配置仓储
//!
//! 提供 user_configs 表的数据访问，支持事务和行级锁

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::traits::UserConfigRepositoryTrait;
use crate::error::Result;
use crate::models::{ConfigStatus, UserConfig};

/// VPN 配置仓储
///
/// 回填只允许写 last_check 一列，其余列一律不动
pub struct UserConfigRepository {
    pool: PgPool,
}

impl UserConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ==================== 统计查询 ====================

    /// 统计生效中的配置数量
    pub async fn count_active(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM user_configs
            WHERE status = $1 AND is_active = TRUE
            "#,
        )
        .bind(ConfigStatus::Active)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// 统计生效中且 last_check 缺失的配置数量
    pub async fn count_active_missing_last_check(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM user_configs
            WHERE status = $1 AND is_active = TRUE AND last_check IS NULL
            "#,
        )
        .bind(ConfigStatus::Active)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // ==================== 事务操作 ====================

    /// 在事务中锁定并取出待回填的配置
    ///
    /// 使用 FOR UPDATE 锁定行，防止回填期间计费任务并发改写；
    /// 不做排序，各行的回填互相独立
    pub async fn list_missing_last_check_for_update(
        tx: &mut PgConnection,
    ) -> Result<Vec<UserConfig>> {
        let configs = sqlx::query_as::<_, UserConfig>(
            r#"
            SELECT id, user_id, status, is_active, created_at, last_check
            FROM user_configs
            WHERE status = $1 AND is_active = TRUE AND last_check IS NULL
            FOR UPDATE
            "#,
        )
        .bind(ConfigStatus::Active)
        .fetch_all(tx)
        .await?;

        Ok(configs)
    }

    /// 在事务中写入单条配置的 last_check
    pub async fn set_last_check_in_tx(
        tx: &mut PgConnection,
        id: i64,
        last_check: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user_configs
            SET last_check = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(last_check)
        .execute(tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl UserConfigRepositoryTrait for UserConfigRepository {
    async fn count_active(&self) -> Result<i64> {
        self.count_active().await
    }

    async fn count_active_missing_last_check(&self) -> Result<i64> {
        self.count_active_missing_last_check().await
    }
}
