//! VPN 配置实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::ConfigStatus;
use super::timestamp::StoredTimestamp;

/// 用户 VPN 配置
///
/// 面板按日计费：每个计费周期扫描生效中的配置，
/// 距上次扣费（last_check）满一天的配置被再次扣费
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    pub id: i64,
    /// 用户 ID
    pub user_id: i64,
    /// 配置状态
    pub status: ConfigStatus,
    /// 是否生效（与 status 共同决定是否参与计费）
    pub is_active: bool,
    /// 创建时间（旧版面板写入时可能缺失）
    #[sqlx(default)]
    pub created_at: Option<StoredTimestamp>,
    /// 上次计费扣减时间（受影响的记录此列为 null）
    #[sqlx(default)]
    pub last_check: Option<DateTime<Utc>>,
}

impl UserConfig {
    /// 计算回填用的 last_check 取值
    ///
    /// 有 created_at 时取其 UTC 瞬时值；缺失时取本批次统一的
    /// `batch_now`（同一次运行内所有缺失行共享同一个值）
    pub fn corrected_last_check(&self, batch_now: DateTime<Utc>) -> DateTime<Utc> {
        match self.created_at {
            Some(created_at) => created_at.as_utc(),
            None => batch_now,
        }
    }
}
