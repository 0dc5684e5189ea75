//! 服务层数据传输对象

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 活跃配置统计
///
/// total = missing + with，三个计数来自同一时刻的两次查询
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatistics {
    /// 生效中的配置总数（status = active 且 is_active = true）
    pub total_active: i64,
    /// 其中 last_check 缺失的数量
    pub missing_last_check: i64,
    /// 其中 last_check 已设置的数量
    pub with_last_check: i64,
}

impl ConfigStatistics {
    /// 由两个计数构造，已设置数量由减法得出
    pub fn from_counts(total_active: i64, missing_last_check: i64) -> Self {
        Self {
            total_active,
            missing_last_check,
            with_last_check: total_active - missing_last_check,
        }
    }
}

/// 回填执行报告
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairReport {
    /// 本次发现的待回填配置数量
    pub candidates: i64,
    /// 实际写入 last_check 的配置数量
    pub fixed: i64,
    /// 批次起始时间，created_at 缺失的行统一回填该值
    pub started_at: DateTime<Utc>,
}

impl RepairReport {
    /// 无候选行时的报告
    pub fn nothing_to_fix(started_at: DateTime<Utc>) -> Self {
        Self {
            candidates: 0,
            fixed: 0,
            started_at,
        }
    }

    /// 回填提交后的报告
    pub fn completed(candidates: i64, fixed: i64, started_at: DateTime<Utc>) -> Self {
        Self {
            candidates,
            fixed,
            started_at,
        }
    }

    /// 本次运行是否无事可做
    pub fn is_noop(&self) -> bool {
        self.candidates == 0
    }
}
