//! 时间戳形态处理
//!
//! 面板的 `created_at` 列存在两种部署形态：旧版为无时区的 TIMESTAMP
//! （历史写入不带偏移，值本身即 UTC 墙钟时间），新版为 TIMESTAMPTZ。
//! `last_check` 列是后续迁移加入的，统一为 TIMESTAMPTZ。
//! 这里在解码层区分两种形态，保证回填取值时不发生时钟偏移。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgTypeInfo, PgValueRef};
use sqlx::{Decode, Postgres, Type, ValueRef};

/// 数据库中读出的原始时间戳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredTimestamp {
    /// 无时区列（TIMESTAMP）读出的值，按 UTC 解释
    Naive(NaiveDateTime),
    /// 带时区列（TIMESTAMPTZ）读出的值，瞬时值保持不变
    Aware(DateTime<Utc>),
}

impl StoredTimestamp {
    /// 统一为 UTC 瞬时值
    ///
    /// 无时区值补上 UTC 偏移，墙钟数值不变；带时区值原样返回
    pub fn as_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Naive(naive) => naive.and_utc(),
            Self::Aware(aware) => *aware,
        }
    }
}

impl Type<Postgres> for StoredTimestamp {
    fn type_info() -> PgTypeInfo {
        <DateTime<Utc> as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <DateTime<Utc> as Type<Postgres>>::compatible(ty)
            || <NaiveDateTime as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for StoredTimestamp {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        // 按列的实际类型选择解码形态，TIMESTAMP 优先判断，
        // 避免把无时区值误当作瞬时值处理
        let ty = value.type_info().into_owned();
        if <NaiveDateTime as Type<Postgres>>::compatible(&ty) {
            let naive = <NaiveDateTime as Decode<'r, Postgres>>::decode(value)?;
            Ok(Self::Naive(naive))
        } else {
            let aware = <DateTime<Utc> as Decode<'r, Postgres>>::decode(value)?;
            Ok(Self::Aware(aware))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_naive_as_utc_keeps_wall_clock() {
        let stored = StoredTimestamp::Naive(naive(2024, 1, 1, 0, 0, 0));
        let expected: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(stored.as_utc(), expected);
    }

    #[test]
    fn test_naive_as_utc_no_shift_midday() {
        let stored = StoredTimestamp::Naive(naive(2023, 6, 15, 15, 30, 45));
        let expected: DateTime<Utc> = "2023-06-15T15:30:45Z".parse().unwrap();
        assert_eq!(stored.as_utc(), expected);
    }

    #[test]
    fn test_aware_as_utc_is_identity() {
        let instant: DateTime<Utc> = "2024-01-02T00:00:00Z".parse().unwrap();
        let stored = StoredTimestamp::Aware(instant);
        assert_eq!(stored.as_utc(), instant);
    }
}
