//! 配置实体枚举类型定义
//!
//! 所有枚举都支持数据库（sqlx）和 JSON（serde）序列化

use serde::{Deserialize, Serialize};

/// VPN 配置状态（业务侧）
///
/// 与 `is_active` 标志共同决定配置是否参与计费
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum ConfigStatus {
    /// 生效中 - 正常服务并按日计费
    #[default]
    Active,
    /// 已停用 - 用户或运营主动停用
    Inactive,
    /// 已过期 - 订阅到期后保留的历史记录
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_status_serialization() {
        let status = ConfigStatus::Active;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"ACTIVE\"");

        let parsed: ConfigStatus = serde_json::from_str("\"EXPIRED\"").unwrap();
        assert_eq!(parsed, ConfigStatus::Expired);
    }

    #[test]
    fn test_config_status_default() {
        assert_eq!(ConfigStatus::default(), ConfigStatus::Active);
    }
}
