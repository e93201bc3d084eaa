// ==========================================
// 设备预测性维护系统 - 领域类型定义
// ==========================================
// 依据: Maintenance_DSS_Master_Spec.md - PART B 风险体系
// 依据: Risk_Schema_Spec_v1.0.md - 风险等级枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 红线: 三档等级制, 与上游预测服务的输出字面量一致
// 序列化格式: 与 CSV / 预测服务 JSON 的字面量完全相同 (大小写敏感)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,   // 高风险
    Medium, // 中风险
    Low,    // 低风险
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

impl RiskLevel {
    /// 从字符串解析风险等级
    ///
    /// 大小写敏感的精确匹配: 除 "High" / "Medium" / "Low" 外一律返回 None,
    /// 不做任何宽容处理 (宽容匹配会破坏校验语义)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(RiskLevel::High),
            "Medium" => Some(RiskLevel::Medium),
            "Low" => Some(RiskLevel::Low),
            _ => None,
        }
    }

    /// 全部等级 (固定顺序: High → Medium → Low, 用于汇总展示)
    pub fn all() -> [RiskLevel; 3] {
        [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact_match() {
        assert_eq!(RiskLevel::from_str("High"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_str("Medium"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_str("Low"), Some(RiskLevel::Low));
    }

    #[test]
    fn test_from_str_case_sensitive() {
        // 大小写不一致必须拒绝
        assert_eq!(RiskLevel::from_str("high"), None);
        assert_eq!(RiskLevel::from_str("HIGH"), None);
        assert_eq!(RiskLevel::from_str("medium "), None);
        assert_eq!(RiskLevel::from_str(""), None);
        assert_eq!(RiskLevel::from_str("Critical"), None);
    }

    #[test]
    fn test_display_roundtrip() {
        for level in RiskLevel::all() {
            assert_eq!(RiskLevel::from_str(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn test_serde_literal() {
        // 序列化字面量必须与 CSV / 预测服务一致
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
        let parsed: RiskLevel = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, RiskLevel::Low);
        assert!(serde_json::from_str::<RiskLevel>("\"low\"").is_err());
    }
}
