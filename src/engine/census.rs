// ==========================================
// 设备预测性维护系统 - 风险普查引擎
// ==========================================
// 职责: 观测记录序列 → 各风险等级计数
// 输入: 通过校验的观测记录
// 输出: RiskCensus (三个等级计数 + 派生总数)
// ==========================================

use crate::domain::observation::{RiskCensus, RiskObservation};
use crate::domain::types::RiskLevel;

// ==========================================
// CensusEngine - 风险普查引擎
// ==========================================
pub struct CensusEngine;

impl CensusEngine {
    pub fn new() -> Self {
        Self
    }

    /// 生成风险普查
    ///
    /// 精确等级匹配计数; 三个等级键永远同时存在 (缺席等级计为 0);
    /// 与输入顺序无关; 不按设备号去重, 重复出现逐次计数
    pub fn aggregate(&self, observations: &[RiskObservation]) -> RiskCensus {
        let mut census = RiskCensus::default();

        for observation in observations {
            match observation.risk_level {
                RiskLevel::High => census.high += 1,
                RiskLevel::Medium => census.medium += 1,
                RiskLevel::Low => census.low += 1,
            }
        }

        census.total = observations.len();
        census
    }
}

impl Default for CensusEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: &str, level: RiskLevel) -> RiskObservation {
        RiskObservation {
            equipment_id: id.to_string(),
            failure_probability: 0.5,
            risk_level: level,
            last_maintenance_date: None,
            sensor_location: None,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let census = CensusEngine::new().aggregate(&[]);
        assert_eq!(census.high, 0);
        assert_eq!(census.medium, 0);
        assert_eq!(census.low, 0);
        assert_eq!(census.total, 0);
    }

    #[test]
    fn test_aggregate_counts_and_total() {
        let observations = vec![
            obs("A-1", RiskLevel::High),
            obs("B-2", RiskLevel::High),
            obs("C-3", RiskLevel::Low),
        ];

        let census = CensusEngine::new().aggregate(&observations);
        assert_eq!(census.high, 2);
        assert_eq!(census.medium, 0); // 缺席等级计为 0 而不是缺键
        assert_eq!(census.low, 1);
        assert_eq!(census.total, 3);
    }

    #[test]
    fn test_aggregate_permutation_invariant() {
        let a = vec![
            obs("A-1", RiskLevel::High),
            obs("B-2", RiskLevel::Medium),
            obs("C-3", RiskLevel::Low),
            obs("D-4", RiskLevel::Low),
        ];
        let mut b = a.clone();
        b.reverse();
        b.swap(0, 2);

        let engine = CensusEngine::new();
        assert_eq!(engine.aggregate(&a), engine.aggregate(&b));
    }

    #[test]
    fn test_aggregate_repeated_ids_counted_per_occurrence() {
        let observations = vec![
            obs("A-1", RiskLevel::High),
            obs("A-1", RiskLevel::High),
        ];

        let census = CensusEngine::new().aggregate(&observations);
        assert_eq!(census.high, 2);
        assert_eq!(census.total, 2);
    }
}
