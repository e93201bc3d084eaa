// ==========================================
// 设备预测性维护系统 - 维护建议引擎
// ==========================================
// 职责: 观测记录 → 人类可读的维护建议文案
// 红线: 文案模板固定 (与前端/预测服务契约一致), 不做本地化;
//       对三档等级全覆盖, 无兜底分支
// ==========================================

use crate::domain::observation::RiskObservation;
use crate::domain::types::RiskLevel;

// ==========================================
// RecommendationEngine - 维护建议引擎
// ==========================================
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// 生成单条维护建议
    ///
    /// 确定性: 相同 (equipment_id, risk_level) 永远产生相同文案
    pub fn recommend(&self, observation: &RiskObservation) -> String {
        match observation.risk_level {
            RiskLevel::High => format!(
                "⚠️ Immediate maintenance required for {} (High risk).",
                observation.equipment_id
            ),
            RiskLevel::Medium => format!(
                "🔍 Monitor {} closely and schedule a routine check (Medium risk).",
                observation.equipment_id
            ),
            RiskLevel::Low => format!(
                "✅ Routine inspection recommended for {} (Low risk).",
                observation.equipment_id
            ),
        }
    }

    /// 批量生成建议 (保持输入顺序, 每条观测独立)
    pub fn recommend_all(&self, observations: &[RiskObservation]) -> Vec<String> {
        observations.iter().map(|o| self.recommend(o)).collect()
    }
}

impl Default for RecommendationEngine {
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
    fn test_recommend_total_over_all_levels() {
        let engine = RecommendationEngine::new();

        let high = engine.recommend(&obs("Pump-001", RiskLevel::High));
        assert!(high.contains("Pump-001"));
        assert!(high.contains("Immediate maintenance required"));
        assert!(high.contains("High risk"));

        let medium = engine.recommend(&obs("Fan-004", RiskLevel::Medium));
        assert!(medium.contains("Fan-004"));
        assert!(medium.contains("schedule a routine check"));

        let low = engine.recommend(&obs("Sensor-005", RiskLevel::Low));
        assert!(low.contains("Sensor-005"));
        assert!(low.contains("Routine inspection recommended"));
    }

    #[test]
    fn test_recommend_deterministic() {
        let engine = RecommendationEngine::new();
        let o = obs("Pump-001", RiskLevel::High);
        assert_eq!(engine.recommend(&o), engine.recommend(&o));
    }

    #[test]
    fn test_recommend_all_preserves_order() {
        let engine = RecommendationEngine::new();
        let observations = vec![
            obs("A-1", RiskLevel::Low),
            obs("B-2", RiskLevel::High),
        ];

        let recs = engine.recommend_all(&observations);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("A-1"));
        assert!(recs[1].contains("B-2"));
    }
}
