// ==========================================
// 设备预测性维护系统 - 批次分拣器实现
// ==========================================
// 职责: 原始行序列 → (观测记录流, 校验问题流)
// 红线: 唯一的错误边界 —— 单行失败绝不中断批次,
//       也绝不升级为批次级失败; 两路输出各自保持输入相对顺序
// ==========================================

use crate::domain::observation::{RiskObservation, ValidationIssue};
use crate::importer::observation_importer_trait::RowValidator;
use std::collections::HashMap;

// ==========================================
// PartitionOutcome - 分拣结果
// ==========================================
#[derive(Debug, Default)]
pub struct PartitionOutcome {
    pub accepted: Vec<RiskObservation>, // 通过校验 (输入顺序)
    pub rejected: Vec<ValidationIssue>, // 被拒绝 (输入顺序)
}

// ==========================================
// BatchPartitioner - 批次分拣器
// ==========================================
pub struct BatchPartitioner {
    validator: Box<dyn RowValidator>,
}

impl BatchPartitioner {
    pub fn new(validator: Box<dyn RowValidator>) -> Self {
        Self { validator }
    }

    /// 分拣一个批次
    ///
    /// 每行独立走行校验器; 空输入产生两个空序列而不是错误
    /// 不变量: accepted.len() + rejected.len() == rows.len()
    pub fn partition(&self, rows: Vec<HashMap<String, String>>) -> PartitionOutcome {
        let mut outcome = PartitionOutcome::default();

        for row in rows {
            match self.validator.validate(&row) {
                Ok(observation) => outcome.accepted.push(observation),
                Err(issue) => outcome.rejected.push(issue),
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::row_validator::RowValidator as RowValidatorImpl;

    fn partitioner() -> BatchPartitioner {
        BatchPartitioner::new(Box::new(RowValidatorImpl))
    }

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_partition_empty_input() {
        let outcome = partitioner().partition(Vec::new());
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_partition_is_total_and_stable() {
        let rows = vec![
            row(&[("equipment_id", "A-1"), ("failure_probability", "0.1"), ("risk_level", "Low")]),
            row(&[("equipment_id", "B-2"), ("failure_probability", "9.9"), ("risk_level", "Low")]),
            row(&[("equipment_id", "C-3"), ("failure_probability", "0.9"), ("risk_level", "High")]),
            row(&[("equipment_id", "D-4"), ("failure_probability", "0.5"), ("risk_level", "Bogus")]),
        ];
        let total = rows.len();

        let outcome = partitioner().partition(rows);

        // 总量守恒
        assert_eq!(outcome.accepted.len() + outcome.rejected.len(), total);

        // 两路各自保持输入相对顺序
        let accepted_ids: Vec<&str> = outcome
            .accepted
            .iter()
            .map(|o| o.equipment_id.as_str())
            .collect();
        assert_eq!(accepted_ids, vec!["A-1", "C-3"]);

        let rejected_ids: Vec<Option<&str>> = outcome
            .rejected
            .iter()
            .map(|i| i.equipment_id.as_deref())
            .collect();
        assert_eq!(rejected_ids, vec![Some("B-2"), Some("D-4")]);
    }

    #[test]
    fn test_partition_duplicates_not_deduplicated() {
        // 同一设备号出现多次: 不去重, 每次出现都独立计数
        let rows = vec![
            row(&[("equipment_id", "A-1"), ("failure_probability", "0.2"), ("risk_level", "Low")]),
            row(&[("equipment_id", "A-1"), ("failure_probability", "0.8"), ("risk_level", "High")]),
        ];

        let outcome = partitioner().partition(rows);
        assert_eq!(outcome.accepted.len(), 2);
    }

    #[test]
    fn test_partition_all_rejected_does_not_abort() {
        let rows = vec![
            row(&[("failure_probability", "0.2"), ("risk_level", "Low")]),
            row(&[("equipment_id", "B-2"), ("failure_probability", "x"), ("risk_level", "Low")]),
        ];

        let outcome = partitioner().partition(rows);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 2);
    }
}
