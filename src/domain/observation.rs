// ==========================================
// 设备预测性维护系统 - 风险观测领域模型
// ==========================================
// 依据: Maintenance_DSS_Master_Spec.md - PART C 数据体系
// 依据: Risk_Schema_Spec_v1.0.md - 观测记录 / 校验问题 / 风险普查
// ==========================================

use crate::domain::types::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RiskObservation - 风险观测记录
// ==========================================
// 红线: 只能由行校验器构造, 或从预测服务响应反序列化;
//       一旦构造即不可变, 不存在部分合法的观测记录
// 字段名对齐: 上传 CSV 表头 / 预测服务 JSON 字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskObservation {
    // ===== 主键 =====
    pub equipment_id: String, // 设备唯一标识（非空, 批次内允许重复）

    // ===== 预测维度 =====
    pub failure_probability: f64, // 故障概率, 闭区间 [0.0, 1.0]
    pub risk_level: RiskLevel,    // 风险等级（High/Medium/Low）

    // ===== 可选维度 =====
    #[serde(
        rename = "lastMaintenanceDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_maintenance_date: Option<String>, // 最近维护日期（已通过日期校验的原文）

    #[serde(
        rename = "sensorLocation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sensor_location: Option<String>, // 传感器位置（自由文本, 不做约束）
}

// ==========================================
// IssueKind - 行级校验错误分类
// ==========================================
// 每个分类对应唯一的固定原因文案 (与前端/错误报告的契约文案)
// 一行只报告首个失败规则的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    MissingEquipmentId,            // 规则1: 设备号缺失或非法
    FailureProbabilityOutOfRange,  // 规则2: 故障概率非数值或超出 [0,1]
    InvalidRiskLevel,              // 规则3: 风险等级非法
    InvalidMaintenanceDateFormat,  // 规则4: 维护日期格式非法
}

impl IssueKind {
    /// 契约文案 (不可改动: 错误报告与前端依赖逐字匹配)
    pub fn reason_text(&self) -> &'static str {
        match self {
            IssueKind::MissingEquipmentId => "Missing or invalid equipment_id",
            IssueKind::FailureProbabilityOutOfRange => {
                "failure_probability must be between 0 and 1"
            }
            IssueKind::InvalidRiskLevel => "Invalid risk_level",
            IssueKind::InvalidMaintenanceDateFormat => "Invalid lastMaintenanceDate format",
        }
    }
}

// ==========================================
// ValidationIssue - 行级校验问题
// ==========================================
// 生命周期: 分拣时创建, 仅由错误报告导出器消费, 不回流到观测数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// 设备号（规则1失败时无法提取, 序列化时整体省略该键）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,

    /// 拒绝原因（单一原因, 取首个失败规则）
    pub reason: String,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, equipment_id: Option<String>) -> Self {
        Self {
            equipment_id,
            reason: kind.reason_text().to_string(),
        }
    }
}

// ==========================================
// RiskCensus - 风险等级普查
// ==========================================
// 用途: 汇总可视化（柱状图）的数据源
// 红线: 每个批次全量重算, 不做增量更新, 不跨批次保留状态;
//       三个等级的计数永远同时存在（缺席等级计为 0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCensus {
    pub high: usize,   // High 观测数
    pub medium: usize, // Medium 观测数
    pub low: usize,    // Low 观测数
    pub total: usize,  // 派生总数 = high + medium + low
}

impl RiskCensus {
    /// 按等级取计数
    pub fn count_for(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

// ==========================================
// ValidationSummary - 批次校验汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_rows: usize, // 总行数
    pub accepted: usize,   // 通过校验
    pub rejected: usize,   // 被拒绝
}

// ==========================================
// AnalysisBatch - 分析批次
// ==========================================
// 用途: 记录单次上传文件的批次元信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBatch {
    pub batch_id: String,                   // 批次 ID（UUID）
    pub file_name: Option<String>,          // 源文件名
    pub summary: ValidationSummary,         // 校验汇总
    pub analyzed_at: DateTime<Utc>,         // 分析时间
    pub elapsed_ms: i64,                    // 分析耗时（毫秒）
}

// ==========================================
// AnalysisOutcome - 导入分析结果
// ==========================================
// 用途: 导入接口返回值（批次 + 分拣后的两路数据）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub batch: AnalysisBatch,               // 批次信息
    pub observations: Vec<RiskObservation>, // 通过校验的观测记录（保持输入顺序）
    pub issues: Vec<ValidationIssue>,       // 被拒绝的行（保持输入顺序）
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_reason_text_contract() {
        // 契约文案逐字校验
        assert_eq!(
            IssueKind::MissingEquipmentId.reason_text(),
            "Missing or invalid equipment_id"
        );
        assert_eq!(
            IssueKind::FailureProbabilityOutOfRange.reason_text(),
            "failure_probability must be between 0 and 1"
        );
        assert_eq!(IssueKind::InvalidRiskLevel.reason_text(), "Invalid risk_level");
        assert_eq!(
            IssueKind::InvalidMaintenanceDateFormat.reason_text(),
            "Invalid lastMaintenanceDate format"
        );
    }

    #[test]
    fn test_issue_without_equipment_id_omits_key() {
        // 规则1失败时 JSON 中不应出现 equipment_id 键
        let issue = ValidationIssue::new(IssueKind::MissingEquipmentId, None);
        let json = serde_json::to_string(&issue).unwrap();
        assert!(!json.contains("equipment_id"));
        assert!(json.contains("Missing or invalid equipment_id"));
    }

    #[test]
    fn test_observation_wire_field_names() {
        let obs = RiskObservation {
            equipment_id: "Pump-001".to_string(),
            failure_probability: 0.85,
            risk_level: RiskLevel::High,
            last_maintenance_date: Some("2025-05-01".to_string()),
            sensor_location: Some("Boiler Room".to_string()),
        };
        let json = serde_json::to_string(&obs).unwrap();
        // 与上传 CSV 表头 / 预测服务 JSON 字段名一致
        assert!(json.contains("\"equipment_id\""));
        assert!(json.contains("\"failure_probability\""));
        assert!(json.contains("\"risk_level\""));
        assert!(json.contains("\"lastMaintenanceDate\""));
        assert!(json.contains("\"sensorLocation\""));
    }

    #[test]
    fn test_census_count_for() {
        let census = RiskCensus {
            high: 2,
            medium: 1,
            low: 0,
            total: 3,
        };
        assert_eq!(census.count_for(RiskLevel::High), 2);
        assert_eq!(census.count_for(RiskLevel::Medium), 1);
        assert_eq!(census.count_for(RiskLevel::Low), 0);
    }
}
