// ==========================================
// 设备预测性维护系统 - 领域模型层
// ==========================================
// 依据: Maintenance_DSS_Master_Spec.md - PART C 数据体系
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含解析逻辑, 不含引擎逻辑
// ==========================================

pub mod observation;
pub mod types;

// 重导出核心类型
pub use observation::{
    AnalysisBatch, AnalysisOutcome, IssueKind, RiskCensus, RiskObservation, ValidationIssue,
    ValidationSummary,
};
pub use types::RiskLevel;
