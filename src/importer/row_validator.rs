// ==========================================
// 设备预测性维护系统 - 行校验器实现
// ==========================================
// 依据: Risk_Schema_Spec_v1.0.md - 行级校验规则
// 职责: 无类型原始行 → RiskObservation / ValidationIssue
// 红线: 规则按固定顺序短路执行, 一行只报告首个失败规则;
//       观测记录只能从这里构造, 下游不再重复校验
// ==========================================

use crate::domain::observation::{IssueKind, RiskObservation, ValidationIssue};
use crate::domain::types::RiskLevel;
use crate::importer::observation_importer_trait::RowValidator as RowValidatorTrait;
use chrono::{DateTime, NaiveDate};
use std::collections::HashMap;

pub struct RowValidator;

impl RowValidatorTrait for RowValidator {
    /// 校验单行
    ///
    /// 规则顺序 (契约, 不是实现细节):
    /// 1. equipment_id 非空
    /// 2. failure_probability 为 [0,1] 内的实数
    /// 3. risk_level ∈ {High, Medium, Low} (大小写敏感)
    /// 4. lastMaintenanceDate 若存在则必须是合法日期
    /// 5. sensorLocation 原样接受
    fn validate(&self, raw: &HashMap<String, String>) -> Result<RiskObservation, ValidationIssue> {
        // === 规则 1: equipment_id ===
        let equipment_id = match self.get_field(raw, "equipment_id") {
            Some(id) => id,
            None => return Err(ValidationIssue::new(IssueKind::MissingEquipmentId, None)),
        };

        // === 规则 2: failure_probability ===
        // 缺失 / 非数值 / NaN / 超出 [0,1] 统一归入同一分类
        let failure_probability = match self
            .get_field(raw, "failure_probability")
            .and_then(|v| v.parse::<f64>().ok())
        {
            Some(p) if p.is_finite() && (0.0..=1.0).contains(&p) => p,
            _ => {
                return Err(ValidationIssue::new(
                    IssueKind::FailureProbabilityOutOfRange,
                    Some(equipment_id),
                ))
            }
        };

        // === 规则 3: risk_level ===
        let risk_level = match self
            .get_field(raw, "risk_level")
            .and_then(|v| RiskLevel::from_str(&v))
        {
            Some(level) => level,
            None => {
                return Err(ValidationIssue::new(
                    IssueKind::InvalidRiskLevel,
                    Some(equipment_id),
                ))
            }
        };

        // === 规则 4: lastMaintenanceDate (可选) ===
        let last_maintenance_date = match self.get_field(raw, "lastMaintenanceDate") {
            None => None,
            Some(value) => {
                if parse_calendar_date(&value).is_none() {
                    return Err(ValidationIssue::new(
                        IssueKind::InvalidMaintenanceDateFormat,
                        Some(equipment_id),
                    ));
                }
                // 校验通过后保留原文, 与预测服务的字符串口径一致
                Some(value)
            }
        };

        // === 规则 5: sensorLocation (可选, 原样接受) ===
        let sensor_location = self.get_field(raw, "sensorLocation");

        Ok(RiskObservation {
            equipment_id,
            failure_probability,
            risk_level,
            last_maintenance_date,
            sensor_location,
        })
    }
}

impl RowValidator {
    /// 提取字段: trim 后为空视为缺失; 未识别列自然被忽略
    fn get_field(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
    }
}

/// 宽容的 ISO-8601 风格日期解析
///
/// 接受: YYYY-MM-DD / YYYY/MM/DD / YYYYMMDD / RFC 3339 日期时间
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y%m%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
