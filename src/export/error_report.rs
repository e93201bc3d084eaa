// ==========================================
// 设备预测性维护系统 - 错误报告导出器
// ==========================================
// 职责: 校验问题序列 → 可下载的两列 CSV 文本
// 格式: 固定表头 equipment_id,reason; 设备号缺失以 "Unknown" 占位
// 红线: 只产出文本, 落盘/下载由调用方负责
// ==========================================

use crate::domain::observation::ValidationIssue;
use crate::importer::error::ImportError;

/// 设备号无法提取时的占位文案
const UNKNOWN_EQUIPMENT_ID: &str = "Unknown";

// ==========================================
// ErrorReportExporter - 错误报告导出器
// ==========================================
pub struct ErrorReportExporter;

impl ErrorReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// 导出错误报告
    ///
    /// 按输入顺序逐条写出; csv 库负责字段转义,
    /// 原因或设备号中的分隔符/引号/换行不会破坏表格结构
    pub fn export(&self, issues: &[ValidationIssue]) -> Result<String, ImportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["equipment_id", "reason"])?;

        for issue in issues {
            writer.write_record([
                issue.equipment_id.as_deref().unwrap_or(UNKNOWN_EQUIPMENT_ID),
                issue.reason.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ImportError::ReportExportError(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| ImportError::ReportExportError(e.to_string()))
    }
}

impl Default for ErrorReportExporter {
    fn default() -> Self {
        Self::new()
    }
}
