// ==========================================
// 设备预测性维护系统 - 观测数据导入 Trait
// ==========================================
// 依据: Maintenance_DSS_Master_Spec.md - PART E 工程结构
// 职责: 定义观测数据导入接口（不包含实现）
// ==========================================

use crate::domain::observation::{AnalysisOutcome, RiskObservation, ValidationIssue};
use crate::importer::error::{ImportError, ImportResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// ObservationImporter Trait
// ==========================================
// 用途: 观测数据导入主接口
// 实现者: ObservationImporterImpl
#[async_trait]
pub trait ObservationImporter: Send + Sync {
    /// 从 CSV 文件导入观测数据
    ///
    /// # 参数
    /// - file_path: CSV 文件路径（.csv）
    ///
    /// # 返回
    /// - Ok(AnalysisOutcome): 批次信息 + 分拣后的两路数据
    /// - Err(ImportError): 批次级失败（文件无法读取/解析）
    ///
    /// # 导入流程（3个阶段）
    /// 1. 文件读取与解析（表头 → 无类型行记录）
    /// 2. 逐行校验与分拣（行级失败不中断批次）
    /// 3. 批次元信息生成（UUID 批次号 + 汇总计数 + 耗时）
    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> Result<AnalysisOutcome, ImportError>;

    /// 从 Excel 文件导入观测数据
    ///
    /// # 参数
    /// - file_path: Excel 文件路径（.xlsx/.xls）
    ///
    /// # 返回
    /// - Ok(AnalysisOutcome): 导入结果
    /// - Err(ImportError): 批次级失败
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> Result<AnalysisOutcome, ImportError>;

    /// 从上传字节流导入观测数据（按文件名扩展名选择解析器）
    ///
    /// # 参数
    /// - file_name: 原始文件名（决定解析器）
    /// - bytes: 上传内容
    ///
    /// # 返回
    /// - Ok(AnalysisOutcome): 导入结果
    /// - Err(ImportError): 批次级失败
    async fn import_bytes(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<AnalysisOutcome, ImportError>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 参数
    /// - file_paths: 文件路径列表
    ///
    /// # 返回
    /// - Ok(Vec<Result<AnalysisOutcome, String>>): 每个文件的导入结果
    ///
    /// # 说明
    /// - 每个文件的导入是独立的，互不影响
    /// - 某个文件失败不影响其他文件
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<AnalysisOutcome, String>>>;
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 1）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录（HashMap<列名, 值>）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<HashMap<String, String>>): 行记录列表（已 trim, 已跳过空行）
    /// - Err(ImportError): 文件读取错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path)
        -> ImportResult<Vec<HashMap<String, String>>>;

    /// 解析内存字节流为原始行记录（上传路径）
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 行级校验接口（阶段 2）
// 实现者: RowValidator
pub trait RowValidator: Send + Sync {
    /// 校验单行并构造观测记录
    ///
    /// # 参数
    /// - raw: 原始行记录（HashMap<列名, 值>）
    ///
    /// # 返回
    /// - Ok(RiskObservation): 通过全部规则, 字段已完成类型转换
    /// - Err(ValidationIssue): 首个失败规则对应的问题记录
    fn validate(&self, raw: &HashMap<String, String>) -> Result<RiskObservation, ValidationIssue>;
}
