// ==========================================
// 设备预测性维护系统 - 观测数据导入器实现
// ==========================================
// 职责: 整合导入流程, 从文件/字节流到分拣结果
// 流程: 解析 → 逐行校验分拣 → 批次元信息
// ==========================================

use crate::domain::observation::{AnalysisBatch, AnalysisOutcome, ValidationSummary};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::observation_importer_trait::{FileParser, ObservationImporter, RowValidator};
use crate::importer::partitioner::BatchPartitioner;
use crate::importer::row_validator::RowValidator as RowValidatorImpl;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// ObservationImporterImpl - 观测数据导入器实现
// ==========================================
pub struct ObservationImporterImpl {
    file_parser: Box<dyn FileParser>,
    partitioner: BatchPartitioner,
}

impl ObservationImporterImpl {
    /// 创建新的 ObservationImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - validator: 行校验器
    pub fn new(file_parser: Box<dyn FileParser>, validator: Box<dyn RowValidator>) -> Self {
        Self {
            file_parser,
            partitioner: BatchPartitioner::new(validator),
        }
    }

    /// 缺省装配（CSV 解析器 + 标准行校验器）
    pub fn with_csv_defaults() -> Self {
        Self::new(
            Box::new(crate::importer::file_parser::CsvParser),
            Box::new(RowValidatorImpl),
        )
    }

    /// 解析完成后的公共路径: 分拣 + 批次元信息
    fn partition_rows(
        &self,
        file_name: Option<String>,
        raw_rows: Vec<HashMap<String, String>>,
        started: Instant,
    ) -> AnalysisOutcome {
        let batch_id = Uuid::new_v4().to_string();
        let total_rows = raw_rows.len();

        // === 阶段 2: 逐行校验分拣 ===
        debug!(batch_id = %batch_id, total_rows, "开始分拣");
        let outcome = self.partitioner.partition(raw_rows);

        let summary = ValidationSummary {
            total_rows,
            accepted: outcome.accepted.len(),
            rejected: outcome.rejected.len(),
        };

        info!(
            batch_id = %batch_id,
            total = summary.total_rows,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "分拣完成"
        );

        // === 阶段 3: 批次元信息 ===
        AnalysisOutcome {
            batch: AnalysisBatch {
                batch_id,
                file_name,
                summary,
                analyzed_at: Utc::now(),
                elapsed_ms: started.elapsed().as_millis() as i64,
            },
            observations: outcome.accepted,
            issues: outcome.rejected,
        }
    }

    fn file_name_of(path: &Path) -> Option<String> {
        path.file_name().map(|n| n.to_string_lossy().to_string())
    }
}

#[async_trait::async_trait]
impl ObservationImporter for ObservationImporterImpl {
    #[instrument(skip(self, file_path))]
    async fn import_from_csv<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> Result<AnalysisOutcome, ImportError> {
        let started = Instant::now();
        let path = file_path.as_ref();
        info!(file = %path.display(), "开始导入观测数据 (CSV)");

        // === 阶段 1: 解析文件 ===
        let raw_rows = self.file_parser.parse_to_raw_records(path)?;

        Ok(self.partition_rows(Self::file_name_of(path), raw_rows, started))
    }

    #[instrument(skip(self, file_path))]
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> Result<AnalysisOutcome, ImportError> {
        let started = Instant::now();
        let path = file_path.as_ref();
        info!(file = %path.display(), "开始导入观测数据 (Excel)");

        let raw_rows = crate::importer::file_parser::ExcelParser.parse_to_raw_records(path)?;

        Ok(self.partition_rows(Self::file_name_of(path), raw_rows, started))
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn import_bytes(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<AnalysisOutcome, ImportError> {
        let started = Instant::now();
        info!(file = %file_name, "开始导入观测数据 (上传字节流)");

        let raw_rows = UniversalFileParser.parse_upload(file_name, bytes)?;

        Ok(self.partition_rows(Some(file_name.to_string()), raw_rows, started))
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<AnalysisOutcome, String>>> {
        // 每个文件独立导入, 单个文件失败不影响其他文件
        let tasks = file_paths.iter().map(|p| async move {
            UniversalFileParser
                .parse(p.as_ref())
                .map(|rows| self.partition_rows(Self::file_name_of(p.as_ref()), rows, Instant::now()))
                .map_err(|e| e.to_string())
        });

        Ok(futures::future::join_all(tasks).await)
    }
}
