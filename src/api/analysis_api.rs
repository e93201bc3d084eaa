// ==========================================
// 设备预测性维护系统 - 批次分析API
// ==========================================
// 职责: 封装单个批次的完整分析流程
// 流程: 解析 → 分拣 → 普查/建议/错误报告
// 说明: 本地路径 (客户端预览) 与远程路径 (预测服务结果)
//       对同一观测集合必须产出相同的普查与建议
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::observation::{
    AnalysisOutcome, RiskCensus, RiskObservation, ValidationIssue, ValidationSummary,
};
use crate::engine::{CensusEngine, RecommendationEngine};
use crate::export::ErrorReportExporter;
use crate::importer::{ObservationImporter, ObservationImporterImpl};
use crate::service::PredictionServiceClient;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

// ==========================================
// AnalysisResponse - 批次分析响应
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// 批次ID
    pub batch_id: String,
    /// 源文件名
    pub file_name: Option<String>,
    /// 校验汇总（总行数/通过/拒绝）
    pub summary: ValidationSummary,
    /// 通过校验的观测记录（表格视图数据源）
    pub observations: Vec<RiskObservation>,
    /// 被拒绝的行（错误列表视图数据源）
    pub issues: Vec<ValidationIssue>,
    /// 风险普查（柱状图数据源）
    pub census: RiskCensus,
    /// 维护建议（列表视图数据源, 与 observations 同序）
    pub recommendations: Vec<String>,
    /// 分析耗时（毫秒）
    pub elapsed_ms: i64,
}

// ==========================================
// AnalysisApi - 批次分析API
// ==========================================
pub struct AnalysisApi {
    importer: ObservationImporterImpl,
    census_engine: CensusEngine,
    recommendation_engine: RecommendationEngine,
    exporter: ErrorReportExporter,
}

impl AnalysisApi {
    /// 创建新的 AnalysisApi 实例（标准装配）
    pub fn new() -> Self {
        Self {
            importer: ObservationImporterImpl::with_csv_defaults(),
            census_engine: CensusEngine::new(),
            recommendation_engine: RecommendationEngine::new(),
            exporter: ErrorReportExporter::new(),
        }
    }

    /// 分析本地文件（CSV / Excel, 按扩展名分派）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(AnalysisResponse): 分析结果
    /// - Err(ApiError): 批次级失败（文件无法解析）
    pub async fn analyze_file(&self, file_path: &str) -> ApiResult<AnalysisResponse> {
        let lower = file_path.to_lowercase();
        let outcome = if lower.ends_with(".csv") {
            self.importer.import_from_csv(file_path).await?
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            self.importer.import_from_excel(file_path).await?
        } else {
            return Err(ApiError::InvalidInput(format!(
                "不支持的文件类型: {}（仅支持 .csv/.xlsx/.xls）",
                file_path
            )));
        };

        Ok(self.build_response(outcome))
    }

    /// 分析上传字节流（前端拖拽上传路径）
    pub async fn analyze_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> ApiResult<AnalysisResponse> {
        let outcome = self.importer.import_bytes(file_name, bytes).await?;
        Ok(self.build_response(outcome))
    }

    /// 远程分析: 预测结果由上游服务计算
    ///
    /// # 参数
    /// - client: 预测服务客户端
    /// - file_name / bytes: 原始上传内容
    /// - relay_recommendations: true 时透传服务端建议文案,
    ///   false 时由本地建议引擎计算（两者对同一观测集合等价）
    pub async fn analyze_remote(
        &self,
        client: &PredictionServiceClient,
        file_name: &str,
        bytes: Vec<u8>,
        relay_recommendations: bool,
    ) -> ApiResult<AnalysisResponse> {
        let started = std::time::Instant::now();

        let observations = client.predict(file_name, bytes.clone()).await?;

        let recommendations = if relay_recommendations {
            // 服务端文案格式不承诺稳定, 原样透传, 不做解析
            client.recommend(file_name, bytes).await?
        } else {
            self.recommendation_engine.recommend_all(&observations)
        };

        let census = self.census_engine.aggregate(&observations);
        let summary = ValidationSummary {
            total_rows: observations.len(),
            accepted: observations.len(),
            rejected: 0,
        };

        info!(
            file = %file_name,
            accepted = summary.accepted,
            "远程分析完成"
        );

        Ok(AnalysisResponse {
            batch_id: Uuid::new_v4().to_string(),
            file_name: Some(file_name.to_string()),
            summary,
            observations,
            issues: Vec::new(),
            census,
            recommendations,
            elapsed_ms: started.elapsed().as_millis() as i64,
        })
    }

    /// 从已就绪的观测集合计算普查与建议
    ///
    /// 本地与远程路径共用此入口, 保证两条路径对同一集合产出一致
    pub fn summarize(&self, observations: &[RiskObservation]) -> (RiskCensus, Vec<String>) {
        (
            self.census_engine.aggregate(observations),
            self.recommendation_engine.recommend_all(observations),
        )
    }

    /// 导出错误报告（两列 CSV 文本, 下载动作由调用方完成）
    pub fn export_error_report(&self, issues: &[ValidationIssue]) -> ApiResult<String> {
        Ok(self.exporter.export(issues)?)
    }

    /// 组装本地路径的响应
    fn build_response(&self, outcome: AnalysisOutcome) -> AnalysisResponse {
        let (census, recommendations) = self.summarize(&outcome.observations);

        AnalysisResponse {
            batch_id: outcome.batch.batch_id,
            file_name: outcome.batch.file_name,
            summary: outcome.batch.summary,
            observations: outcome.observations,
            issues: outcome.issues,
            census,
            recommendations,
            elapsed_ms: outcome.batch.elapsed_ms,
        }
    }
}

impl Default for AnalysisApi {
    fn default() -> Self {
        Self::new()
    }
}
