// ==========================================
// 设备预测性维护系统 - 核心库
// ==========================================
// 依据: Maintenance_DSS_Master_Spec.md - 系统宪法
// 技术栈: Rust + 上游预测服务 (不透明)
// 系统定位: 决策支持系统 (风险分析与维护建议)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 聚合与建议
pub mod engine;

// 导出层 - 错误报告
pub mod export;

// 服务层 - 预测服务客户端
pub mod service;

// 配置层 - 服务端点配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::RiskLevel;

// 领域实体
pub use domain::{
    AnalysisBatch, AnalysisOutcome, IssueKind, RiskCensus, RiskObservation, ValidationIssue,
    ValidationSummary,
};

// 导入层
pub use importer::{
    BatchPartitioner, CsvParser, ExcelParser, ImportError, ObservationImporter,
    ObservationImporterImpl, RowValidatorImpl, UniversalFileParser,
};

// 引擎
pub use engine::{CensusEngine, RecommendationEngine};

// 导出
pub use export::ErrorReportExporter;

// 服务
pub use service::{PredictionServiceClient, ServiceError};

// 配置
pub use config::PredictionServiceConfig;

// API
pub use api::{AnalysisApi, AnalysisResponse, ApiError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备预测性维护风险分析系统";
