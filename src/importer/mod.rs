// ==========================================
// 设备预测性维护系统 - 导入层
// ==========================================
// 职责: 外部上传数据 → 内部观测数据
// 支持: CSV, Excel, 上传字节流
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod observation_importer_impl;
pub mod observation_importer_trait;
pub mod partitioner;
pub mod row_validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use observation_importer_impl::ObservationImporterImpl;
pub use partitioner::{BatchPartitioner, PartitionOutcome};
pub use row_validator::RowValidator as RowValidatorImpl;

// 重导出 Trait 接口
pub use observation_importer_trait::{FileParser, ObservationImporter, RowValidator};
