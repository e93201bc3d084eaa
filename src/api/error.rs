// ==========================================
// 设备预测性维护系统 - API层错误类型
// ==========================================
// 职责: 将导入层/服务层的技术错误转换为用户可见的业务错误
// 红线: 行级校验失败永远不出现在这里 —— 它们是 ValidationIssue 数据,
//       不是错误; 此处只承载批次级失败
// ==========================================

use crate::importer::ImportError;
use crate::service::ServiceError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 导入错误（文件整体无法解析）=====
    #[error("文件导入失败: {0}")]
    Import(#[from] ImportError),

    // ===== 预测服务错误（服务不可达/响应异常）=====
    #[error("预测服务调用失败: {0}")]
    Service(#[from] ServiceError),

    // ===== 业务规则错误 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
