// ==========================================
// 设备预测性维护系统 - API层
// ==========================================
// 职责: 面向展示层的业务接口
// 红线: 展示层是只读消费者, 不回写核心数据
// ==========================================

pub mod analysis_api;
pub mod error;

// 重导出核心类型
pub use analysis_api::{AnalysisApi, AnalysisResponse};
pub use error::{ApiError, ApiResult};
