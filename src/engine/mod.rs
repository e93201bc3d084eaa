// ==========================================
// 设备预测性维护系统 - 引擎层
// ==========================================
// 职责: 实现聚合与建议的业务规则
// 红线: 引擎只消费已通过校验的观测记录, 不做二次校验;
//       引擎无状态, 不跨批次保留任何数据
// ==========================================

pub mod census;
pub mod recommendation;

// 重导出核心引擎
pub use census::CensusEngine;
pub use recommendation::RecommendationEngine;
