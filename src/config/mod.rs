// ==========================================
// 设备预测性维护系统 - 配置层
// ==========================================
// 依据: Service_API_Contract_v1.0.md - 服务端点配置
// 职责: 预测服务端点等外部配置
// 红线: 配置是显式传入的值对象, 在客户端构造时注入;
//       禁止进程级全局可变状态
// ==========================================

use serde::{Deserialize, Serialize};

/// 预测服务请求超时缺省值（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 预测服务地址环境变量（仅 CLI 入口读取, 库内部不碰环境）
pub const SERVICE_URL_ENV: &str = "MAINT_PREDICTOR_SERVICE_URL";

// ==========================================
// PredictionServiceConfig - 预测服务配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionServiceConfig {
    /// 服务基地址（如 http://localhost:8000）
    pub base_url: String,

    /// 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl PredictionServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 从环境变量读取（CLI 入口的便捷构造; 未设置时返回 None）
    pub fn from_env() -> Option<Self> {
        std::env::var(SERVICE_URL_ENV)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(Self::new)
    }

    /// 拼接端点 URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn trim_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = PredictionServiceConfig::new("http://localhost:8000/");
        assert_eq!(config.endpoint("/predict"), "http://localhost:8000/predict");
        assert_eq!(config.endpoint("recommend"), "http://localhost:8000/recommend");
    }

    #[test]
    fn test_default_timeout() {
        let config = PredictionServiceConfig::new("http://svc");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.with_timeout(5).timeout_secs, 5);
    }

    #[test]
    fn test_deserialize_with_default_timeout() {
        let config: PredictionServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://svc"}"#).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
