// ==========================================
// 设备预测性维护系统 - 预测服务客户端
// ==========================================
// 依据: Service_API_Contract_v1.0.md - /upload /predict /recommend
// 职责: 上传原始文件字节, 取回预测结果 / 建议文案
// 红线: 预测模型是不透明的上游服务, 客户端不解释其输出;
//       服务不可达属于批次级失败, 由调用方整体上报
// ==========================================

use crate::config::PredictionServiceConfig;
use crate::domain::observation::RiskObservation;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

// ==========================================
// 服务错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("预测服务不可达: {0}")]
    Unreachable(String),

    #[error("预测服务返回错误状态: {status}")]
    HttpStatus { status: u16 },

    #[error("预测服务响应解析失败: {0}")]
    DecodeError(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::DecodeError(err.to_string())
        } else {
            ServiceError::Unreachable(err.to_string())
        }
    }
}

/// Result 类型别名
pub type ServiceResult<T> = Result<T, ServiceError>;

// ==========================================
// 响应 DTO (与服务端 JSON 字段对齐)
// ==========================================

#[derive(Debug, Deserialize)]
struct UploadResponse {
    rows: Vec<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<RiskObservation>,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    recommendations: Vec<String>,
}

// ==========================================
// PredictionServiceClient - 预测服务客户端
// ==========================================
pub struct PredictionServiceClient {
    config: PredictionServiceConfig,
    client: reqwest::Client,
}

impl PredictionServiceClient {
    /// 创建客户端 (配置在构造时显式注入)
    pub fn new(config: PredictionServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    /// POST /upload - 仅解析, 返回原始行记录
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ServiceResult<Vec<HashMap<String, String>>> {
        let response: UploadResponse = self.post_file("upload", file_name, bytes).await?;
        Ok(response.rows)
    }

    /// POST /predict - 返回观测记录形状的预测结果
    pub async fn predict(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ServiceResult<Vec<RiskObservation>> {
        let response: PredictResponse = self.post_file("predict", file_name, bytes).await?;
        info!(predictions = response.predictions.len(), "预测服务返回");
        Ok(response.predictions)
    }

    /// POST /recommend - 返回建议文案 (原样透传, 不解析内部格式)
    pub async fn recommend(&self, file_name: &str, bytes: Vec<u8>) -> ServiceResult<Vec<String>> {
        let response: RecommendResponse = self.post_file("recommend", file_name, bytes).await?;
        Ok(response.recommendations)
    }

    /// multipart 上传公共路径
    async fn post_file<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ServiceResult<T> {
        let url = self.config.endpoint(endpoint);
        debug!(url = %url, file = %file_name, size = bytes.len(), "调用预测服务");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::DecodeError(e.to_string()))
    }
}
