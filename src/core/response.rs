//! 核心响应处理模块
//!
//! 产品接口直接返回产品 JSON，这里的信封只用于服务级别的接口（如健康检查）。

use serde::Serialize;
use uuid::Uuid;

/// 服务名，写入每个信封
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// API 响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub service: &'static str,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            service: SERVICE_NAME,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// 健康检查数据
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub storage: &'static str,
    pub products_count: usize,
    pub version: &'static str,
}
