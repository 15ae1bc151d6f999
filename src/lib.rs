//! # 产品管理 REST API
//!
//! 基于 Axum 的产品 CRUD 服务，数据保存在进程内存中：
//! - `app`: 产品模型、内存存储和处理器
//! - `core`: 错误处理、响应结构、中间件
//! - `infrastructure`: 配置和日志

pub mod app;
pub mod core;
pub mod infrastructure;

use std::time::Duration;

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::product::handler::{
    create_product, delete_product, get_product, list_products, update_product, AppState,
};
use crate::core::{
    middleware::request_logging_middleware,
    response::{ApiResponse, HealthStatus},
};

/// 产品资源路径
pub const PRODUCTS_PATH: &str = "/api/productos";

/// 构建完整路由和中间件栈
pub fn build_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .route(
            &format!("{}/:id", PRODUCTS_PATH),
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "healthy",
        storage: "in-memory",
        products_count: state.product_store.len().await,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
