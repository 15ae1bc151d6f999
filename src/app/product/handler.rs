//! 产品处理器
//!
//! 把 `/api/productos` 上的五个 HTTP 操作映射到 [`ProductStore`]。

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use super::{
    model::{Product, ProductPayload},
    service::ProductStore,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_store: ProductStore,
}

impl AppState {
    pub fn new(product_store: ProductStore) -> Self {
        Self { product_store }
    }
}

fn not_found(id: u64) -> CoreError {
    CoreError::NotFound(format!("产品 {} 不存在", id))
}

/// 创建产品，请求体中的 id 会被忽略
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let Json(payload) = payload?;
    let product = state.product_store.create(payload).await;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.product_store.list().await)
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    state
        .product_store
        .find(id)
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// 更新产品，路径中的 id 优先于请求体
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    state
        .product_store
        .update(payload.into_product(id))
        .await
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// 删除产品，id 不存在时同样返回 204
pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, CoreError> {
    let Path(id) = id?;
    state.product_store.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}
