//! 产品内存存储
//!
//! 整个集合和 id 计数器放在同一把读写锁里，写操作独占，读操作共享。

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::model::{Product, ProductPayload};

#[derive(Debug)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

#[derive(Clone, Debug)]
pub struct ProductStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    /// 带三条示例数据的存储
    pub fn new() -> Self {
        let seed = vec![
            ProductPayload::new("iPhone 14", 999.99),
            ProductPayload::new("Samsung TV", 1299.99),
            ProductPayload::new("Nike Air Max", 79.99),
        ];
        let products: Vec<Product> = seed
            .into_iter()
            .zip(1u64..)
            .map(|(payload, id)| payload.into_product(id))
            .collect();
        let next_id = products.len() as u64 + 1;

        Self {
            inner: Arc::new(RwLock::new(Inner { products, next_id })),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products: Vec::new(),
                next_id: 1,
            })),
        }
    }

    pub async fn create(&self, payload: ProductPayload) -> Product {
        let mut inner = self.inner.write().await;
        // id 只增不减，删除后也不会复用
        let id = inner.next_id;
        inner.next_id += 1;

        let product = payload.into_product(id);
        inner.products.push(product.clone());
        debug!("创建产品 id={} name={}", product.id, product.name);
        product
    }

    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    pub async fn find(&self, id: u64) -> Option<Product> {
        let inner = self.inner.read().await;
        inner.products.iter().find(|p| p.id == id).cloned()
    }

    /// 按 `product.id` 原地更新名称和价格，找不到时返回 `None`
    pub async fn update(&self, product: Product) -> Option<Product> {
        let mut inner = self.inner.write().await;
        let existing = inner.products.iter_mut().find(|p| p.id == product.id)?;
        existing.name = product.name;
        existing.price = product.price;
        debug!("更新产品 id={}", existing.id);
        Some(existing.clone())
    }

    pub async fn delete(&self, id: u64) {
        let mut inner = self.inner.write().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        debug!("删除产品 id={} 移除 {} 条", id, before - inner.products.len());
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
