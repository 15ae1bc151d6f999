//! 产品管理：模型、内存存储、处理器

pub mod handler;
pub mod model;
pub mod service;

pub use handler::AppState;
pub use model::{Product, ProductPayload};
pub use service::ProductStore;
