//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 부팅 시 한 번 생성된 `Arc<Database>`를 생성자로
//! 주입받아 하나의 MongoDB 컬렉션을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::Database;
//! use crate::repositories::products::ProductRepository;
//!
//! let database = Arc::new(Database::new().await?);
//! let product_repo = ProductRepository::new(database.clone());
//! let product = product_repo.find_by_id("507f1f77bcf86cd799439011").await?;
//! ```

pub mod comments;
pub mod posts;
pub mod products;
