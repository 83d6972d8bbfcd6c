//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `products` 컬렉션에 대한 CRUD 연산을 제공합니다.
//!
//! ## 특징
//!
//! - **생성자 주입**: 부팅 시 생성된 `Arc<Database>`를 주입받아
//!   핸들러를 대체 저장소로 테스트할 수 있게 합니다
//! - **단일 문서 원자성**: 모든 쓰기는 MongoDB 단일 문서 연산이며
//!   다중 문서 트랜잭션을 사용하지 않습니다
//! - **식별자 구분**: 형식이 잘못된 ID(`InvalidIdentifier`)와
//!   존재하지 않는 ID(`Ok(None)`)를 구분하여 반환합니다

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, ErrorContext};
use crate::db::Database;
use crate::domain::entities::Product;

/// 상품 컬렉션 이름
const COLLECTION_NAME: &str = "products";

/// 상품 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **InvalidIdentifier**: ObjectId 로 해석할 수 없는 ID 형식
#[derive(Clone)]
pub struct ProductRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl ProductRepository {
    /// 주입된 데이터베이스 연결로 리포지토리를 생성합니다
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.get_database().collection::<Product>(COLLECTION_NAME)
    }

    /// 새 상품 생성
    ///
    /// 검증을 통과한 상품 엔티티를 저장하고, MongoDB가 할당한 ID를
    /// 반영한 엔티티를 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `product` - 저장할 상품 (ID는 자동 할당됨)
    ///
    /// # Returns
    ///
    /// * `Ok(Product)` - 생성된 상품 (ID 포함)
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn create(&self, mut product: Product) -> Result<Product, AppError> {
        let result = self
            .collection()
            .insert_one(&product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        product.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| {
                    AppError::InternalError("Inserted product has no ObjectId".to_string())
                })?,
        );

        Ok(product)
    }

    /// 모든 상품 조회
    ///
    /// 저장 순서 그대로 전체 상품을 반환합니다.
    /// 페이지네이션이나 정렬 보장은 없습니다 (현재 범위에서 의도된 제약).
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<Product>>()
            .await
            .context("Failed to collect products")
    }

    /// ID로 상품 조회
    ///
    /// # Arguments
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Product))` - 상품을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 상품이 없는 경우
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidIdentifier` - 잘못된 ObjectId 형식
    /// * `AppError::DatabaseError` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 상품 부분 업데이트
    ///
    /// `$set` 연산으로 제공된 필드만 변경하고, `updated_at`을 갱신합니다.
    /// 조회와 업데이트를 `find_one_and_update`로 원자적으로 수행하며
    /// 마지막 쓰기가 이기는(last-write-wins) 의미론을 가집니다.
    ///
    /// # Arguments
    ///
    /// * `id` - 업데이트할 상품의 ID (ObjectId 문자열)
    /// * `update_doc` - 변경할 필드들을 포함한 MongoDB Document
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Product))` - 업데이트 후의 최신 상품
    /// * `Ok(None)` - 해당 ID의 상품이 존재하지 않음
    pub async fn update(
        &self,
        id: &str,
        mut update_doc: Document,
    ) -> Result<Option<Product>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)?;

        update_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 상품 삭제
    ///
    /// 삭제된 문서를 반환하여 핸들러가 확인 메시지에 상품명을
    /// 포함할 수 있게 합니다. 물리적 삭제이며 복구할 수 없습니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Product))` - 삭제된 상품
    /// * `Ok(None)` - 해당 ID의 상품이 존재하지 않음 (반복 삭제 포함)
    pub async fn delete(&self, id: &str) -> Result<Option<Product>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)?;

        self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
