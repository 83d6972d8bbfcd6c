//! Product Entity Implementation
//!
//! 상품 카탈로그의 핵심 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// `products` 컬렉션에 저장되는 상품 문서입니다.
///
/// ## 불변 조건
///
/// - `price`는 항상 0보다 큽니다
/// - `stock`은 항상 0 이상입니다
///
/// 두 조건 모두 검증 스키마에서 보장되며, 리포지토리는 검증을 통과한
/// 값만 전달받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명 (2~50자)
    pub name: String,
    /// 가격 (양수)
    pub price: f64,
    /// 재고 수량 (0 이상)
    pub stock: i64,
    /// 상품 태그 목록
    pub tags: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Product {
    /// 새 상품 엔티티 생성
    ///
    /// ID는 저장 시점에 MongoDB가 할당하며, 생성/수정 시간은 현재 시각으로
    /// 초기화됩니다.
    pub fn new(name: String, price: f64, stock: i64, tags: Vec<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            price,
            stock,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
