//! 상품 요청/응답 DTO
//!
//! 검증 스키마를 통과한 정규화 페이로드에서 역직렬화되는 요청 타입과,
//! 엔티티를 클라이언트 응답 형태로 변환하는 응답 타입을 정의합니다.

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// 상품 생성 요청 데이터
///
/// [`product_create_schema`](crate::validation::schemas::product_create_schema)를
/// 통과한 정규화 객체에서만 생성됩니다. 스키마가 기본값(`stock: 0`,
/// `tags: []`)을 이미 적용한 상태입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 상품 부분 업데이트 요청 데이터
///
/// 존재하는 필드만 `$set` 문서로 변환됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub tags: Option<Vec<String>>,
}

impl ProductPatch {
    /// 제공된 필드만 포함하는 MongoDB `$set` 문서를 생성합니다
    pub fn into_update_document(self) -> Document {
        let mut doc = Document::new();

        if let Some(name) = self.name {
            doc.insert("name", name);
        }
        if let Some(price) = self.price {
            doc.insert("price", price);
        }
        if let Some(stock) = self.stock {
            doc.insert("stock", stock);
        }
        if let Some(tags) = self.tags {
            doc.insert("tags", tags);
        }

        doc
    }
}

/// 상품 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub tags: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id_string().unwrap_or_default(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            tags: product.tags,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_new_product_from_normalized_payload() {
        let normalized = json!({
            "name": "Keyboard",
            "price": 49.9,
            "stock": 100,
            "tags": ["usb"]
        });

        let data: NewProduct = serde_json::from_value(normalized).unwrap();

        assert_eq!(data.name, "Keyboard");
        assert_eq!(data.price, 49.9);
        assert_eq!(data.stock, 100);
        assert_eq!(data.tags, vec!["usb".to_string()]);
    }

    #[test]
    fn test_patch_document_contains_only_provided_fields() {
        let patch = ProductPatch {
            price: Some(39.9),
            ..ProductPatch::default()
        };

        let doc = patch.into_update_document();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_f64("price").unwrap(), 39.9);
        assert!(!doc.contains_key("name"));
        assert!(!doc.contains_key("stock"));
        assert!(!doc.contains_key("tags"));
    }

    #[test]
    fn test_patch_from_normalized_update_payload() {
        let normalized: Value = json!({ "name": "Monitor", "stock": 3 });
        let patch: ProductPatch = serde_json::from_value(normalized).unwrap();
        let doc = patch.into_update_document();

        assert_eq!(doc.get_str("name").unwrap(), "Monitor");
        assert_eq!(doc.get_i64("stock").unwrap(), 3);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_response_exposes_hex_id() {
        let mut product = Product::new("Headset".to_string(), 79.9, 0, vec![]);
        let oid = mongodb::bson::oid::ObjectId::new();
        product.id = Some(oid);

        let response = ProductResponse::from(product);

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.name, "Headset");
    }
}
