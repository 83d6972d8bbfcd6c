//! # Product HTTP Handlers
//!
//! 상품 리소스의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/products` | 새 상품 생성 | 201 Created |
//! | `GET` | `/products` | 상품 목록 조회 | 200 OK |
//! | `GET` | `/products/{id}` | 상품 조회 | 200 OK |
//! | `PATCH` | `/products/{id}` | 상품 부분 수정 | 200 OK |
//! | `DELETE` | `/products/{id}` | 상품 삭제 | 200 OK |
//!
//! 모든 변경 요청 본문은 비정형 JSON으로 받은 뒤 검증 스키마를 통과한
//! 정규화 결과만 타입 구조체로 역직렬화합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::products::{NewProduct, ProductPatch, ProductResponse};
use crate::domain::entities::Product;
use crate::repositories::products::ProductRepository;
use crate::validation::schemas::{product_create_schema, product_update_schema};

/// 상품 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /products`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Keyboard",
///   "price": 49.9,
///   "stock": 100,
///   "tags": ["usb"]
/// }
/// ```
///
/// `stock`과 `tags`는 생략 가능하며 각각 0과 빈 배열로 기본 적용됩니다.
///
/// # 응답
///
/// * `201 Created` - 생성된 상품 (ID, 타임스탬프 포함)
/// * `400 Bad Request` - 검증 실패 (필드명을 포함한 메시지)
#[post("")]
pub async fn create_product(
    repo: web::Data<ProductRepository>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 및 정규화
    let normalized = product_create_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let data: NewProduct = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    let product = repo
        .create(Product::new(data.name, data.price, data.stock, data.tags))
        .await?;

    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// 상품 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /products`
///
/// # 응답
///
/// * `200 OK` - 전체 상품 배열 (비어 있을 수 있음)
#[get("")]
pub async fn list_products(
    repo: web::Data<ProductRepository>,
) -> Result<HttpResponse, AppError> {
    let products = repo.find_all().await?;

    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 상품 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /products/{id}`
///
/// # 응답
///
/// * `200 OK` - 상품 정보
/// * `400 Bad Request` - 잘못된 ID 형식
/// * `404 Not Found` - 해당 ID의 상품 없음
#[get("/{id}")]
pub async fn get_product(
    repo: web::Data<ProductRepository>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// 상품 부분 수정 핸들러
///
/// # 엔드포인트
///
/// `PATCH /products/{id}`
///
/// 최소 한 개의 필드를 포함해야 하며, 빈 페이로드는 상품 존재 여부와
/// 무관하게 400으로 거부됩니다.
///
/// # 응답
///
/// * `200 OK` - 수정 후의 최신 상품
/// * `400 Bad Request` - 검증 실패 또는 잘못된 ID 형식
/// * `404 Not Found` - 해당 ID의 상품 없음
#[patch("/{id}")]
pub async fn update_product(
    repo: web::Data<ProductRepository>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 (업데이트 스키마: 모든 필드 선택, 최소 1개)
    let normalized = product_update_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let patch: ProductPatch = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    let product = repo
        .update(&id, patch.into_update_document())
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// 상품 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /products/{id}`
///
/// 삭제는 멱등적이지 않습니다. 같은 ID로 두 번째 삭제를 요청하면
/// 404가 반환됩니다.
///
/// # 응답
///
/// * `200 OK` - 삭제된 상품명을 포함한 확인 메시지
/// * `400 Bad Request` - 잘못된 ID 형식
/// * `404 Not Found` - 해당 ID의 상품 없음
#[delete("/{id}")]
pub async fn delete_product(
    repo: web::Data<ProductRepository>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = repo
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Product {} deleted successfully", product.name)
    })))
}
