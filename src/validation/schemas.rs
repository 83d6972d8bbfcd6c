//! 리소스별 요청 본문 스키마 정의
//!
//! 각 리소스는 두 가지 스키마 변형을 가집니다:
//!
//! - **생성 스키마**: 필수 필드는 모두 존재해야 하며, 누락된 선택 필드에는
//!   기본값이 적용됩니다
//! - **업데이트 스키마**: 모든 필드가 선택이지만 최소 한 개의 필드는
//!   존재해야 합니다 (빈 페이로드 거부)

use serde_json::json;

use crate::validation::{FieldRule, Schema};

/// 상품 생성 스키마
///
/// - `name`: 필수, 2~50자 문자열
/// - `price`: 필수, 0보다 큰 숫자
/// - `stock`: 0 이상의 정수, 기본값 0
/// - `tags`: 문자열 배열, 기본값 빈 배열
pub fn product_create_schema() -> Schema {
    Schema::new(vec![
        FieldRule::string("name").length(2, 50).required(),
        FieldRule::number("price").positive().required(),
        FieldRule::integer("stock").min(0).default(0),
        FieldRule::string_array("tags").default(json!([])),
    ])
}

/// 상품 부분 업데이트 스키마
///
/// 생성 스키마와 동일한 필드 제약을 가지되 모든 필드가 선택이며,
/// 최소 한 개의 필드가 필요합니다.
pub fn product_update_schema() -> Schema {
    Schema::new(vec![
        FieldRule::string("name").length(2, 50),
        FieldRule::number("price").positive(),
        FieldRule::integer("stock").min(0),
        FieldRule::string_array("tags"),
    ])
    .min_fields(1)
}

/// 게시글 생성 스키마
pub fn post_create_schema() -> Schema {
    Schema::new(vec![
        FieldRule::string("title").length(1, 200).required(),
        FieldRule::string("content").length(1, 10_000).required(),
    ])
}

/// 댓글 생성 스키마
pub fn comment_create_schema() -> Schema {
    Schema::new(vec![FieldRule::string("text").length(1, 2_000).required()])
}

/// 댓글 부분 업데이트 스키마
pub fn comment_update_schema() -> Schema {
    Schema::new(vec![FieldRule::string("text").length(1, 2_000)]).min_fields(1)
}

/// 데모 로그인 요청 스키마
pub fn demo_login_schema() -> Schema {
    Schema::new(vec![FieldRule::string("username").length(1, 30).required()])
}
