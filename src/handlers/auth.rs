//! # Authentication HTTP Handlers
//!
//! 데모 로그인 엔드포인트를 처리하는 핸들러입니다.
//! 사용자명만으로 고정 TTL의 JWT 토큰을 발급합니다.

use actix_web::{post, web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::auth::{DemoLoginRequest, DemoLoginResponse};
use crate::services::auth::TokenService;
use crate::validation::schemas::demo_login_schema;

/// 데모 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /auth/demo-login`
///
/// # 요청 본문
///
/// ```json
/// { "username": "alice" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "username": "alice", "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// ## 실패 (400 Bad Request)
/// ```json
/// { "error": "\"username\" is required" }
/// ```
#[post("/demo-login")]
pub async fn demo_login(
    token_service: web::Data<TokenService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let normalized = demo_login_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let data: DemoLoginRequest = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    let token = token_service.issue_token(&data.username)?;

    log::info!("데모 토큰 발급: {}", data.username);

    Ok(HttpResponse::Ok().json(DemoLoginResponse {
        username: data.username,
        token,
    }))
}
