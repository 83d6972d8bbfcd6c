//! # Post HTTP Handlers
//!
//! 게시글 리소스의 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 게시글 생성은 인증이 필요하므로 라우트 등록 시 `AuthMiddleware`가
//! 적용된 리소스에 연결됩니다. 메서드별로 인증 요구가 달라
//! 매크로 대신 `routes` 모듈에서 수동으로 등록합니다.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::posts::{NewPost, PostResponse};
use crate::domain::entities::Post;
use crate::repositories::posts::PostRepository;
use crate::validation::schemas::post_create_schema;

/// 게시글 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /posts` (Bearer 토큰 필요)
///
/// # 응답
///
/// * `201 Created` - 생성된 게시글
/// * `400 Bad Request` - 제목/본문 누락 등 검증 실패
/// * `401 Unauthorized` - 토큰 누락 또는 무효
pub async fn create_post(
    repo: web::Data<PostRepository>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let normalized = post_create_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let data: NewPost = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    let post = repo.create(Post::new(data.title, data.content)).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// 게시글 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /posts/{post_id}`
///
/// # 응답
///
/// * `200 OK` - 게시글 정보
/// * `400 Bad Request` - 잘못된 ID 형식
/// * `404 Not Found` - 해당 ID의 게시글 없음
pub async fn get_post(
    repo: web::Data<PostRepository>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = repo
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
