//! # Comment HTTP Handlers
//!
//! 게시글 범위의 댓글 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 생성/수정은 인증이 필요하고 목록 조회는 공개입니다.
//! 작성자 사용자명은 `AuthMiddleware`가 요청 Extensions에 저장한
//! [`AuthenticatedUser`]에서 가져옵니다.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::comments::{CommentPatch, CommentResponse, NewComment};
use crate::domain::entities::Comment;
use crate::domain::models::AuthenticatedUser;
use crate::repositories::comments::CommentRepository;
use crate::validation::schemas::{comment_create_schema, comment_update_schema};

/// 댓글 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /posts/{post_id}/comments` (Bearer 토큰 필요)
///
/// # 응답
///
/// * `201 Created` - 생성된 댓글 (작성자 사용자명 포함)
/// * `400 Bad Request` - 본문 누락 또는 잘못된 게시글 ID 형식
/// * `401 Unauthorized` - 토큰 누락 또는 무효
pub async fn create_comment(
    req: HttpRequest,
    repo: web::Data<CommentRepository>,
    post_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let post_id = ObjectId::parse_str(post_id.as_str()).map_err(|_| AppError::InvalidIdentifier)?;

    let normalized = comment_create_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let data: NewComment = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    // 미들웨어가 저장한 인증 사용자 정보
    let username = req
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.username.clone())
        .ok_or_else(|| AppError::AuthenticationError("Missing Bearer token".to_string()))?;

    let comment = repo
        .create(Comment::new(post_id, username, data.text))
        .await?;

    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

/// 게시글 댓글 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /posts/{post_id}/comments`
///
/// # 응답
///
/// * `200 OK` - 생성 시간 오름차순으로 정렬된 댓글 배열
/// * `400 Bad Request` - 잘못된 게시글 ID 형식
pub async fn list_comments(
    repo: web::Data<CommentRepository>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post_id = ObjectId::parse_str(post_id.as_str()).map_err(|_| AppError::InvalidIdentifier)?;

    let comments = repo.find_by_post(post_id).await?;

    let response: Vec<CommentResponse> = comments.into_iter().map(CommentResponse::from).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 댓글 부분 수정 핸들러
///
/// # 엔드포인트
///
/// `PATCH /posts/{post_id}/comments/{comment_id}` (Bearer 토큰 필요)
///
/// 댓글은 자체 ID로 조회/수정되며, 경로의 게시글 ID는 리소스 계층
/// 표현을 위한 범위 지정입니다.
///
/// # 응답
///
/// * `200 OK` - 수정 후의 최신 댓글
/// * `400 Bad Request` - 빈 페이로드 등 검증 실패
/// * `404 Not Found` - 해당 ID의 댓글 없음
pub async fn update_comment(
    repo: web::Data<CommentRepository>,
    path: web::Path<(String, String)>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let (_post_id, comment_id) = path.into_inner();

    let normalized = comment_update_schema()
        .validate(&payload)
        .map_err(AppError::ValidationError)?;

    let patch: CommentPatch = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| AppError::InternalError(format!("정규화된 페이로드 역직렬화 실패: {}", e)))?;

    let comment = repo
        .update(&comment_id, patch.into_update_document())
        .await?
        .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}
