//! 게시글 요청/응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;

/// 게시글 생성 요청 데이터
///
/// [`post_create_schema`](crate::validation::schemas::post_create_schema)를
/// 통과한 정규화 객체에서만 생성됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// 게시글 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id_string().unwrap_or_default(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}
