//! Post Entity Implementation
//!
//! 블로그 게시글 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시글 엔티티
///
/// `posts` 컬렉션에 저장되는 게시글 문서입니다.
/// 생성과 ID 조회만 지원하며 수정/삭제 연산은 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시글 제목
    pub title: String,
    /// 게시글 본문
    pub content: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Post {
    /// 새 게시글 엔티티 생성
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: None,
            title,
            content,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
