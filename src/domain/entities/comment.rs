//! Comment Entity Implementation
//!
//! 게시글에 달리는 댓글 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
///
/// `comments` 컬렉션에 저장되는 댓글 문서입니다.
/// 소속 게시글(`post`)에 대한 참조가 필수이며, 게시글 범위 엔드포인트를
/// 통해서만 생성됩니다. 작성자(`username`)는 검증된 Bearer 토큰의
/// 클레임에서 가져옵니다. 삭제 연산은 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소속 게시글 ID
    pub post: ObjectId,
    /// 작성자 사용자명 (토큰 클레임에서 추출)
    pub username: String,
    /// 댓글 본문
    pub text: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Comment {
    /// 새 댓글 엔티티 생성
    pub fn new(post: ObjectId, username: String, text: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            post,
            username,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
