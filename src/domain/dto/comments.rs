//! 댓글 요청/응답 DTO

use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Comment;

/// 댓글 생성 요청 데이터
#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub text: String,
}

/// 댓글 부분 업데이트 요청 데이터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPatch {
    pub text: Option<String>,
}

impl CommentPatch {
    /// 제공된 필드만 포함하는 MongoDB `$set` 문서를 생성합니다
    pub fn into_update_document(self) -> Document {
        let mut doc = Document::new();

        if let Some(text) = self.text {
            doc.insert("text", text);
        }

        doc
    }
}

/// 댓글 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    /// 소속 게시글 ID (hex 문자열)
    pub post: String,
    pub username: String,
    pub text: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id_string().unwrap_or_default(),
            post: comment.post.to_hex(),
            username: comment.username,
            text: comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_document_only_sets_text() {
        let patch = CommentPatch {
            text: Some("Updated comment".to_string()),
        };

        let doc = patch.into_update_document();

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get_str("text").unwrap(), "Updated comment");
    }
}
