//! Message Entity Implementation
//!
//! 사용자 간 쪽지 도메인 엔티티입니다.
//! `messages` 컬렉션의 문서 형태를 정의합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 쪽지 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 발신자 식별자
    pub sender_id: String,
    /// 수신자 식별자
    pub receiver_id: String,
    /// 쪽지 내용
    pub content: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Message {
    /// 새 쪽지 엔티티 생성
    pub fn new(sender_id: String, receiver_id: String, content: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            sender_id,
            receiver_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_between_users() {
        let message = Message::new(
            "alice".to_string(),
            "bob".to_string(),
            "Hello!".to_string(),
        );

        assert_eq!(message.sender_id, "alice");
        assert_eq!(message.receiver_id, "bob");
        assert!(message.id.is_none());
    }
}
