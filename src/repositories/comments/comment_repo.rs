//! # 댓글 리포지토리 구현
//!
//! 댓글 엔티티의 데이터 액세스 계층입니다.
//! 댓글은 항상 게시글 범위 안에서 생성/조회되며, 목록은 생성 시간
//! 오름차순으로 정렬됩니다. 삭제 연산은 제공하지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, ErrorContext};
use crate::db::Database;
use crate::domain::entities::Comment;

/// 댓글 컬렉션 이름
const COLLECTION_NAME: &str = "comments";

/// 댓글 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct CommentRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl CommentRepository {
    /// 주입된 데이터베이스 연결로 리포지토리를 생성합니다
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Comment> {
        self.db.get_database().collection::<Comment>(COLLECTION_NAME)
    }

    /// 새 댓글 생성
    pub async fn create(&self, mut comment: Comment) -> Result<Comment, AppError> {
        let result = self
            .collection()
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        comment.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| {
                    AppError::InternalError("Inserted comment has no ObjectId".to_string())
                })?,
        );

        Ok(comment)
    }

    /// 게시글의 모든 댓글 조회
    ///
    /// 생성 시간 오름차순으로 정렬하여 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `post_id` - 소속 게시글의 ObjectId
    pub async fn find_by_post(&self, post_id: ObjectId) -> Result<Vec<Comment>, AppError> {
        let cursor = self
            .collection()
            .find(doc! { "post": post_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<Comment>>()
            .await
            .context("Failed to collect comments")
    }

    /// 댓글 부분 업데이트
    ///
    /// `$set` 연산으로 제공된 필드만 변경하고 `updated_at`을 갱신합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Comment))` - 업데이트 후의 최신 댓글
    /// * `Ok(None)` - 해당 ID의 댓글이 존재하지 않음
    pub async fn update(
        &self,
        id: &str,
        mut update_doc: Document,
    ) -> Result<Option<Comment>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)?;

        update_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
