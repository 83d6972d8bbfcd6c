//! # 게시글 리포지토리 구현
//!
//! 게시글 엔티티의 데이터 액세스 계층입니다.
//! 현재 범위에서 게시글은 생성과 ID 조회만 지원합니다.

use std::sync::Arc;

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::Post;

/// 게시글 컬렉션 이름
const COLLECTION_NAME: &str = "posts";

/// 게시글 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl PostRepository {
    /// 주입된 데이터베이스 연결로 리포지토리를 생성합니다
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>(COLLECTION_NAME)
    }

    /// 새 게시글 생성
    ///
    /// # Returns
    ///
    /// * `Ok(Post)` - 생성된 게시글 (ID 포함)
    pub async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = Some(
            result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| {
                    AppError::InternalError("Inserted post has no ObjectId".to_string())
                })?,
        );

        Ok(post)
    }

    /// ID로 게시글 조회
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Post))` - 게시글을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 게시글이 없는 경우
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidIdentifier` - 잘못된 ObjectId 형식
    /// * `AppError::DatabaseError` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = ObjectId::parse_str(id).map_err(|_| AppError::InvalidIdentifier)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
