//! 댓글 리포지토리 모듈

pub mod comment_repo;

pub use comment_repo::CommentRepository;
