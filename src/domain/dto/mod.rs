//! 요청/응답 DTO 모듈
//!
//! 요청 DTO는 검증 스키마를 통과한 정규화 페이로드에서만 역직렬화되고,
//! 응답 DTO는 엔티티의 `_id`를 hex 문자열로 변환하여 노출합니다.

pub mod auth;
pub mod comments;
pub mod posts;
pub mod products;
