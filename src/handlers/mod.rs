//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 → 리포지토리 → 응답
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! ├─────────────────────────────────────────────┤
//!   MongoDB - 저장소
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 요청 간 상태를 전혀 보관하지 않습니다. 모든 협력자
//! (리포지토리, 토큰 서비스)는 `web::Data`로 주입됩니다.

pub mod auth;
pub mod comments;
pub mod posts;
pub mod products;
