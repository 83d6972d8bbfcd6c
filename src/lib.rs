//! 상품/블로그/댓글 API 백엔드
//!
//! MongoDB 문서 저장소를 사용하는 Rust 기반의 REST CRUD 서비스입니다.
//! 상품 카탈로그, 블로그 게시글, 게시글 범위 댓글을 제공하며
//! 변경 엔드포인트는 JWT Bearer 토큰으로 보호됩니다.
//!
//! # Features
//!
//! - **상품 CRUD**: 생성/목록/조회/부분 수정/삭제
//! - **블로그**: 게시글 생성/조회, 게시글 범위 댓글 생성/목록/수정
//! - **선언적 검증**: 비정형 JSON 페이로드를 스키마 규칙 목록으로 검증
//! - **JWT 인증**: 데모 로그인으로 발급되는 고정 TTL 토큰
//! - **MongoDB**: 단일 문서 원자성 기반의 문서 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증 → 리포지토리 → 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_blog_backend::db::Database;
//! use shop_blog_backend::repositories::products::ProductRepository;
//! use shop_blog_backend::services::auth::TokenService;
//!
//! let database = Arc::new(Database::new().await?);
//! let product_repo = ProductRepository::new(database.clone());
//! let token_service = TokenService::from_env()?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
