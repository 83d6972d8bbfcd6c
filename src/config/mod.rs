//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경 관련 설정
//! - [`auth_config`] - JWT 토큰 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 기동 실패
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="shop_blog_dev"
//!
//! # JWT 설정 (프로덕션에서 필수)
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="1"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
