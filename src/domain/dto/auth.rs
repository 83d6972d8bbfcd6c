//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};

/// 데모 로그인 요청 데이터
#[derive(Debug, Clone, Deserialize)]
pub struct DemoLoginRequest {
    pub username: String,
}

/// 데모 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize)]
pub struct DemoLoginResponse {
    pub username: String,
    pub token: String,
}
