//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 사용자명 클레임을 담은 액세스 토큰의 발급과 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 부팅 시 한 번 생성되어 `web::Data`로 핸들러와 미들웨어에 공유됩니다.
#[derive(Clone)]
pub struct TokenService {
    /// 서명 비밀키
    secret: String,
    /// 토큰 만료 시간 (시간 단위)
    expiration_hours: i64,
}

impl TokenService {
    /// 명시적 설정값으로 서비스를 생성합니다 (테스트용)
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 환경 설정에서 서비스를 생성합니다
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션/스테이징 환경에서
    ///   `JWT_SECRET` 미설정 (기동 중단 대상)
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            secret: JwtConfig::secret()?,
            expiration_hours: JwtConfig::expiration_hours(),
        })
    }

    /// 사용자명으로 JWT 액세스 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `username` - 토큰 주체가 될 사용자명
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 발급 시각과 만료 시각이 포함된 서명 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token("alice")?;
    /// ```
    pub fn issue_token(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 잘못된 형식
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError("Invalid token".to_string()),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new("test_secret", 1);

        let token = service.issue_token("alice").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
        // 1시간 TTL
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new("test_secret", 1);

        // 만료 시각이 과거인 토큰을 직접 서명
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "alice".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        let error = service.verify_token(&token).unwrap_err();

        match error {
            AppError::AuthenticationError(msg) => assert!(msg.contains("expired")),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = TokenService::new("test_secret", 1);
        let forged = TokenService::new("other_secret", 1)
            .issue_token("alice")
            .unwrap();

        let error = service.verify_token(&forged).unwrap_err();

        assert!(matches!(error, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new("test_secret", 1);

        assert!(service.verify_token("not-a-jwt").is_err());
        assert!(service.verify_token("").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("test_secret", 1);

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
