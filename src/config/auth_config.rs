//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 만료 시간 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="1"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret()?;
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;

use crate::config::Environment;
use crate::core::errors::AppError;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키와 만료 시간을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게
/// 3. **환경별 분리**: 환경마다 다른 키 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// `JWT_SECRET` 환경 변수가 설정되지 않은 경우,
    /// 개발/테스트 환경에서만 경고와 함께 개발용 기본키를 사용하고
    /// 그 외 환경에서는 에러를 반환하여 기동을 중단시킵니다.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 서명 비밀키
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션/스테이징 환경에서 키 미설정
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Result<String, AppError> {
        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(secret),
            _ => match Environment::current() {
                Environment::Development | Environment::Test => {
                    log::warn!(
                        "JWT_SECRET not set, using development default (not secure for production!)"
                    );
                    Ok("dev_secret".to_string())
                }
                _ => Err(AppError::InternalError(
                    "JWT_SECRET must be set outside development/test environments".to_string(),
                )),
            },
        }
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 1시간
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="2"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1)
    }
}
