//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::AuthenticatedUser;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGuardService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // app_data에서 TokenService 가져오기
            let token_service = match req.app_data::<web::Data<TokenService>>() {
                Some(token_service) => token_service.clone(),
                None => {
                    log::error!("TokenService가 app_data에 등록되어 있지 않습니다");
                    let response = HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": "Server error"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            };

            // Authorization 헤더에서 토큰 추출 및 검증
            match authenticate(&req, &token_service) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 {}", user.username);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": err.to_string()
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// 헤더 자체가 없거나 Bearer 형식이 아니면 "Missing Bearer token",
/// 토큰 검증에 실패하면 "Invalid or expired token" 에러를 반환합니다.
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Missing Bearer token".to_string()))?;

    // Bearer 토큰 추출
    let token = token_service
        .extract_bearer_token(auth_header)
        .map_err(|_| AppError::AuthenticationError("Missing Bearer token".to_string()))?;

    // 토큰 검증 및 클레임 추출
    let claims = token_service
        .verify_token(token)
        .map_err(|_| AppError::AuthenticationError("Invalid or expired token".to_string()))?;

    Ok(AuthenticatedUser {
        username: claims.sub,
    })
}
