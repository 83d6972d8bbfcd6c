//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 사용자 정보를 추출합니다.
//! 게시글/댓글 변경 엔드포인트처럼 인증이 필요한 라우트에만 선택적으로
//! 적용됩니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthGuardService;

/// JWT 인증 미들웨어
///
/// 유효한 Bearer 토큰이 없는 요청을 401로 거부하고,
/// 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)를
/// 요청 Extensions에 저장합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpMessage, HttpRequest, HttpResponse};

    use super::*;
    use crate::domain::models::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(req: HttpRequest) -> HttpResponse {
        let username = req
            .extensions()
            .get::<AuthenticatedUser>()
            .map(|user| user.username.clone())
            .unwrap_or_default();

        HttpResponse::Ok().body(username)
    }

    fn test_token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("test_secret", 1))
    }

    #[actix_web::test]
    async fn test_missing_token_is_rejected() {
        let app = test::init_service(
            App::new().app_data(test_token_service()).service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get().uri("/protected").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Missing Bearer token"));
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_rejected() {
        let app = test::init_service(
            App::new().app_data(test_token_service()).service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Basic abc"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Missing Bearer token"));
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let app = test::init_service(
            App::new().app_data(test_token_service()).service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not-a-valid-token"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Invalid or expired token"));
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_user() {
        let token_service = test_token_service();
        let token = token_service.issue_token("alice").unwrap();

        let app = test::init_service(
            App::new().app_data(token_service.clone()).service(
                web::resource("/protected")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let body = test::read_body(response).await;
        assert_eq!(body.as_ref(), b"alice");
    }
}
