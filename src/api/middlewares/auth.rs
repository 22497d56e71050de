use crate::domain::error::AppError;
use crate::domain::models::member::Authentication;
use crate::domain::models::token::{BEARER_PREFIX, TokenKind};
use crate::domain::services::token::TokenService;
use actix_web::dev::Payload;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::sync::Arc;

/// Authenticated caller, resolved from the access token before the handler
/// runs and handed to it as a plain argument.
#[derive(Debug)]
pub struct AuthMember {
    pub authentication: Authentication,
}

/// Reads the header selected by `kind` and strips the `Bearer ` prefix.
/// A missing header, a missing prefix or an empty value is not an error,
/// just absence.
pub fn resolve_token(req: &HttpRequest, kind: TokenKind) -> Option<String> {
    let header = req.headers().get(kind.header())?;
    let value = header.to_str().ok()?;

    value.strip_prefix(BEARER_PREFIX).map(str::to_string)
}

/// Writes a freshly issued access token (prefixed form) into the response,
/// so clients can pick it up on refresh-on-response flows.
#[allow(dead_code)]
pub fn set_access_token_header(res: &mut HttpResponse, access_token: &str) {
    res.headers_mut().insert(
        HeaderName::from_static("access_key"),
        HeaderValue::from_str(access_token).unwrap(),
    );
}

impl FromRequest for AuthMember {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<AuthMember, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        async move {
            let token_service = match req.app_data::<web::Data<Arc<dyn TokenService>>>() {
                Some(service) => service,
                None => return Err(AppError::InternalError().trace("TokenService is not defined")),
            };

            let token = match resolve_token(&req, TokenKind::Access) {
                Some(token) => token,
                None => return Err(AppError::Unauthorized()),
            };

            if !token_service.validate(&token) {
                return Err(AppError::Unauthorized());
            }

            let claims = token_service.claims(&token)?;
            let authentication = token_service.authentication(&claims.sub).await?;

            Ok(AuthMember { authentication })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use tokio::sync::Mutex;

    use crate::domain::models::member::{Member, MemberRole};
    use crate::domain::models::token::ACCESS_KEY;
    use crate::infrastructure::repositories::member::mock::MemberRepositoryImpl;
    use crate::infrastructure::repositories::refresh_token::mock::RefreshTokenRepositoryImpl;
    use crate::services::token::TokenServiceImpl;
    use crate::tests::utils::crypto::generate_signing_key;

    use super::*;

    use rstest::*;

    const EMAIL: &str = "user@example.com";

    #[fixture]
    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(TokenServiceImpl::new(
            generate_signing_key(),
            Arc::new(RefreshTokenRepositoryImpl {
                records: Mutex::new(Vec::new()),
            }),
            Arc::new(MemberRepositoryImpl {
                members: Mutex::new(vec![Member {
                    id: "1".to_string(),
                    email: EMAIL.to_string(),
                    role: MemberRole::Member,
                }]),
            }),
        ))
    }

    fn request_with_header(name: &str, value: &str) -> HttpRequest {
        TestRequest::default()
            .insert_header((name, value))
            .to_http_request()
    }

    #[test]
    fn test_resolve_token_missing_header() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(resolve_token(&req, TokenKind::Access), None);
    }

    #[test]
    fn test_resolve_token_without_prefix() {
        let req = request_with_header(ACCESS_KEY, "abc.def.ghi");

        assert_eq!(resolve_token(&req, TokenKind::Access), None);
    }

    #[test]
    fn test_resolve_token_empty_value() {
        let req = request_with_header(ACCESS_KEY, "");

        assert_eq!(resolve_token(&req, TokenKind::Access), None);
    }

    #[test]
    fn test_resolve_token_strips_prefix() {
        let req = request_with_header(ACCESS_KEY, "Bearer abc.def.ghi");

        assert_eq!(
            resolve_token(&req, TokenKind::Access).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_resolve_token_selects_header_by_kind() {
        let req = request_with_header("REFRESH_KEY", "Bearer abc.def.ghi");

        assert_eq!(resolve_token(&req, TokenKind::Access), None);
        assert_eq!(
            resolve_token(&req, TokenKind::Refresh).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_set_access_token_header() {
        let mut res = HttpResponse::Ok().finish();

        set_access_token_header(&mut res, "Bearer abc.def.ghi");

        assert_eq!(
            res.headers().get(ACCESS_KEY).unwrap().to_str().unwrap(),
            "Bearer abc.def.ghi"
        );
    }

    async fn index(_: AuthMember) -> impl Responder {
        HttpResponse::new(StatusCode::OK)
    }

    async fn send_req(header: Option<(&str, String)>, token_service: Arc<dyn TokenService>) -> StatusCode {
        let app = test::init_service(
            App::new()
                .route("/index", web::get().to(index))
                .app_data(web::Data::new(token_service)),
        )
        .await;

        let mut req = TestRequest::get().uri("/index");

        if let Some((name, value)) = header {
            req = req.insert_header((name, value));
        }

        let res = req.send_request(&app).await;

        res.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn test_authorized_access(token_service: Arc<dyn TokenService>) {
        let token = token_service
            .issue(EMAIL, TokenKind::Access, MemberRole::Member)
            .unwrap();

        assert_eq!(
            send_req(Some((ACCESS_KEY, token)), token_service).await,
            StatusCode::OK
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_missing_token(token_service: Arc<dyn TokenService>) {
        assert_eq!(send_req(None, token_service).await, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn test_invalid_token(token_service: Arc<dyn TokenService>) {
        assert_eq!(
            send_req(
                Some((ACCESS_KEY, "Bearer eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzUxMiJ9".to_string())),
                token_service
            )
            .await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn test_unknown_subject(token_service: Arc<dyn TokenService>) {
        let token = token_service
            .issue("ghost@example.com", TokenKind::Access, MemberRole::Member)
            .unwrap();

        assert_eq!(
            send_req(Some((ACCESS_KEY, token)), token_service).await,
            StatusCode::UNAUTHORIZED
        );
    }
}
