// src/middleware/auth.rs

use crate::api::HasJwtManager;
use crate::config::AppConfig;
use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::utils::jwt::JwtError;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};
use uuid::Uuid;

/// 認証済みユーザー
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: UserClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> Uuid {
        self.claims.user_id
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: HasJwtManager + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookie_jar = CookieJar::from_headers(&parts.headers);
        let token = extract_token(
            &parts.headers,
            &cookie_jar,
            &state.cookie_config().access_token_name,
        )
        .ok_or_else(|| {
            warn!(path = %parts.uri.path(), "Authentication attempt without token");
            AppError::Unauthorized("No token, authorization denied".to_string())
        })?;

        let access_claims = state
            .jwt_manager()
            .verify_access_token(&token)
            .map_err(|e| {
                warn!(path = %parts.uri.path(), error = %e, "JWT verification failed");
                match e {
                    JwtError::TokenExpired => {
                        AppError::Unauthorized("Access token has expired".to_string())
                    }
                    _ => AppError::Unauthorized("Token is not valid".to_string()),
                }
            })?;

        debug!(
            user_id = %access_claims.user.user_id,
            path = %parts.uri.path(),
            "User authenticated"
        );

        Ok(AuthenticatedUser::new(access_claims.user))
    }
}

/// Authorization ヘッダー優先、なければ Cookie
fn extract_token(headers: &HeaderMap, cookie_jar: &CookieJar, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    bearer.or_else(|| {
        cookie_jar
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
    })
}

/// CORS 設定（不正なオリジンは読み飛ばす）
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// セキュリティヘッダーミドルウェア
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_prefers_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer header-token"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("access_token=cookie-token"),
        );
        let jar = CookieJar::from_headers(&headers);

        assert_eq!(
            extract_token(&headers, &jar, "access_token").as_deref(),
            Some("header-token")
        );
    }

    #[test]
    fn test_extract_token_cookie_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; access_token=cookie-token"),
        );
        let jar = CookieJar::from_headers(&headers);

        assert_eq!(
            extract_token(&headers, &jar, "access_token").as_deref(),
            Some("cookie-token")
        );
        assert!(extract_token(&HeaderMap::new(), &CookieJar::new(), "access_token").is_none());
    }
}
