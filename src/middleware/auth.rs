use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::header::HeaderValue;
use http::Request as HttpRequest;
use http::Response as HttpResponse;
use http_body_util::combinators::UnsyncBoxBody;
use jsonwebtoken::{DecodingKey, Validation};
use tonic::Status;
use tower::{Layer, Service};
use uuid::Uuid;

use crate::models::{Department, Role};
use crate::services::auth_service::Claims;

/// Authenticated user info injected by the auth middleware into request extensions.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
    pub department: Department,
}

/// Public paths that do not require JWT authentication
const PUBLIC_PATHS: &[&str] = &[
    "/clinic.auth.AuthService/Login",
    "/clinic.health.Health/Check",
    "/clinic.health.Health/Watch",
    "/grpc.reflection.v1.ServerReflection/ServerReflectionInfo",
    "/grpc.reflection.v1alpha.ServerReflection/ServerReflectionInfo",
];

#[derive(Clone)]
pub struct AuthLayer {
    jwt_secret: String,
}

impl AuthLayer {
    pub fn new(jwt_secret: String) -> Self {
        Self { jwt_secret }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            jwt_secret: self.jwt_secret.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    jwt_secret: String,
}

type BoxBody = UnsyncBoxBody<bytes::Bytes, Status>;

fn grpc_status_response(status: Status) -> HttpResponse<BoxBody> {
    let code = status.code() as i32;
    let message = status.message().to_string();

    let mut response = HttpResponse::new(UnsyncBoxBody::default());
    response.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("application/grpc"),
    );
    response.headers_mut().insert(
        "grpc-status",
        HeaderValue::from_str(&code.to_string()).unwrap(),
    );
    if !message.is_empty() {
        if let Ok(val) = HeaderValue::from_str(&message) {
            response.headers_mut().insert("grpc-message", val);
        }
    }
    response
}

/// Decode and validate the bearer token into the identity the services
/// consume. Claims carry role and department, so no store lookup happens
/// here; account-status changes take effect at the next login.
fn authenticate(auth_header: Option<&str>, jwt_secret: &str) -> Result<AuthenticatedUser, Status> {
    let token = auth_header
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| Status::unauthenticated("Authentication required"))?;

    let claims = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| Status::unauthenticated("Invalid or expired token"))?
    .claims;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| Status::unauthenticated("Invalid or expired token"))?;
    let role = Role::parse(&claims.role)
        .ok_or_else(|| Status::unauthenticated("Invalid or expired token"))?;
    let department = Department::parse(&claims.department)
        .ok_or_else(|| Status::unauthenticated("Invalid or expired token"))?;

    Ok(AuthenticatedUser {
        user_id,
        role,
        department,
    })
}

impl<S, ReqBody> Service<HttpRequest<ReqBody>> for AuthMiddleware<S>
where
    S: Service<HttpRequest<ReqBody>, Response = HttpResponse<BoxBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = HttpResponse<BoxBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: HttpRequest<ReqBody>) -> Self::Future {
        let mut inner = self.inner.clone();
        std::mem::swap(&mut self.inner, &mut inner);

        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let path = req.uri().path().to_string();

            // Check if this is a public path
            if PUBLIC_PATHS.iter().any(|p| path == *p) {
                return inner.call(req).await;
            }

            let auth_header = req
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok());

            match authenticate(auth_header, &jwt_secret) {
                Ok(auth_user) => {
                    req.extensions_mut().insert(auth_user);
                    inner.call(req).await
                }
                Err(status) => {
                    tracing::debug!("rejected unauthenticated call to {}", path);
                    Ok(grpc_status_response(status))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> Claims {
        let now = Utc::now();
        Claims {
            sub: Uuid::new_v4().to_string(),
            role: "department_admin".to_string(),
            department: "pharmacy".to_string(),
            email: "admin@clinic.test".to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(24)).timestamp(),
        }
    }

    #[test]
    fn test_missing_header_rejected() {
        let err = authenticate(None, "secret").unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unauthenticated);
    }

    #[test]
    fn test_valid_token_accepted() {
        let claims = valid_claims();
        let token = make_token(&claims, "secret");
        let header = format!("Bearer {}", token);
        let user = authenticate(Some(&header), "secret").unwrap();
        assert_eq!(user.role, Role::DepartmentAdmin);
        assert_eq!(user.department, Department::Pharmacy);
        assert_eq!(user.user_id.to_string(), claims.sub);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = make_token(&valid_claims(), "secret");
        let header = format!("Bearer {}", token);
        assert!(authenticate(Some(&header), "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = Utc::now();
        let mut claims = valid_claims();
        claims.iat = (now - chrono::Duration::hours(48)).timestamp();
        claims.exp = (now - chrono::Duration::hours(24)).timestamp();
        let token = make_token(&claims, "secret");
        let header = format!("Bearer {}", token);
        assert!(authenticate(Some(&header), "secret").is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut claims = valid_claims();
        claims.role = "superadmin".to_string();
        let token = make_token(&claims, "secret");
        let header = format!("Bearer {}", token);
        assert!(authenticate(Some(&header), "secret").is_err());
    }
}
