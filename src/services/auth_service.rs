use std::sync::LazyLock;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, SaltString};
use argon2::{Argon2, PasswordVerifier};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::error::{AppError, AppResult};
use crate::models::{AccountStatus, Department, Role, UserModel};
use crate::policy::{authorize, Action};
use crate::proto::auth::auth_service_server::AuthService;
use crate::proto::auth::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};
use crate::proto::common::Empty;
use crate::services::{authenticated_user, user_to_proto};

// Server-side re-validation: client-side checks are display-only and
// never trusted.
static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{5,19}$").unwrap());
static RE_USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{2,31}$").unwrap());

const SELECT_USER: &str = "SELECT id, user_id, email, full_name, phone_number, role, department, \
     status, password_hash, last_login, created_at FROM users";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

pub struct AuthServiceImpl {
    pool: PgPool,
    jwt_secret: String,
}

impl AuthServiceImpl {
    pub fn new(pool: PgPool, jwt_secret: String) -> Self {
        Self { pool, jwt_secret }
    }

    fn issue_jwt(&self, user: &UserModel) -> AppResult<(String, chrono::DateTime<Utc>)> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(24);
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.clone(),
            department: user.department.clone(),
            email: user.email.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("JWT error: {}", e)))?;
        Ok((token, exp))
    }

    fn validate_registration(req: &RegisterRequest) -> AppResult<(Role, Department)> {
        if !RE_USER_ID.is_match(&req.user_id) {
            return Err(AppError::Validation(
                "user_id must be 3-32 characters (letters, digits, - or _)".to_string(),
            ));
        }
        if req.full_name.trim().is_empty() {
            return Err(AppError::Validation("full_name is required".to_string()));
        }
        if !RE_EMAIL.is_match(&req.email) {
            return Err(AppError::Validation("invalid email address".to_string()));
        }
        if !req.phone_number.is_empty() && !RE_PHONE.is_match(&req.phone_number) {
            return Err(AppError::Validation("invalid phone number".to_string()));
        }
        if req.password.len() < 8 {
            return Err(AppError::Validation(
                "password must be at least 8 characters".to_string(),
            ));
        }
        let role = Role::parse(&req.role)
            .ok_or_else(|| AppError::Validation(format!("unknown role: {}", req.role)))?;
        let department = Department::parse(&req.department).ok_or_else(|| {
            AppError::Validation(format!("unknown department: {}", req.department))
        })?;
        Ok((role, department))
    }

    async fn login_inner(&self, req: &LoginRequest) -> AppResult<(String, String, UserModel)> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AppError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let user: Option<UserModel> =
            sqlx::query_as(&format!("{} WHERE email = $1", SELECT_USER))
                .bind(&req.email)
                .fetch_optional(&self.pool)
                .await?;

        let user =
            user.ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        // Suspended/inactive accounts fail before the password is even
        // looked at.
        match AccountStatus::parse(&user.status) {
            Some(AccountStatus::Active) => {}
            _ => {
                return Err(AppError::Authentication(
                    "Account is inactive or suspended".to_string(),
                ))
            }
        }

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash in database".to_string()))?;
        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Authentication("Invalid credentials".to_string()))?;

        let user: UserModel = sqlx::query_as(
            "UPDATE users SET last_login = NOW() WHERE id = $1 \
             RETURNING id, user_id, email, full_name, phone_number, role, department, \
             status, password_hash, last_login, created_at",
        )
        .bind(user.id)
        .fetch_one(&self.pool)
        .await?;

        let (token, exp) = self.issue_jwt(&user)?;
        Ok((token, exp.to_rfc3339(), user))
    }

    async fn register_inner(&self, req: &RegisterRequest) -> AppResult<UserModel> {
        let (role, department) = Self::validate_registration(req)?;

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR user_id = $2)",
        )
        .bind(&req.email)
        .bind(&req.user_id)
        .fetch_one(&self.pool)
        .await?;
        if exists {
            return Err(AppError::Conflict(
                "A user with this email or userID already exists".to_string(),
            ));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?
            .to_string();

        let user: UserModel = sqlx::query_as(
            "INSERT INTO users (user_id, email, full_name, phone_number, role, department, status, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, 'active', $7) \
             RETURNING id, user_id, email, full_name, phone_number, role, department, \
             status, password_hash, last_login, created_at",
        )
        .bind(&req.user_id)
        .bind(&req.email)
        .bind(req.full_name.trim())
        .bind((!req.phone_number.is_empty()).then_some(req.phone_number.as_str()))
        .bind(role.as_str())
        .bind(department.as_str())
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Concurrent registration can still trip the unique indexes.
            if e.to_string().contains("unique") || e.to_string().contains("duplicate") {
                AppError::Conflict("A user with this email or userID already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(user)
    }
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        let req = request.into_inner();
        let (token, expires_at, user) = self.login_inner(&req).await?;

        tracing::info!("user {} logged in", user.user_id);

        Ok(Response::new(AuthResponse {
            token,
            expires_at,
            user: Some(user_to_proto(&user)),
        }))
    }

    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::RegisterUser)?;

        let req = request.into_inner();
        let user = self.register_inner(&req).await?;

        tracing::info!("registered user {} ({})", user.user_id, user.role);

        Ok(Response::new(RegisterResponse {
            user: Some(user_to_proto(&user)),
        }))
    }

    async fn me(&self, request: Request<Empty>) -> Result<Response<User>, Status> {
        let auth_user = authenticated_user(&request)?;

        let user: Option<UserModel> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_USER))
                .bind(auth_user.user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        match user {
            Some(u) => Ok(Response::new(user_to_proto(&u))),
            None => Err(AppError::Authentication("User no longer exists".to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_req() -> RegisterRequest {
        RegisterRequest {
            user_id: "nurse-01".to_string(),
            full_name: "Test Nurse".to_string(),
            email: "nurse@clinic.test".to_string(),
            phone_number: "+212 600-112233".to_string(),
            role: "department_user".to_string(),
            department: "pharmacy".to_string(),
            password: "s3cret-pass".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        let (role, dept) = AuthServiceImpl::validate_registration(&register_req()).unwrap();
        assert_eq!(role, Role::DepartmentUser);
        assert_eq!(dept, Department::Pharmacy);
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = register_req();
        req.email = "not-an-email".to_string();
        assert!(matches!(
            AuthServiceImpl::validate_registration(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = register_req();
        req.password = "short".to_string();
        assert!(AuthServiceImpl::validate_registration(&req).is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let mut req = register_req();
        req.phone_number = "call me".to_string();
        assert!(AuthServiceImpl::validate_registration(&req).is_err());
    }

    #[test]
    fn test_empty_phone_allowed() {
        let mut req = register_req();
        req.phone_number = String::new();
        assert!(AuthServiceImpl::validate_registration(&req).is_ok());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut req = register_req();
        req.role = "pharmacist".to_string();
        assert!(AuthServiceImpl::validate_registration(&req).is_err());
    }

    #[test]
    fn test_password_hash_verifies() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"s3cret-pass", &salt)
            .unwrap()
            .to_string();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"s3cret-pass", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong-pass", &parsed)
            .is_err());
    }
}
