use sqlx::PgPool;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{AccountStatus, ActivityLogModel, UserModel};
use crate::policy::{authorize, Action};
use crate::proto::common::Empty;
use crate::proto::users::users_service_server::UsersService;
use crate::proto::users::{
    ActivityEntry, AppendActivityLogReq, AppendActivityLogRes, GetActivityLogReq,
    GetActivityLogRes, ListUsersRes, SetUserStatusReq, SetUserStatusRes,
};
use crate::services::{authenticated_user, user_to_proto};

const USER_COLUMNS: &str = "id, user_id, email, full_name, phone_number, role, department, \
     status, password_hash, last_login, created_at";

const ACTIVITY_LOG_LIMIT: i64 = 200;

pub struct UsersServiceImpl {
    pool: PgPool,
}

impl UsersServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn entry_to_proto(model: &ActivityLogModel) -> ActivityEntry {
        ActivityEntry {
            id: model.id.to_string(),
            action: model.action.clone(),
            item_name: model.item_name.clone().unwrap_or_default(),
            quantity_delta: model.quantity_delta,
            details: model.details.clone().unwrap_or_default(),
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

#[tonic::async_trait]
impl UsersService for UsersServiceImpl {
    async fn list_users(&self, request: Request<Empty>) -> Result<Response<ListUsersRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::ListUsers)?;

        let sql = format!("SELECT {} FROM users ORDER BY full_name ASC", USER_COLUMNS);
        let models: Vec<UserModel> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let users = models.iter().map(user_to_proto).collect();
        Ok(Response::new(ListUsersRes { users }))
    }

    async fn get_activity_log(
        &self,
        request: Request<GetActivityLogReq>,
    ) -> Result<Response<GetActivityLogRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        // Empty user_id means "my own log"; anything else needs the
        // cross-user permission.
        let target = if req.user_id.is_empty() {
            authorize(auth_user.role, Action::ViewOwnActivity)?;
            auth_user.user_id
        } else {
            let target = Uuid::parse_str(&req.user_id)
                .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
            if target == auth_user.user_id {
                authorize(auth_user.role, Action::ViewOwnActivity)?;
            } else {
                authorize(auth_user.role, Action::ViewAnyActivity)?;
            }
            target
        };

        let models: Vec<ActivityLogModel> = sqlx::query_as(
            "SELECT id, user_id, action, item_name, quantity_delta, details, created_at \
             FROM activity_log WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(target)
        .bind(ACTIVITY_LOG_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let entries = models.iter().map(Self::entry_to_proto).collect();
        Ok(Response::new(GetActivityLogRes { entries }))
    }

    async fn append_activity_log(
        &self,
        request: Request<AppendActivityLogReq>,
    ) -> Result<Response<AppendActivityLogRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::AppendActivity)?;
        let req = request.into_inner();

        if req.action.trim().is_empty() {
            return Err(AppError::Validation("action is required".to_string()).into());
        }

        let model: ActivityLogModel = sqlx::query_as(
            "INSERT INTO activity_log (user_id, action, item_name, quantity_delta, details) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, user_id, action, item_name, quantity_delta, details, created_at",
        )
        .bind(auth_user.user_id)
        .bind(req.action.trim())
        .bind((!req.item_name.is_empty()).then_some(req.item_name.as_str()))
        .bind(req.quantity_delta)
        .bind((!req.details.is_empty()).then_some(req.details.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(Response::new(AppendActivityLogRes {
            entry: Some(Self::entry_to_proto(&model)),
        }))
    }

    async fn set_user_status(
        &self,
        request: Request<SetUserStatusReq>,
    ) -> Result<Response<SetUserStatusRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::SetUserStatus)?;
        let req = request.into_inner();

        let target = Uuid::parse_str(&req.user_id)
            .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
        let status = AccountStatus::parse(&req.status)
            .ok_or_else(|| AppError::Validation(format!("unknown status: {}", req.status)))?;

        if target == auth_user.user_id {
            return Err(AppError::Validation(
                "cannot change the status of your own account".to_string(),
            )
            .into());
        }

        let sql = format!(
            "UPDATE users SET status = $1 WHERE id = $2 RETURNING {}",
            USER_COLUMNS
        );
        let model: Option<UserModel> = sqlx::query_as(&sql)
            .bind(status.as_str())
            .bind(target)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match model {
            Some(m) => {
                tracing::info!("user {} status set to {}", m.user_id, m.status);
                Ok(Response::new(SetUserStatusRes {
                    user: Some(user_to_proto(&m)),
                }))
            }
            None => Err(AppError::NotFound("User not found".to_string()).into()),
        }
    }
}
