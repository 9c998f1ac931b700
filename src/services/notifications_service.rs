use sqlx::PgPool;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::NotificationModel;
use crate::policy::{authorize, Action};
use crate::proto::common::Empty;
use crate::proto::notifications::notifications_service_server::NotificationsService;
use crate::proto::notifications::{
    ListNotificationsReq, ListNotificationsRes, MarkAllReadRes, MarkReadReq, Notification,
};
use crate::services::authenticated_user;

const NOTIFICATION_COLUMNS: &str = "id, recipient_id, title, message, kind, priority, \
     item_category, item_name, read, created_at";

pub struct NotificationsServiceImpl {
    pool: PgPool,
}

impl NotificationsServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn model_to_proto(model: &NotificationModel) -> Notification {
        Notification {
            id: model.id.to_string(),
            title: model.title.clone(),
            message: model.message.clone(),
            kind: model.kind.clone(),
            priority: model.priority.clone(),
            item_category: model.item_category.clone(),
            item_name: model.item_name.clone(),
            read: model.read,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

#[tonic::async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn list_notifications(
        &self,
        request: Request<ListNotificationsReq>,
    ) -> Result<Response<ListNotificationsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::ViewNotifications)?;
        let req = request.into_inner();

        let sql = format!(
            "SELECT {} FROM notifications WHERE recipient_id = $1 {} \
             ORDER BY created_at DESC LIMIT 200",
            NOTIFICATION_COLUMNS,
            if req.unread_only { "AND read = FALSE" } else { "" }
        );

        let models: Vec<NotificationModel> = sqlx::query_as(&sql)
            .bind(auth_user.user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let notifications: Vec<Notification> =
            models.iter().map(Self::model_to_proto).collect();
        Ok(Response::new(ListNotificationsRes { notifications }))
    }

    async fn mark_read(
        &self,
        request: Request<MarkReadReq>,
    ) -> Result<Response<Notification>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::MarkNotifications)?;
        let req = request.into_inner();

        let id = Uuid::parse_str(&req.id)
            .map_err(|_| AppError::Validation("id must be a UUID".to_string()))?;

        // Scoped to the recipient: someone else's notification reads as
        // not found rather than revealing it exists.
        let sql = format!(
            "UPDATE notifications SET read = TRUE WHERE id = $1 AND recipient_id = $2 \
             RETURNING {}",
            NOTIFICATION_COLUMNS
        );
        let model: Option<NotificationModel> = sqlx::query_as(&sql)
            .bind(id)
            .bind(auth_user.user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match model {
            Some(m) => Ok(Response::new(Self::model_to_proto(&m))),
            None => Err(AppError::NotFound("Notification not found".to_string()).into()),
        }
    }

    async fn mark_all_read(
        &self,
        request: Request<Empty>,
    ) -> Result<Response<MarkAllReadRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::MarkNotifications)?;

        let rows_affected =
            sqlx::query("UPDATE notifications SET read = TRUE WHERE recipient_id = $1 AND read = FALSE")
                .bind(auth_user.user_id)
                .execute(&self.pool)
                .await
                .map_err(AppError::Database)?
                .rows_affected();

        Ok(Response::new(MarkAllReadRes {
            updated: rows_affected as i32,
        }))
    }
}
