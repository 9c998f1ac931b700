use tonic::{Request, Status};

use crate::middleware::AuthenticatedUser;
use crate::models::UserModel;
use crate::proto;

pub mod auth_service;
pub mod health_service;
pub mod inventory_service;
pub mod notifications_service;
pub mod users_service;

pub use auth_service::AuthServiceImpl;
pub use health_service::HealthServiceImpl;
pub use inventory_service::InventoryServiceImpl;
pub use notifications_service::NotificationsServiceImpl;
pub use users_service::UsersServiceImpl;

/// Identity injected by the auth middleware; absent only on public paths.
pub(crate) fn authenticated_user<T>(request: &Request<T>) -> Result<AuthenticatedUser, Status> {
    request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| Status::unauthenticated("Authentication required"))
}

/// Sanitized proto view of a user row: the password hash stays behind.
pub(crate) fn user_to_proto(model: &UserModel) -> proto::auth::User {
    proto::auth::User {
        id: model.id.to_string(),
        user_id: model.user_id.clone(),
        full_name: model.full_name.clone(),
        email: model.email.clone(),
        phone_number: model.phone_number.clone().unwrap_or_default(),
        role: model.role.clone(),
        department: model.department.clone(),
        status: model.status.clone(),
        last_login: model
            .last_login
            .map(|t| t.to_rfc3339())
            .unwrap_or_default(),
        created_at: model.created_at.to_rfc3339(),
    }
}
