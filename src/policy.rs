//! Central (role, action) policy table. Every protected RPC checks its
//! action here before touching the store, so role rules live in one
//! place instead of being repeated per category.

use crate::error::{AppError, AppResult};
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewInventory,
    CreateItem,
    UpdateItem,
    DeleteItem,
    StockAddition,
    StockConsumption,
    RegisterUser,
    ListUsers,
    SetUserStatus,
    ViewOwnActivity,
    ViewAnyActivity,
    AppendActivity,
    ViewNotifications,
    MarkNotifications,
}

pub fn is_allowed(role: Role, action: Action) -> bool {
    use Action::*;
    match role {
        Role::ClinicAdmin => true,
        Role::DepartmentAdmin => matches!(
            action,
            ViewInventory
                | CreateItem
                | UpdateItem
                | DeleteItem
                | StockAddition
                | StockConsumption
                | ViewOwnActivity
                | AppendActivity
                | ViewNotifications
                | MarkNotifications
        ),
        Role::DepartmentUser => matches!(
            action,
            ViewInventory
                | StockConsumption
                | ViewOwnActivity
                | AppendActivity
                | ViewNotifications
                | MarkNotifications
        ),
    }
}

/// Uniform denial message: does not reveal whether the target exists.
pub fn authorize(role: Role, action: Action) -> AppResult<()> {
    if is_allowed(role, action) {
        Ok(())
    } else {
        Err(AppError::Authorization(
            "Operation not permitted for this role".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_admin_allows_everything() {
        for action in [
            Action::ViewInventory,
            Action::CreateItem,
            Action::StockAddition,
            Action::RegisterUser,
            Action::ListUsers,
            Action::SetUserStatus,
            Action::ViewAnyActivity,
        ] {
            assert!(is_allowed(Role::ClinicAdmin, action));
        }
    }

    #[test]
    fn test_department_user_cannot_add_stock() {
        assert!(!is_allowed(Role::DepartmentUser, Action::StockAddition));
        assert!(is_allowed(Role::DepartmentUser, Action::StockConsumption));
    }

    #[test]
    fn test_department_user_is_read_only_for_items() {
        assert!(is_allowed(Role::DepartmentUser, Action::ViewInventory));
        assert!(!is_allowed(Role::DepartmentUser, Action::CreateItem));
        assert!(!is_allowed(Role::DepartmentUser, Action::UpdateItem));
        assert!(!is_allowed(Role::DepartmentUser, Action::DeleteItem));
    }

    #[test]
    fn test_only_clinic_admin_manages_users() {
        for role in [Role::DepartmentAdmin, Role::DepartmentUser] {
            assert!(!is_allowed(role, Action::RegisterUser));
            assert!(!is_allowed(role, Action::ListUsers));
            assert!(!is_allowed(role, Action::SetUserStatus));
            assert!(!is_allowed(role, Action::ViewAnyActivity));
        }
    }

    #[test]
    fn test_authorize_maps_to_authorization_error() {
        let err = authorize(Role::DepartmentUser, Action::StockAddition).unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }
}
