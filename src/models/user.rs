use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user row. The password hash never leaves the process; proto
/// conversion in the services strips it.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub department: String,
    pub status: String,
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ClinicAdmin,
    DepartmentAdmin,
    DepartmentUser,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "clinic_admin" => Some(Role::ClinicAdmin),
            "department_admin" => Some(Role::DepartmentAdmin),
            "department_user" => Some(Role::DepartmentUser),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ClinicAdmin => "clinic_admin",
            Role::DepartmentAdmin => "department_admin",
            Role::DepartmentUser => "department_user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Pharmacy,
    Dentistry,
    Laboratory,
}

impl Department {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pharmacy" => Some(Department::Pharmacy),
            "dentistry" => Some(Department::Dentistry),
            "laboratory" => Some(Department::Laboratory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Pharmacy => "pharmacy",
            Department::Dentistry => "dentistry",
            Department::Laboratory => "laboratory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

impl AccountStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AccountStatus::Active),
            "inactive" => Some(AccountStatus::Inactive),
            "suspended" => Some(AccountStatus::Suspended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Suspended => "suspended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::ClinicAdmin, Role::DepartmentAdmin, Role::DepartmentUser] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AccountStatus::Active,
            AccountStatus::Inactive,
            AccountStatus::Suspended,
        ] {
            assert_eq!(AccountStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AccountStatus::parse("disabled"), None);
    }

    #[test]
    fn test_department_round_trip() {
        for dept in [
            Department::Pharmacy,
            Department::Dentistry,
            Department::Laboratory,
        ] {
            assert_eq!(Department::parse(dept.as_str()), Some(dept));
        }
        assert_eq!(Department::parse("radiology"), None);
    }
}
