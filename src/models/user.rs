// src/models/user.rs
// DOCUMENTATION: Platform user records and the role catalogue
// PURPOSE: Stored shape plus create/update DTOs for the users collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ActivityStatus;
use crate::db::Entity;

/// Fixed set of roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Guide,
    #[default]
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Manager,
        UserRole::Guide,
        UserRole::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Guide => "guide",
            UserRole::User => "user",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrateur",
            UserRole::Manager => "Gestionnaire",
            UserRole::Guide => "Guide",
            UserRole::User => "Utilisateur",
        }
    }

    pub fn privileges(self) -> &'static [&'static str] {
        match self {
            UserRole::Admin => &[
                "manage_users",
                "manage_sites",
                "manage_guides",
                "manage_accommodations",
                "manage_regions",
                "view_analytics",
            ],
            UserRole::Manager => &[
                "manage_sites",
                "manage_guides",
                "manage_accommodations",
                "view_analytics",
            ],
            UserRole::Guide => &["view_sites", "view_accommodations"],
            UserRole::User => &["view_sites"],
        }
    }
}

/// Role catalogue entry returned by GET /admin/roles
#[derive(Debug, Serialize)]
pub struct RoleDescriptor {
    pub id: UserRole,
    pub name: &'static str,
    pub privileges: &'static [&'static str],
}

impl From<UserRole> for RoleDescriptor {
    fn from(role: UserRole) -> Self {
        RoleDescriptor {
            id: role,
            name: role.display_name(),
            privileges: role.privileges(),
        }
    }
}

/// A registered platform user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,

    /// Family name
    pub nom: String,

    /// Given name
    pub prenom: String,

    pub email: String,
    pub registration_date: Option<DateTime<Utc>>,
    pub last_connection: Option<DateTime<Utc>>,
    pub status: ActivityStatus,
    pub role: UserRole,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom)
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
}

/// Request DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub nom: String,

    #[serde(default)]
    pub prenom: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub role: UserRole,
}

/// Request DTO for updating a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActivityStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_connection: Option<DateTime<Utc>>,
}

/// Body of PUT /admin/users/{id}/role
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Manager).unwrap(), "\"manager\"");
        for role in UserRole::ALL {
            assert_eq!(serde_json::to_value(role).unwrap(), role.as_str());
        }
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let user: User = serde_json::from_str(r#"{"id": "u1", "email": "a@b.gn"}"#).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, ActivityStatus::Active);
        assert_eq!(user.full_name(), " ");
    }
}
