//! Signed-in user identity and account-creation payload.
//!
//! DESIGN
//! ======
//! The backend has shipped two user shapes over time: the current one keys
//! users by `user_id` and carries a `role`, the legacy one uses `id` plus an
//! `is_admin` flag. Both deserialize into one [`Identity`] so guards only ever
//! see a [`Role`].

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

/// Access role attached to every identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

/// The authenticated user as returned by the auth service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireUser")]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub school_id: Option<i64>,
    pub student_id: Option<String>,
    pub grade: Option<String>,
    pub class_name: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in the shell chrome: `first last`, or the username when
    /// neither name part is set.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

#[derive(Deserialize)]
struct WireUser {
    #[serde(alias = "user_id")]
    id: i64,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    is_admin: Option<bool>,
    #[serde(default)]
    school_id: Option<i64>,
    #[serde(default)]
    student_id: Option<String>,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    class_name: Option<String>,
}

impl From<WireUser> for Identity {
    fn from(wire: WireUser) -> Self {
        let role = match (wire.role, wire.is_admin) {
            (Some(role), _) => role,
            (None, Some(true)) => Role::Admin,
            (None, _) => Role::Student,
        };
        Self {
            id: wire.id,
            username: wire.username,
            email: wire.email,
            first_name: wire.first_name,
            last_name: wire.last_name,
            role,
            school_id: wire.school_id,
            student_id: wire.student_id,
            grade: wire.grade,
            class_name: wire.class_name,
        }
    }
}

/// Fields submitted when creating a new student account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}
