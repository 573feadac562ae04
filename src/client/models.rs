use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record as returned by the identity service.
///
/// The service owns this data; the CLI holds an immutable snapshot for the
/// duration of one command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Full-replacement update body.
///
/// Both fields are always populated. A field the operator left unchanged is
/// backfilled from the current record before submission, never sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
}

/// A field a conflict response attributed a uniqueness violation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Username,
    Email,
}

impl ConflictField {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictField::Username => "username",
            ConflictField::Email => "email",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "username" => Some(ConflictField::Username),
            "email" => Some(ConflictField::Email),
            _ => None,
        }
    }
}
