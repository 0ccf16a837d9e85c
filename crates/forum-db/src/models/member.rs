//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub nickname: String,
    pub age: i32,
    /// Member role: 'USER' or 'ADMIN' (stored as text)
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberModel {
    /// Check if this row carries the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}
