//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, NewMember};
use crate::error::DomainError;
use crate::value_objects::MemberId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member and return the record with id and audit
    /// timestamps populated.
    ///
    /// Fails with a validation error when a required field is unset and
    /// with a conflict error when the username is already taken. The write
    /// is atomic; a rejected draft leaves no row behind.
    async fn save(&self, draft: &NewMember) -> RepoResult<Member>;

    /// Find member by id; absence is `None`, not an error
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Find member by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Member>>;

    /// Check if a row with exactly this username exists
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Remove the row; subsequent `find_by_id` on the same id returns `None`
    async fn delete(&self, member: &Member) -> RepoResult<()>;

    /// Make the member's in-memory mutations durable.
    ///
    /// Writes the mutable columns (name, nickname, age, password hash) and
    /// stamps the durable last-modified timestamp. Errors with not-found if
    /// the row no longer exists.
    async fn flush(&self, member: &Member) -> RepoResult<()>;
}
