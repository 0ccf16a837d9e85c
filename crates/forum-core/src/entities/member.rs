//! Member entity - represents a registered forum member
//!
//! A `Member` is a persisted row: it always carries the id and audit
//! timestamps assigned by the store. A `NewMember` is the pre-persistence
//! draft built through `NewMember::builder()`; every required column is an
//! `Option` there, and the store rejects the draft before writing when any
//! of them is unset.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::error::DomainError;
use crate::value_objects::MemberId;

use super::Role;

/// Persisted member record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
    /// Salted hash only; the plaintext password is never stored.
    pub password_hash: String,
    pub name: String,
    pub nickname: String,
    pub age: i32,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Update the display name
    pub fn update_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Update the nickname
    pub fn update_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.touch();
    }

    /// Update the age
    pub fn update_age(&mut self, age: i32) {
        self.age = age;
        self.touch();
    }

    /// Update the password, storing only the hash produced by `hasher`.
    ///
    /// The hasher is any salted hashing function; on success the previous
    /// hash is replaced and the plaintext is dropped.
    pub fn update_password<H, E>(&mut self, hasher: H, plaintext: &str) -> Result<(), E>
    where
        H: FnOnce(&str) -> Result<String, E>,
    {
        self.password_hash = hasher(plaintext)?;
        self.touch();
        Ok(())
    }

    /// Check if this member has administrative rights
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    // In-memory timestamp only; the durable updated_at is stamped by the
    // store at flush time.
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Draft of a member that has not been persisted yet
///
/// All required columns are optional here; [`NewMember::validated`] (called
/// by the store before insert) rejects the draft when any of them is unset.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewMember {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password_hash: Option<String>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub nickname: Option<String>,
    #[validate(required)]
    pub age: Option<i32>,
    #[validate(required)]
    pub role: Option<Role>,
}

impl NewMember {
    /// Start building a draft
    pub fn builder() -> NewMemberBuilder {
        NewMemberBuilder::default()
    }

    /// Check every required field is present and well-formed
    pub fn validated(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))
    }
}

/// Builder for [`NewMember`]
#[derive(Debug, Clone, Default)]
pub struct NewMemberBuilder {
    draft: NewMember,
}

impl NewMemberBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.draft.username = Some(username.into());
        self
    }

    /// Set the password hash. Callers hash the plaintext first (e.g. with
    /// an Argon2 password service); the draft never carries plaintext.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.draft.password_hash = Some(password_hash.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = Some(name.into());
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.draft.nickname = Some(nickname.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.draft.age = Some(age);
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.draft.role = Some(role);
        self
    }

    pub fn build(self) -> NewMember {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> NewMember {
        NewMember::builder()
            .username("username")
            .password_hash("hashed-secret")
            .name("Member1")
            .nickname("NickName1")
            .age(22)
            .role(Role::User)
            .build()
    }

    fn persisted_member() -> Member {
        let now = Utc::now();
        Member {
            id: MemberId::new(1),
            username: "username".to_string(),
            password_hash: "hashed-secret".to_string(),
            name: "Member1".to_string(),
            nickname: "NickName1".to_string(),
            age: 22,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validated().is_ok());
    }

    #[test]
    fn test_draft_without_username_rejected() {
        let mut draft = complete_draft();
        draft.username = None;
        assert!(draft.validated().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_without_name_rejected() {
        let mut draft = complete_draft();
        draft.name = None;
        assert!(draft.validated().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_without_nickname_rejected() {
        let mut draft = complete_draft();
        draft.nickname = None;
        assert!(draft.validated().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_without_age_rejected() {
        let mut draft = complete_draft();
        draft.age = None;
        assert!(draft.validated().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_with_empty_username_rejected() {
        let mut draft = complete_draft();
        draft.username = Some(String::new());
        assert!(draft.validated().unwrap_err().is_validation());
    }

    #[test]
    fn test_update_name_bumps_timestamp() {
        let mut member = persisted_member();
        member.update_name("updateName".to_string());

        assert_eq!(member.name, "updateName");
        assert!(member.updated_at >= member.created_at);
    }

    #[test]
    fn test_update_nickname_and_age() {
        let mut member = persisted_member();
        member.update_nickname("updateNickName".to_string());
        member.update_age(33);

        assert_eq!(member.nickname, "updateNickName");
        assert_eq!(member.age, 33);
    }

    #[test]
    fn test_update_password_stores_hash_only() {
        let mut member = persisted_member();
        member
            .update_password(
                |plaintext| Ok::<_, DomainError>(format!("hashed:{plaintext}")),
                "updatePassword",
            )
            .unwrap();

        assert_eq!(member.password_hash, "hashed:updatePassword");
        assert!(!member.password_hash.contains("hashed-secret"));
    }

    #[test]
    fn test_update_password_keeps_old_hash_on_error() {
        let mut member = persisted_member();
        let result = member.update_password(
            |_| Err(DomainError::ValidationError("hash failed".to_string())),
            "updatePassword",
        );

        assert!(result.is_err());
        assert_eq!(member.password_hash, "hashed-secret");
    }

    #[test]
    fn test_is_admin() {
        let mut member = persisted_member();
        assert!(!member.is_admin());
        member.role = Role::Admin;
        assert!(member.is_admin());
    }
}
