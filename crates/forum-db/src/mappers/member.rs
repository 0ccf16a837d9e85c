//! Member entity <-> model mapper

use forum_core::entities::{Member, NewMember, Role};
use forum_core::value_objects::MemberId;

use crate::models::MemberModel;

/// Convert database role text to the Role enum
///
/// The column is constrained to known values; an unexpected value falls
/// back to the least-privileged role.
fn parse_role(role_str: &str) -> Role {
    role_str.parse().unwrap_or(Role::User)
}

/// Convert MemberModel to Member entity
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            username: model.username,
            password_hash: model.password_hash,
            name: model.name,
            nickname: model.nickname,
            age: model.age,
            role: parse_role(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for inserting a validated draft
///
/// Construction returns `None` when a required field is unset;
/// `NewMember::validated` reports which one.
pub struct MemberInsert<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub nickname: &'a str,
    pub age: i32,
    pub role: &'static str,
}

impl<'a> MemberInsert<'a> {
    pub fn new(draft: &'a NewMember) -> Option<Self> {
        Some(Self {
            username: draft.username.as_deref()?,
            password_hash: draft.password_hash.as_deref()?,
            name: draft.name.as_deref()?,
            nickname: draft.nickname.as_deref()?,
            age: draft.age?,
            role: draft.role?.as_str(),
        })
    }
}

/// Column values for flushing a member's mutable fields
pub struct MemberFlush<'a> {
    pub id: i64,
    pub name: &'a str,
    pub nickname: &'a str,
    pub age: i32,
    pub password_hash: &'a str,
}

impl<'a> MemberFlush<'a> {
    pub fn new(member: &'a Member) -> Self {
        Self {
            id: member.id.into_inner(),
            name: &member.name,
            nickname: &member.nickname,
            age: member.age,
            password_hash: &member.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model() -> MemberModel {
        MemberModel {
            id: 7,
            username: "username".to_string(),
            password_hash: "hashed-secret".to_string(),
            name: "Member1".to_string(),
            nickname: "NickName1".to_string(),
            age: 22,
            role: "ADMIN".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let member = Member::from(model());

        assert_eq!(member.id, MemberId::new(7));
        assert_eq!(member.username, "username");
        assert_eq!(member.role, Role::Admin);
        assert_eq!(member.age, 22);
    }

    #[test]
    fn test_unknown_role_falls_back_to_user() {
        let mut m = model();
        m.role = "SUPERUSER".to_string();
        assert_eq!(Member::from(m).role, Role::User);
    }

    #[test]
    fn test_insert_from_complete_draft() {
        let draft = NewMember::builder()
            .username("username")
            .password_hash("hashed-secret")
            .name("Member1")
            .nickname("NickName1")
            .age(22)
            .role(Role::User)
            .build();

        let insert = MemberInsert::new(&draft).unwrap();
        assert_eq!(insert.username, "username");
        assert_eq!(insert.role, "USER");
        assert_eq!(insert.age, 22);
    }

    #[test]
    fn test_insert_from_incomplete_draft_is_none() {
        let draft = NewMember::builder()
            .username("username")
            .password_hash("hashed-secret")
            .nickname("NickName1")
            .age(22)
            .role(Role::User)
            .build();

        assert!(MemberInsert::new(&draft).is_none());
    }

    #[test]
    fn test_flush_binds_mutable_columns() {
        let member = Member::from(model());
        let flush = MemberFlush::new(&member);

        assert_eq!(flush.id, 7);
        assert_eq!(flush.name, "Member1");
        assert_eq!(flush.password_hash, "hashed-secret");
    }
}
