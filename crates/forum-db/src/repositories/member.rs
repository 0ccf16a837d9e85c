//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Member, NewMember};
use forum_core::error::DomainError;
use forum_core::traits::{MemberRepository, RepoResult};
use forum_core::value_objects::MemberId;

use crate::mappers::{MemberFlush, MemberInsert};
use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self, draft))]
    async fn save(&self, draft: &NewMember) -> RepoResult<Member> {
        draft.validated()?;
        let insert = MemberInsert::new(draft)
            .ok_or_else(|| DomainError::ValidationError("incomplete member draft".to_string()))?;

        // Single-row insert: either the whole row lands or nothing does.
        // Uniqueness races are decided by the unique index, not a pre-read.
        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (username, password_hash, name, nickname, age, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, password_hash, name, nickname, age, role,
                      created_at, updated_at
            ",
        )
        .bind(insert.username)
        .bind(insert.password_hash)
        .bind(insert.name)
        .bind(insert.nickname)
        .bind(insert.age)
        .bind(insert.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::UsernameAlreadyExists(insert.username.to_string())
            })
        })?;

        Ok(Member::from(row))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, username, password_hash, name, nickname, age, role,
                   created_at, updated_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, username, password_hash, name, nickname, age, role,
                   created_at, updated_at
            FROM members
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM members WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, member))]
    async fn delete(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM members
            WHERE id = $1
            ",
        )
        .bind(member.id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self, member))]
    async fn flush(&self, member: &Member) -> RepoResult<()> {
        let flush = MemberFlush::new(member);

        let result = sqlx::query(
            r"
            UPDATE members
            SET name = $2, nickname = $3, age = $4, password_hash = $5,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(flush.id)
        .bind(flush.name)
        .bind(flush.nickname)
        .bind(flush.age)
        .bind(flush.password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member.id));
        }

        Ok(())
    }
}
