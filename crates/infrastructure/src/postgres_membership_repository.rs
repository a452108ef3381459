use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use teamroles_application::MembershipRepository;
use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Membership, MembershipId, RoleId, TeamId, UserId};

/// PostgreSQL-backed repository for memberships.
///
/// The `memberships_user_id_team_id_key` constraint is the authoritative
/// uniqueness guard for `(user_id, team_id)`.
#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MembershipRow {
    id: uuid::Uuid,
    role_id: uuid::Uuid,
    user_id: uuid::Uuid,
    team_id: uuid::Uuid,
}

impl From<MembershipRow> for Membership {
    fn from(row: MembershipRow) -> Self {
        Membership::from_parts(
            MembershipId::from_uuid(row.id),
            RoleId::from_uuid(row.role_id),
            UserId::from_uuid(row.user_id),
            TeamId::from_uuid(row.team_id),
        )
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn save(&self, membership: Membership) -> AppResult<Membership> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            INSERT INTO memberships (id, role_id, user_id, team_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, role_id, user_id, team_id
            "#,
        )
        .bind(membership.id().as_uuid())
        .bind(membership.role_id().as_uuid())
        .bind(membership.user_id().as_uuid())
        .bind(membership.team_id().as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_membership_write_error(error, membership.role_id()))?;

        Ok(Membership::from(row))
    }

    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, role_id, user_id, team_id
            FROM memberships
            WHERE id = $1
            "#,
        )
        .bind(membership_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find membership: {error}")))?;

        Ok(row.map(Membership::from))
    }

    async fn find_by_role_id(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, role_id, user_id, team_id
            FROM memberships
            WHERE role_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list memberships: {error}")))?;

        Ok(rows.into_iter().map(Membership::from).collect())
    }

    async fn find_by_user_id_and_team_id(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT id, role_id, user_id, team_id
            FROM memberships
            WHERE user_id = $1 AND team_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(team_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve membership: {error}")))?;

        Ok(row.map(Membership::from))
    }

    async fn delete_all(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM memberships")
            .execute(&self.pool)
            .await
            .map_err(|error| AppError::Internal(format!("failed to delete memberships: {error}")))?;

        Ok(())
    }
}

fn map_membership_write_error(error: sqlx::Error, role_id: RoleId) -> AppError {
    if let sqlx::Error::Database(database_error) = &error {
        match database_error.code().as_deref() {
            Some("23505") => return AppError::already_exists(ResourceKind::Membership),
            Some("23503") => return AppError::not_found(ResourceKind::Role, role_id),
            _ => {}
        }
    }

    AppError::Internal(format!("failed to persist membership: {error}"))
}

#[cfg(test)]
mod tests;
