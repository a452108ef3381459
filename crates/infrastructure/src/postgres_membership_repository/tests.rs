use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use teamroles_application::{MembershipRepository, RoleRepository};
use teamroles_core::AppError;
use teamroles_domain::{Membership, Role, RoleId, TeamId, UserId};

use super::PostgresMembershipRepository;
use crate::PostgresRoleRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres membership tests: {error}");
    }

    Some(pool)
}

async fn stored_role(pool: &PgPool) -> Role {
    let role = match Role::new(format!("Developer {}", uuid::Uuid::new_v4())) {
        Ok(role) => role,
        Err(error) => panic!("invalid test role: {error}"),
    };

    match PostgresRoleRepository::new(pool.clone()).save(role).await {
        Ok(role) => role,
        Err(error) => panic!("failed to store test role: {error}"),
    }
}

#[tokio::test]
async fn role_names_are_unique() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleRepository::new(pool.clone());
    let role = stored_role(&pool).await;

    let duplicate = Role::new(role.name());
    assert!(duplicate.is_ok());
    let result = repository
        .save(duplicate.unwrap_or_else(|_| unreachable!()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AlreadyExists(message)) if message == "Role already exists"
    ));

    let by_name = repository.find_by_name(role.name()).await;
    assert_eq!(by_name.ok().flatten(), Some(role.clone()));

    let by_id = repository.find_by_id(role.id()).await;
    assert_eq!(by_id.ok().flatten(), Some(role));
}

#[tokio::test]
async fn duplicate_user_and_team_violates_store_constraint() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresMembershipRepository::new(pool.clone());
    let role = stored_role(&pool).await;
    let user_id = UserId::new();
    let team_id = TeamId::new();

    let first = repository
        .save(Membership::new(role.id(), user_id, team_id))
        .await;
    assert!(first.is_ok());

    let second = repository
        .save(Membership::new(role.id(), user_id, team_id))
        .await;
    assert!(
        matches!(
            second,
            Err(AppError::AlreadyExists(message)) if message == "Membership already exists"
        )
    );
}

#[tokio::test]
async fn membership_for_unknown_role_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresMembershipRepository::new(pool);
    let role_id = RoleId::new();

    let result = repository
        .save(Membership::new(role_id, UserId::new(), TeamId::new()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(message)) if message == format!("Role {role_id} not found")
    ));
}

#[tokio::test]
async fn memberships_are_found_by_role_and_by_pair() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresMembershipRepository::new(pool.clone());
    let role = stored_role(&pool).await;
    let membership = Membership::new(role.id(), UserId::new(), TeamId::new());

    let saved = repository.save(membership.clone()).await;
    assert_eq!(saved.ok(), Some(membership.clone()));

    let by_role = repository.find_by_role_id(role.id()).await;
    assert_eq!(by_role.ok(), Some(vec![membership.clone()]));

    let by_pair = repository
        .find_by_user_id_and_team_id(membership.user_id(), membership.team_id())
        .await;
    assert_eq!(by_pair.ok().flatten(), Some(membership.clone()));

    let by_id = repository.find_by_id(membership.id()).await;
    assert_eq!(by_id.ok().flatten(), Some(membership));
}
