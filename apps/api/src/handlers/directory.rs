use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use teamroles_domain::{TeamId, UserId};
use uuid::Uuid;

use crate::dto::{TeamResponse, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_teams_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TeamResponse>>> {
    let teams = state
        .team_service
        .get_teams()
        .await?
        .into_iter()
        .map(TeamResponse::from)
        .collect();

    Ok(Json(teams))
}

pub async fn get_team_handler(
    State(state): State<AppState>,
    team_id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<TeamResponse>> {
    let Path(team_id) = team_id?;

    let team = state
        .team_service
        .get_team(TeamId::from_uuid(team_id))
        .await?;

    Ok(Json(TeamResponse::from(team)))
}

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .get_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    user_id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(user_id) = user_id?;

    let user = state
        .user_service
        .get_user(UserId::from_uuid(user_id))
        .await?;

    Ok(Json(UserResponse::from(user)))
}
