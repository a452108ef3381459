use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use teamroles_domain::RoleId;
use uuid::Uuid;

use crate::dto::{CreateRoleRequest, RoleResponse, RoleSearchQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_role_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let Json(payload) = payload?;

    let role = state.role_service.create_role(payload.into_input()?).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_service
        .get_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    role_id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<RoleResponse>> {
    let Path(role_id) = role_id?;

    let role = state
        .role_service
        .get_role(RoleId::from_uuid(role_id))
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn search_role_handler(
    State(state): State<AppState>,
    query: Result<Query<RoleSearchQuery>, QueryRejection>,
) -> ApiResult<Json<RoleResponse>> {
    let Query(query) = query?;
    let (user_id, team_id) = query.into_pair()?;

    let role = state
        .role_service
        .get_role_for_member(user_id, team_id)
        .await?;

    Ok(Json(RoleResponse::from(role)))
}
