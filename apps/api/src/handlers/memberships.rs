use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::dto::{CreateMembershipRequest, MembershipResponse, MembershipSearchQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_membership_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMembershipRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MembershipResponse>)> {
    let Json(payload) = payload?;

    let membership = state
        .membership_service
        .assign_role_to_membership(payload.into_input()?)
        .await?;

    Ok((StatusCode::CREATED, Json(MembershipResponse::from(membership))))
}

pub async fn search_memberships_handler(
    State(state): State<AppState>,
    query: Result<Query<MembershipSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MembershipResponse>>> {
    let Query(query) = query?;

    let memberships = state
        .membership_service
        .get_memberships(query.into_role_id()?)
        .await?
        .into_iter()
        .map(MembershipResponse::from)
        .collect();

    Ok(Json(memberships))
}
