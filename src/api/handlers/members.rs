use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::teams::load_team;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::member::{Member, MemberId, Username};
use crate::domain::team::TeamId;

/// Request body for creating a member
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub username: String,
    /// Team to join right away
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

/// Member representation returned by the API
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Option<MemberId>,
    pub username: String,
    pub team_id: Option<TeamId>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            username: member.username().to_string(),
            team_id: member.team_id(),
            created_at: member.base().created_at(),
            last_modified_at: member.base().last_modified_at(),
        }
    }
}

/// Create a member, optionally inside a team
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = Member::new(Username::new(req.username)?);

    let response = match req.team_id {
        None => {
            let mut member = member;
            state.members.save(&mut member).await?;
            MemberResponse::from(&member)
        }
        Some(team_id) => {
            let mut team = load_team(&state, team_id).await?;
            let event = team.add_member(member)?;

            let joined = team
                .members_mut()
                .last_mut()
                .ok_or_else(|| ApiError::internal_server_error("Joined member missing from team"))?;
            state.members.save(joined).await?;

            tracing::info!(?event, "Member joined team");
            MemberResponse::from(&*joined)
        }
    };

    tracing::info!(member_id = ?response.id, "Member created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a member by ID
///
/// GET /api/members/:id
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    Ok(Json(MemberResponse::from(&member)))
}

/// List the members of a team
///
/// GET /api/teams/:id/members
pub async fn list_team_members(
    State(state): State<AppState>,
    Path(team_id): Path<TeamId>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    // 404 for unknown teams rather than an empty list
    load_team(&state, team_id).await?;

    let members = state.members.find_by_team(team_id).await?;
    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// Delete a member
///
/// DELETE /api/members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> Result<StatusCode, ApiError> {
    state.members.delete(id).await?;

    tracing::info!(member_id = %id, "Member deleted");
    Ok(StatusCode::NO_CONTENT)
}
