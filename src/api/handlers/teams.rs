use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::members::MemberResponse;
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::member::MemberId;
use crate::domain::team::{Team, TeamId};

/// Team representation returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Option<TeamId>,
    pub members: Vec<MemberResponse>,
    /// `Display` rendering of the team
    pub display: String,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            members: team.members().iter().map(MemberResponse::from).collect(),
            display: team.to_string(),
            created_by: team.base().created_by().map(str::to_string),
            created_at: team.base().created_at(),
            last_modified_by: team.base().last_modified_by().map(str::to_string),
            last_modified_at: team.base().last_modified_at(),
        }
    }
}

pub(crate) async fn load_team(state: &AppState, id: TeamId) -> Result<Team, ApiError> {
    state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))
}

/// Create a new, empty team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let mut team = Team::new();
    state.teams.save(&mut team).await?;

    tracing::info!(team_id = ?team.id(), "Team created");
    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams with their members
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.find_all().await?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = load_team(&state, id).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team; its members remain without a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await?;

    tracing::info!(team_id = %id, "Team deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Link an existing member to a team
///
/// PUT /api/teams/:id/members/:member_id
pub async fn add_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(TeamId, MemberId)>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut team = load_team(&state, id).await?;
    let member = state
        .members
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", member_id)))?;

    let event = team.add_member(member)?;

    let linked = team
        .member_mut(member_id)
        .ok_or_else(|| ApiError::internal_server_error("Linked member missing from team"))?;
    state.members.save(linked).await?;

    tracing::info!(?event, "Member joined team");
    Ok(Json(TeamResponse::from(&team)))
}

/// Unlink a member from a team
///
/// DELETE /api/teams/:id/members/:member_id
pub async fn remove_member(
    State(state): State<AppState>,
    Path((id, member_id)): Path<(TeamId, MemberId)>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut team = load_team(&state, id).await?;

    let (mut member, event) = team.remove_member(member_id)?;
    state.members.save(&mut member).await?;

    tracing::info!(?event, "Member left team");
    Ok(Json(TeamResponse::from(&team)))
}
